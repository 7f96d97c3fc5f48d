use super::themes::Themes;

/// Where the active theme becomes visible: the root attribute and the control glyph.
pub trait ThemeSurface {
    fn set_root_theme(&self, theme: Themes);
    fn set_glyph(&self, glyph: &str);
}

/// System-level "prefers dark color scheme" signal.
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

impl SystemPreference for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}
