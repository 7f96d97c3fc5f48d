use super::store::ThemeStore;
use super::surface::{SystemPreference, ThemeSurface};
use super::themes::Themes;
use crate::conf::ToggleConf;

/// Owns the active theme and keeps the surface and the store in step with it.
///
/// Initialization only reads the store. Every [`ThemeToggle::toggle`] writes
/// the new theme through to the store, and a failed write still updates the
/// surface for the current session.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct ThemeToggle<St, Su> {
    #[derivative(Debug = "ignore")]
    store: St,
    #[derivative(Debug = "ignore")]
    surface: Su,
    conf: ToggleConf,
    active: Themes,
}

impl<St: ThemeStore, Su: ThemeSurface> ThemeToggle<St, Su> {
    pub fn init(
        store: St,
        surface: Su,
        preference: &impl SystemPreference,
        conf: ToggleConf,
    ) -> Self {
        let active = resolve(&store, preference, &conf.storage_key);
        let toggle = Self {
            store,
            surface,
            conf,
            active,
        };
        toggle.apply();
        toggle
    }

    pub fn toggle(&mut self) -> Themes {
        let next = self.active.toggled();
        tracing::info!(from = %self.active, to = %next, "toggling theme");

        self.active = next;
        self.surface.set_root_theme(next);
        if let Err(e) = self.store.set(&self.conf.storage_key, next.session_id()) {
            tracing::warn!(error = %e, "failed to remember theme");
        }
        self.surface.set_glyph(self.conf.glyph(next));
        next
    }

    pub fn active(&self) -> Themes {
        self.active
    }

    pub fn glyph(&self) -> &str {
        self.conf.glyph(self.active)
    }

    pub fn conf(&self) -> &ToggleConf {
        &self.conf
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn surface(&self) -> &Su {
        &self.surface
    }

    fn apply(&self) {
        self.surface.set_root_theme(self.active);
        self.surface.set_glyph(self.conf.glyph(self.active));
    }
}

/// Remembered theme if recognized, otherwise the system preference.
pub fn resolve(
    store: &impl ThemeStore,
    preference: &impl SystemPreference,
    key: &str,
) -> Themes {
    match store.get(key) {
        Ok(Some(remembered)) => match Themes::try_from(remembered.as_str()) {
            Ok(theme) => {
                tracing::debug!(%theme, "using remembered theme");
                return theme;
            }
            Err(e) => tracing::warn!(error = %e, "ignoring remembered theme"),
        },
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "failed to read remembered theme"),
    }

    let theme = Themes::from_prefers_dark(preference.prefers_dark());
    tracing::debug!(%theme, "using system color scheme");
    theme
}
