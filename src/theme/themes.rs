#[derive(Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum Themes {
    Dark,
    #[default]
    Light,
}

impl Themes {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to the root attribute and the persisted store.
    pub fn session_id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::fmt::Display for Themes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.session_id())
    }
}

impl TryFrom<&str> for Themes {
    type Error = UnknownTheme;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let theme = match value {
            "dark" => Self::Dark,
            "light" => Self::Light,
            other => return Err(UnknownTheme(other.to_owned())),
        };
        debug_assert_eq!(
            theme.session_id(),
            value,
            "resulting theme's session_id must match with the provided value"
        );
        Ok(theme)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("{0:?} is not a supported theme. Use either `light` or `dark`.")]
pub struct UnknownTheme(pub String);

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: AttrValue,
    pub id: Themes,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub box_border_color: AttrValue,
}

struct RawTheme<'a> {
    pub name: &'a str,
    pub id: Themes,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> RawTheme<'a> {
    fn dark() -> Self {
        let light = "white";

        Self {
            name: "Dark",
            id: Themes::Dark,
            bg_color: "#1B2430",
            contrast_bg_color: "#11171e",
            text_color: light,
            box_border_color: light,
        }
    }

    fn light() -> Self {
        let dark = "#212529";
        Self {
            name: "Light",
            id: Themes::Light,
            bg_color: "#FEFCF3",
            contrast_bg_color: "#efede6",
            text_color: dark,
            box_border_color: dark,
        }
    }
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme) -> Self {
        Theme {
            name: theme.name.to_owned().into(),
            id: theme.id,
            bg_color: theme.bg_color.to_owned().into(),
            contrast_bg_color: theme.contrast_bg_color.to_owned().into(),
            text_color: theme.text_color.to_owned().into(),
            box_border_color: theme.box_border_color.to_owned().into(),
        }
    }
}

impl From<Themes> for Theme {
    fn from(value: Themes) -> Self {
        match value {
            Themes::Dark => RawTheme::dark(),
            Themes::Light => RawTheme::light(),
        }
        .into()
    }
}

use yew::AttrValue;

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Themes::Dark, Themes::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn parses_session_ids() {
        assert_ok_eq!(Themes::try_from("dark"), Themes::Dark);
        assert_ok_eq!(Themes::try_from("light"), Themes::Light);
    }

    #[test]
    fn rejects_unknown_values() {
        for value in ["", "Dark", "LIGHT", "pastel", " dark"] {
            assert_err!(Themes::try_from(value), "{value:?}");
        }
    }

    #[test]
    fn palette_matches_theme() {
        for theme in [Themes::Dark, Themes::Light] {
            assert_eq!(Theme::from(theme).id, theme);
        }
        assert_ne!(
            Theme::from(Themes::Dark).bg_color,
            Theme::from(Themes::Light).bg_color
        );
    }

    #[test]
    fn system_preference_maps_to_theme() {
        assert_eq!(Themes::from_prefers_dark(true), Themes::Dark);
        assert_eq!(Themes::from_prefers_dark(false), Themes::Light);
    }
}
