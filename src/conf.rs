// Configuration definitions, functions and tests
//

use crate::theme::themes::Themes;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RootElement {
    #[default]
    Body,
    Html,
}

impl AsRef<str> for RootElement {
    fn as_ref(&self) -> &str {
        match self {
            Self::Body => "body",
            Self::Html => "html",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConf {
    pub storage_key: String,
    pub control_id: String,
    pub root: RootElement,
    pub attribute: String,
    pub dark_glyph: String,
    pub light_glyph: String,
    pub media_query: String,
}

impl Default for ToggleConf {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            control_id: "theme-toggle".into(),
            root: RootElement::Body,
            attribute: "data-theme".into(),
            dark_glyph: "🌙".into(),
            light_glyph: "☀️".into(),
            media_query: "(prefers-color-scheme: dark)".into(),
        }
    }
}

impl ToggleConf {
    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "toggle configuration must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    pub fn glyph(&self, theme: Themes) -> &str {
        match theme {
            Themes::Dark => &self.dark_glyph,
            Themes::Light => &self.light_glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::assert_err;

    #[test]
    fn defaults() {
        let conf = ToggleConf::default();
        assert_eq!(conf.storage_key, "theme");
        assert_eq!(conf.control_id, "theme-toggle");
        assert_eq!(conf.root, RootElement::Body);
        assert_eq!(conf.attribute, "data-theme");
        assert_eq!(conf.glyph(Themes::Dark), "🌙");
        assert_eq!(conf.glyph(Themes::Light), "☀️");
    }

    #[test]
    fn empty_json_is_default() {
        let conf = ToggleConf::from_json("{}").expect("empty object is a valid conf");
        assert_eq!(conf, ToggleConf::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{ "root": "html", "control_id": "mode", "dark_glyph": "D" }"#;
        let conf = ToggleConf::from_json(json).unwrap();
        assert_eq!(conf.root, RootElement::Html);
        assert_eq!(conf.root.as_ref(), "html");
        assert_eq!(conf.control_id, "mode");
        assert_eq!(conf.glyph(Themes::Dark), "D");
        assert_eq!(conf.glyph(Themes::Light), "☀️");
        assert_eq!(conf.storage_key, "theme");
    }

    #[test]
    fn rejects_malformed_json() {
        #[derive(Debug)]
        struct Test<'a> {
            json: &'a str,
        }

        for test in [
            Test { json: "" },
            Test { json: "[]" },
            Test { json: r#"{ "root": "head" }"# },
            Test { json: r#"{ "storage_kee": "x" }"# },
        ] {
            assert_err!(ToggleConf::from_json(test.json), "{:?}", test);
        }
    }

    #[test]
    fn only_objects_are_accepted() {
        for json in ["[]", "null", "\"dark\"", "1"] {
            assert_err!(ToggleConf::from_json(json), "{:?}", json);
            let err = ToggleConf::from_json(json).unwrap_err();
            assert!(err.to_string().contains("JSON object"), "{}: {}", json, err);
        }
    }

    #[test]
    fn page_conf_errors_surface_as_toggle_errors() {
        let err: crate::error::ToggleError = ToggleConf::from_json("[]").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid toggle configuration"), "{}", err);
    }
}
