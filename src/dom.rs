// Binds the theme toggle to an already rendered page.
//
// The control is looked up once; a missing control is reported when binding,
// never later from the click handler.

use crate::conf::{RootElement, ToggleConf};
use crate::error::{ToggleError, ToggleResult};
use crate::theme::prelude::*;

use gloo_console as console;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, Window};

/// Attribute on `<html>` holding an optional JSON [`ToggleConf`].
pub const CONF_ATTRIBUTE: &str = "data-theme-toggle";

pub struct DomSurface {
    root: Element,
    control: Element,
    attribute: String,
}

impl DomSurface {
    pub fn locate(document: &Document, conf: &ToggleConf) -> ToggleResult<Self> {
        let control = find_control(|id| document.get_element_by_id(id), &conf.control_id)?;

        Ok(Self {
            root: root_element(document, conf.root)?,
            control,
            attribute: conf.attribute.clone(),
        })
    }

    pub fn control(&self) -> &Element {
        &self.control
    }
}

impl ThemeSurface for DomSurface {
    fn set_root_theme(&self, theme: Themes) {
        set_theme_attribute(&self.root, &self.attribute, theme);
    }

    fn set_glyph(&self, glyph: &str) {
        self.control.set_text_content(Some(glyph));
    }
}

/// Looks the control up by id, failing with a diagnostic naming the id.
pub fn find_control<E>(lookup: impl Fn(&str) -> Option<E>, id: &str) -> ToggleResult<E> {
    lookup(id).ok_or_else(|| ToggleError::MissingControl { id: id.to_owned() })
}

pub fn root_element(document: &Document, root: RootElement) -> ToggleResult<Element> {
    match root {
        RootElement::Body => document.body().map(Element::from),
        RootElement::Html => document.document_element(),
    }
    .ok_or_else(|| ToggleError::MissingRoot(root.as_ref().to_owned()))
}

pub fn set_theme_attribute(root: &Element, attribute: &str, theme: Themes) {
    if let Err(e) = root.set_attribute(attribute, theme.session_id()) {
        console::error!(format!("failed to set {}={}: {:?}", attribute, theme, e));
    }
}

/// `matchMedia` backed color scheme preference.
pub struct MediaPreference {
    window: Option<Window>,
    query: String,
}

impl MediaPreference {
    pub fn new(query: &str) -> Self {
        Self {
            window: web_sys::window(),
            query: query.to_owned(),
        }
    }
}

impl SystemPreference for MediaPreference {
    fn prefers_dark(&self) -> bool {
        self.window
            .as_ref()
            .and_then(|window| window.match_media(&self.query).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}

/// `localStorage`, or a session-only store when the browser refuses it.
pub fn local_or_memory_store() -> Box<dyn ThemeStore> {
    match LocalThemeStore::available() {
        Some(store) => Box::new(store),
        None => {
            console::warn!(
                "localStorage is unavailable, theme is remembered for this session only"
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn current_document() -> ToggleResult<Document> {
    web_sys::window()
        .ok_or(ToggleError::NoWindow)?
        .document()
        .ok_or(ToggleError::NoDocument)
}

/// Applies the initial theme and listens for clicks for the page lifetime.
pub fn bind(conf: ToggleConf) -> ToggleResult<()> {
    let document = current_document()?;
    let surface = DomSurface::locate(&document, &conf)?;
    let control = surface.control().clone();
    let preference = MediaPreference::new(&conf.media_query);

    let toggle = Rc::new(RefCell::new(ThemeToggle::init(
        local_or_memory_store(),
        surface,
        &preference,
        conf,
    )));
    tracing::info!(theme = %toggle.borrow().active(), "theme toggle bound");

    EventListener::new(&control, "click", move |_| {
        toggle.borrow_mut().toggle();
    })
    .forget();

    Ok(())
}

/// Binds once the document is parsed, right away if it already is.
pub fn start(conf: ToggleConf) -> ToggleResult<()> {
    let document = current_document()?;

    if is_loading(&document.ready_state()) {
        tracing::debug!("waiting for DOMContentLoaded");
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            if let Err(e) = bind(conf) {
                report(&e);
            }
        })
        .forget();
        Ok(())
    } else {
        bind(conf)
    }
}

// `Document.readyState` is one of "loading", "interactive" or "complete"
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// [`start`] with the configuration found on `<html data-theme-toggle='{...}'>`.
pub fn start_from_page() -> ToggleResult<()> {
    let document = current_document()?;
    start(conf_from_page(&document)?)
}

pub fn conf_from_page(document: &Document) -> ToggleResult<ToggleConf> {
    match document
        .document_element()
        .and_then(|html| html.get_attribute(CONF_ATTRIBUTE))
    {
        Some(json) => Ok(ToggleConf::from_json(&json)?),
        None => Ok(ToggleConf::default()),
    }
}

pub fn report(e: &ToggleError) {
    console::error!(format!("theme toggle disabled: {}", e));
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    #[test]
    fn missing_control_is_reported_with_its_id() {
        let err = find_control(|_| None::<()>, "theme-toggle").unwrap_err();
        match &err {
            ToggleError::MissingControl { id } => assert_eq!(id, "theme-toggle"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Toggle control #theme-toggle not found in the document"
        );
    }

    #[test]
    fn control_is_looked_up_by_configured_id() {
        let conf = ToggleConf {
            control_id: "mode".into(),
            ..Default::default()
        };
        let lookup = |id: &str| (id == "mode").then_some("button");

        assert_ok_eq!(find_control(lookup, &conf.control_id), "button");
        assert_err!(find_control(lookup, "theme-toggle"));
    }

    #[test]
    fn binds_immediately_unless_the_document_is_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }
}
