// Root of the yew theme state.
//
// `WithTheme` owns the toggle and hands children a read-only `ThemeCtx`.
// Children change the theme only through `ThemeState::toggle`, which is
// sent upstream to `WithTheme`.

use crate::components::imports::*;
use crate::conf::ToggleConf;
use crate::dom::{self, MediaPreference};
use crate::theme::prelude::{ThemeStore, ThemeSurface, ThemeToggle};
use web_sys::Element;

#[derive(derivative::Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Rc<Theme>,
    pub glyph: AttrValue,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    toggle_cb: Callback<()>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.toggle_cb.emit(());
    }
}

pub type ThemeCtx = Rc<ThemeState>;

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeState> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeState {
        &self.ctx
    }
}

impl ThemeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Theme context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }
}

/// Sets the theme attribute on the document root; the glyph is rendered by
/// `ThemeToggleButton` from the context.
pub struct RootSurface {
    root: Option<Element>,
    attribute: String,
}

impl RootSurface {
    fn new(conf: &ToggleConf) -> Self {
        let root = match dom::root_element(&gloo_utils::document(), conf.root) {
            Ok(root) => Some(root),
            Err(e) => {
                console::error!(format!("{}", e));
                None
            }
        };

        Self {
            root,
            attribute: conf.attribute.clone(),
        }
    }
}

impl ThemeSurface for RootSurface {
    fn set_root_theme(&self, theme: Themes) {
        if let Some(root) = &self.root {
            dom::set_theme_attribute(root, &self.attribute, theme);
        }
    }

    fn set_glyph(&self, _glyph: &str) {}
}

pub struct WithTheme {
    toggle: ThemeToggle<Box<dyn ThemeStore>, RootSurface>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub conf: ToggleConf,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ToggleTheme,
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let conf = ctx.props().conf.clone();
        let preference = MediaPreference::new(&conf.media_query);

        Self {
            toggle: ThemeToggle::init(
                dom::local_or_memory_store(),
                RootSurface::new(&conf),
                &preference,
                conf,
            ),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(ThemeState {
            theme: Rc::new(Theme::from(self.toggle.active())),
            glyph: self.toggle.glyph().to_owned().into(),
            toggle_cb: ctx.link().callback(|()| Msg::ToggleTheme),
        });

        html! {
            <ContextProvider<ThemeCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToggleTheme => {
                let theme = self.toggle.toggle();
                console::log!(format!("WithTheme toggled to {}", theme));
                true
            }
        }
    }
}
