use crate::components::imports::*;

// Circle in the right corner with absolute position
pub struct ThemeToggleButton {
    theme_ctx: ThemeCtxSub,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or(AttrValue::Static("theme-toggle"))]
    pub id: AttrValue,
}

impl Component for ThemeToggleButton {
    type Message = ThemeToggleMsg;
    type Properties = ThemeToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(move |_| Self::Message::ToggleTheme);

        let state = self.theme_ctx.as_ref();
        let toggle_border_color = &state.theme.box_border_color;
        let toggle_bg_color = &state.theme.contrast_bg_color;
        let toggle_style = css!(
            "
                user-select: none;
                position: absolute; right: 15px; top: 15px;
                outline: 3px solid ${toggle_border_color};
                background-color: ${toggle_bg_color};
                border: none;
                height: 2em; width: 2em;
                border-radius: 100%;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            ",
            toggle_border_color = toggle_border_color,
            toggle_bg_color = toggle_bg_color,
        );

        let label = format!("Switch to {} theme", state.theme.id.toggled());

        html! {
            <button
                id={ ctx.props().id.clone() }
                {onclick}
                class={ toggle_style }
                aria-label={ label.clone() }
                title={ label }
            >
                { state.glyph.clone() }
            </button>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ToggleTheme => {
                self.theme_ctx.as_ref().toggle();
                false
            }
        }
    }
}
