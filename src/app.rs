use crate::components::{DefaultStyling, ThemeToggleButton, WithTheme};
use crate::conf::{RootElement, ToggleConf};

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let conf = ToggleConf {
        root: RootElement::Html,
        ..Default::default()
    };

    html! {
        <WithTheme {conf}>
            <DefaultStyling>
                <ThemeToggleButton/>
                <main>
                    <h1>{ "Theme toggle" }</h1>
                    <p>{ "The choice is remembered across reloads." }</p>
                </main>
            </DefaultStyling>
        </WithTheme>
    }
}
