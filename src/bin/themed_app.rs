use gloo_console as console;
use theme_toggle::{app::App, telemetry};

fn main() {
    if let Err(e) = telemetry::TracingSubscriber::new().set_global_default() {
        console::warn!(format!("tracing is disabled: {}", e));
    }

    yew::Renderer::<App>::new().render();
}
