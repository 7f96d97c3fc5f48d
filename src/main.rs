use gloo_console as console;
use theme_toggle::{dom, telemetry};

fn main() {
    if let Err(e) = telemetry::TracingSubscriber::new().set_global_default() {
        console::warn!(format!("tracing is disabled: {}", e));
    }

    if let Err(e) = dom::start_from_page() {
        dom::report(&e);
    }
}
