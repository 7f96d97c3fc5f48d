// Tracing definitions
//

use gloo_console as console;
use tracing::{subscriber::set_global_default, Level, Metadata, Subscriber};
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    Registry,
};

static CRATE_NAME: &str = "theme_toggle";

pub struct TracingSubscriber {
    crate_level: Level,
    default_level: Level,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            crate_level: Level::DEBUG,
            default_level: Level::WARN,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(unused)]
    pub fn crate_level(mut self, value: Level) -> Self {
        self.crate_level = value;
        self
    }

    #[allow(unused)]
    pub fn default_level(mut self, value: Level) -> Self {
        self.default_level = value;
        self
    }

    /// Installs a subscriber writing to the browser console.
    pub fn set_global_default(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        set_global_default(self.build(ConsoleMakeWriter))
    }

    // wasm32-unknown-unknown has no system clock, so no timestamps
    pub fn build<Sink>(self, sink: Sink) -> impl Subscriber + Sync + Send
    where
        Sink: for<'a> MakeWriter<'a> + Sync + Send + 'static,
    {
        let target_filter = filter::Targets::new()
            .with_target(CRATE_NAME, self.crate_level)
            .with_default(self.default_level);

        Registry::default().with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(sink)
                .with_filter(target_filter),
        )
    }
}

/// Routes each formatted event to the console method matching its level.
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&self.buf).trim_end().to_owned();
        match self.level {
            Level::ERROR => console::error!(line),
            Level::WARN => console::warn!(line),
            Level::INFO => console::info!(line),
            _ => console::debug!(line),
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(subscriber: TracingSubscriber, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = subscriber.build(move || sink.clone());
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn crate_events_pass_at_crate_level() {
        let out = capture(TracingSubscriber::new(), || {
            tracing::debug!(
                target: "theme_toggle::theme::toggle",
                theme = "dark",
                "using remembered theme"
            );
        });
        assert!(out.contains("using remembered theme"), "{out}");
        assert!(out.contains("theme=\"dark\""), "{out}");
    }

    #[test]
    fn foreign_events_use_default_level() {
        let out = capture(TracingSubscriber::new(), || {
            tracing::info!(target: "yew::scheduler", "noise");
            tracing::warn!(target: "yew::scheduler", "kept");
        });
        assert!(!out.contains("noise"), "{out}");
        assert!(out.contains("kept"), "{out}");
    }

    #[test]
    fn crate_level_is_configurable() {
        let out = capture(TracingSubscriber::new().crate_level(Level::WARN), || {
            tracing::info!(target: "theme_toggle", "toggling theme");
        });
        assert!(out.is_empty(), "{out}");
    }
}
