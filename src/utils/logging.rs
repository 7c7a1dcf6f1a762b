//! `tracing` output for the browser console.
//!
//! [`ConsoleLayer`] formats each event as `target: message key=value ...` and
//! hands it to the matching `console.*` method.

use std::fmt::Write as _;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Forwards events at or above `max_level` to `web_sys::console`.
pub struct ConsoleLayer {
    max_level: Level,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self { max_level }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);
        let line = visitor.finish(metadata.target());

        #[cfg(target_arch = "wasm32")]
        {
            let line = wasm_bindgen::JsValue::from_str(&line);
            match *metadata.level() {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{} {}", metadata.level(), line);
    }
}

/// Collects the message and extra fields of one event.
#[derive(Debug, Default)]
struct ConsoleVisitor {
    message: String,
    fields: String,
}

impl ConsoleVisitor {
    fn finish(self, target: &str) -> String {
        format!("{}: {}{}", target, self.message, self.fields)
    }
}

impl tracing::field::Visit for ConsoleVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the console layer as the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init();
}
