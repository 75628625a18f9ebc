//! Dispatcher event logging.
//!
//! The client reports setter calls, outgoing requests, responses, and
//! classified failures as tagged events. Where they go is decided once at
//! construction via [`Logging`]: dropped, forwarded to `tracing`, or handed
//! to a caller-supplied [`EventSink`].
//!
//! Sinks return nothing, so a sink can never fail a call or change its
//! outcome.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Receives dispatcher events.
pub trait EventSink: Send + Sync {
    /// Records one tagged event. `detail` is already formatted.
    fn record(&self, tag: &str, detail: fmt::Arguments<'_>);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _tag: &str, _detail: fmt::Arguments<'_>) {}
}

/// Sink that forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, tag: &str, detail: fmt::Arguments<'_>) {
        tracing::debug!(target: "pushme", "{tag}: {detail}");
    }
}

/// Sink that keeps events in memory for inspection.
///
/// Clones share the same buffer, so a test can hand one clone to the client
/// and read events back through the other.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().unwrap().clone()
    }

    /// Tags in recording order.
    pub fn tags(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(tag, _)| tag.clone())
            .collect()
    }
}

impl Clone for MemorySink {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl EventSink for MemorySink {
    fn record(&self, tag: &str, detail: fmt::Arguments<'_>) {
        let mut events = self.events.lock().unwrap();
        events.push((tag.to_string(), detail.to_string()));
    }
}

/// How the client reports dispatcher events.
#[derive(Clone, Default)]
pub enum Logging {
    /// Drop everything.
    #[default]
    Disabled,
    /// Forward to `tracing` at debug level under the `pushme` target.
    Tracing,
    /// Hand events to the given sink.
    Custom(Arc<dyn EventSink>),
}

impl Logging {
    pub(crate) fn into_sink(self) -> Arc<dyn EventSink> {
        match self {
            Logging::Disabled => Arc::new(NoopSink),
            Logging::Tracing => Arc::new(TracingSink),
            Logging::Custom(sink) => sink,
        }
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logging::Disabled => f.write_str("Disabled"),
            Logging::Tracing => f.write_str("Tracing"),
            Logging::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
