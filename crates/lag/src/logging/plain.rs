//! Plain-text logger for non-interactive sinks.

use std::fmt;
use std::io;
use std::sync::Arc;

use super::formatter::plain_line;
use super::{Logger, child_namespace};
use crate::clock::{Clock, SystemClock};
use crate::level::Level;
use crate::message::Message;
use crate::sink::Sink;

/// Writes `<timestamp> [<namespace>] <LEVEL> <message>` lines.
///
/// No locking happens here: line atomicity is the sink's job.
#[derive(Clone)]
pub struct PlainLogger {
    namespace: Option<String>,
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
}

impl PlainLogger {
    /// Create a logger reading the system clock.
    #[must_use]
    pub fn new(namespace: Option<&str>, sink: Arc<dyn Sink>) -> Self {
        Self::with_clock(namespace, sink, Arc::new(SystemClock))
    }

    /// Create a logger with an explicit clock.
    #[must_use]
    pub fn with_clock(namespace: Option<&str>, sink: Arc<dyn Sink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            sink,
            clock,
        }
    }

    /// The shared sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }
}

impl Logger for PlainLogger {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn log_with_level(&self, level: Option<Level>, message: Message<'_>) -> io::Result<()> {
        let message = message.resolve();
        let line = plain_line(self.clock.now(), self.namespace(), level, &message);
        self.sink.write_line(&line)
    }

    fn on(&self, namespace: &str) -> Self {
        Self {
            namespace: Some(child_namespace(self.namespace(), namespace)),
            sink: self.sink.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl fmt::Debug for PlainLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainLogger")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
