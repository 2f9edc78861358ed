//! Colorized logger for interactive terminals.

use std::fmt;
use std::io;
use std::sync::Arc;

use super::formatter::tty_line;
use super::{Logger, child_namespace};
use crate::clock::{Clock, SystemClock};
use crate::colors::Color;
use crate::level::Level;
use crate::message::Message;
use crate::registry::ColorRegistry;
use crate::sink::Sink;

/// Writes colorized `<ns> <LEVEL> <message> <elapsed>` lines.
///
/// The namespace color is resolved once, at construction, from the shared
/// [`ColorRegistry`]. Every write runs inside [`ColorRegistry::emit`], so the
/// elapsed suffix and the previous-line timestamp stay consistent across
/// threads and lines are never interleaved.
#[derive(Clone)]
pub struct TtyLogger {
    namespace: Option<String>,
    namespace_color: Option<Color>,
    sink: Arc<dyn Sink>,
    clock: Arc<dyn Clock>,
    registry: Arc<ColorRegistry>,
}

impl TtyLogger {
    /// Create a logger using the global registry and the system clock.
    #[must_use]
    pub fn new(namespace: Option<&str>, sink: Arc<dyn Sink>) -> Self {
        Self::with_parts(namespace, sink, Arc::new(SystemClock), ColorRegistry::global())
    }

    /// Create a logger with an explicit clock and registry.
    #[must_use]
    pub fn with_parts(
        namespace: Option<&str>,
        sink: Arc<dyn Sink>,
        clock: Arc<dyn Clock>,
        registry: Arc<ColorRegistry>,
    ) -> Self {
        let namespace_color = namespace.map(|ns| registry.color_for(ns));
        Self {
            namespace: namespace.map(str::to_string),
            namespace_color,
            sink,
            clock,
            registry,
        }
    }

    /// Color assigned to this logger's namespace.
    #[must_use]
    pub fn namespace_color(&self) -> Option<Color> {
        self.namespace_color
    }

    /// The shared registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<ColorRegistry> {
        &self.registry
    }

    /// The shared sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }
}

impl Logger for TtyLogger {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn log_with_level(&self, level: Option<Level>, message: Message<'_>) -> io::Result<()> {
        // Producers run before taking the registry lock.
        let message = message.resolve();
        let namespace = self.namespace.as_deref().zip(self.namespace_color);

        self.registry.emit(self.clock.as_ref(), |elapsed| {
            self.sink
                .write_line(&tty_line(namespace, level, &message, elapsed))
        })
    }

    fn on(&self, namespace: &str) -> Self {
        let namespace = child_namespace(self.namespace(), namespace);
        Self::with_parts(
            Some(namespace.as_str()),
            self.sink.clone(),
            self.clock.clone(),
            self.registry.clone(),
        )
    }
}

impl fmt::Debug for TtyLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtyLogger")
            .field("namespace", &self.namespace)
            .field("namespace_color", &self.namespace_color)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::NS_COLORS;
    use crate::testing::{ManualClock, TestSink};
    use time::Duration;

    struct Fixture {
        sink: TestSink,
        clock: ManualClock,
        registry: Arc<ColorRegistry>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                sink: TestSink::terminal(),
                clock: ManualClock::frozen(),
                registry: Arc::new(ColorRegistry::new()),
            }
        }

        fn logger(&self, namespace: Option<&str>) -> TtyLogger {
            TtyLogger::with_parts(
                namespace,
                Arc::new(self.sink.clone()),
                Arc::new(self.clock.clone()),
                self.registry.clone(),
            )
        }
    }

    #[test]
    fn test_first_line_has_zero_elapsed() {
        let fx = Fixture::new();
        fx.logger(None).log("hi").unwrap();
        assert_eq!(fx.sink.raw_output(), ["\x1b[37mhi\x1b[0m +0ms"]);
    }

    #[test]
    fn test_colorizes_namespace_and_level() {
        let fx = Fixture::new();
        fx.logger(Some("main")).error("boom").unwrap();
        assert_eq!(
            fx.sink.raw_output(),
            ["\x1b[96mmain\x1b[0m \x1b[31mERROR\x1b[0m \x1b[37mboom\x1b[0m +0ms"]
        );
        assert_eq!(fx.sink.output(), ["main ERROR boom +0ms"]);
    }

    #[test]
    fn test_elapsed_floors_seconds() {
        let fx = Fixture::new();
        let logger = fx.logger(None);
        logger.log("one").unwrap();
        fx.clock.advance(Duration::milliseconds(2500));
        logger.log("two").unwrap();
        assert_eq!(fx.sink.output(), ["one +0ms", "two +2s"]);
    }

    #[test]
    fn test_elapsed_is_shared_between_loggers() {
        let fx = Fixture::new();
        fx.logger(Some("a")).log("first").unwrap();
        fx.clock.advance(Duration::milliseconds(40));
        fx.logger(Some("b")).log("second").unwrap();
        fx.clock.advance(Duration::seconds(90));
        fx.logger(None).log("third").unwrap();
        assert_eq!(
            fx.sink.output(),
            ["a first +0ms", "b second +40ms", "third +1m"]
        );
    }

    #[test]
    fn test_namespace_color_assigned_at_construction() {
        let fx = Fixture::new();
        let logger = fx.logger(Some("app"));
        assert_eq!(logger.namespace_color(), Some(NS_COLORS[0]));
        assert_eq!(fx.registry.assigned(), 1);
        assert!(fx.sink.output().is_empty());
    }

    #[test]
    fn test_no_namespace_assigns_no_color() {
        let fx = Fixture::new();
        let logger = fx.logger(None);
        assert_eq!(logger.namespace_color(), None);
        assert_eq!(fx.registry.assigned(), 0);
    }

    #[test]
    fn test_on_derives_colored_child() {
        let fx = Fixture::new();
        let root = fx.logger(Some("app"));
        let child = root.on("db");
        assert_eq!(child.namespace(), Some("app:db"));
        assert_eq!(child.namespace_color(), Some(NS_COLORS[1]));
        assert!(Arc::ptr_eq(root.registry(), child.registry()));
        assert!(Arc::ptr_eq(root.sink(), child.sink()));
    }

    #[test]
    fn test_same_child_twice_keeps_color() {
        let fx = Fixture::new();
        let root = fx.logger(Some("app"));
        let a = root.on("db");
        let b = root.on("db");
        assert_eq!(a.namespace(), b.namespace());
        assert_eq!(a.namespace_color(), b.namespace_color());
        assert_eq!(fx.registry.assigned(), 2);
    }

    #[test]
    fn test_failed_write_does_not_advance_previous() {
        let registry = Arc::new(ColorRegistry::new());
        let clock = ManualClock::frozen();
        let logger = TtyLogger::with_parts(
            None,
            Arc::new(TestSink::failing()),
            Arc::new(clock.clone()),
            registry.clone(),
        );
        let err = logger.log("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(registry.previous(), None);
    }
}
