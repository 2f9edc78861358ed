//! Logger construction.
//!
//! [`create`] and [`create_with`] cover the common cases; [`LagBuilder`]
//! exposes the clock, registry and color policy.

use std::io;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::{ColorMode, LagConfig};
use crate::detection::DisplayMode;
use crate::level::Level;
use crate::logging::{Logger, PlainLogger, TtyLogger};
use crate::message::Message;
use crate::registry::ColorRegistry;
use crate::sink::{Sink, StderrSink};

/// A logger of either variant, as chosen by the factory.
#[derive(Debug, Clone)]
pub enum Lag {
    Plain(PlainLogger),
    Interactive(TtyLogger),
}

impl Lag {
    /// Create a builder with default settings.
    #[must_use]
    pub fn builder() -> LagBuilder {
        LagBuilder::new()
    }

    /// Check if this is the colorized variant.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }

    /// The shared sink.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn Sink> {
        match self {
            Self::Plain(logger) => logger.sink(),
            Self::Interactive(logger) => logger.sink(),
        }
    }
}

impl Logger for Lag {
    fn namespace(&self) -> Option<&str> {
        match self {
            Self::Plain(logger) => logger.namespace(),
            Self::Interactive(logger) => logger.namespace(),
        }
    }

    fn log_with_level(&self, level: Option<Level>, message: Message<'_>) -> io::Result<()> {
        match self {
            Self::Plain(logger) => logger.log_with_level(level, message),
            Self::Interactive(logger) => logger.log_with_level(level, message),
        }
    }

    fn on(&self, namespace: &str) -> Self {
        match self {
            Self::Plain(logger) => Self::Plain(logger.on(namespace)),
            Self::Interactive(logger) => Self::Interactive(logger.on(namespace)),
        }
    }
}

impl From<PlainLogger> for Lag {
    fn from(logger: PlainLogger) -> Self {
        Self::Plain(logger)
    }
}

impl From<TtyLogger> for Lag {
    fn from(logger: TtyLogger) -> Self {
        Self::Interactive(logger)
    }
}

/// Create a logger writing to stderr.
///
/// The color policy comes from the environment (see
/// [`LagConfig::from_env`]); with no overrides the interactive variant is
/// used exactly when stderr is a terminal.
#[must_use]
pub fn create(namespace: Option<&str>) -> Lag {
    LagBuilder::new()
        .maybe_namespace(namespace)
        .config(LagConfig::from_env())
        .build()
}

/// Create a logger writing to `sink`, with the same policy as [`create`].
#[must_use]
pub fn create_with<S: Sink + 'static>(namespace: Option<&str>, sink: S) -> Lag {
    LagBuilder::new()
        .maybe_namespace(namespace)
        .sink(sink)
        .config(LagConfig::from_env())
        .build()
}

/// Builder for configuring a logger.
///
/// # Example
///
/// ```ignore
/// use lag::{ColorMode, Lag};
///
/// let lag = Lag::builder()
///     .namespace("worker")
///     .color(ColorMode::Never)
///     .build();
/// ```
pub struct LagBuilder {
    namespace: Option<String>,
    sink: Option<Arc<dyn Sink>>,
    clock: Option<Arc<dyn Clock>>,
    registry: Option<Arc<ColorRegistry>>,
    config: LagConfig,
}

impl Default for LagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LagBuilder {
    /// Create a new builder: stderr, system clock, global registry and
    /// automatic color detection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            sink: None,
            clock: None,
            registry: None,
            config: LagConfig::default(),
        }
    }

    /// Set the namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set or clear the namespace.
    #[must_use]
    pub fn maybe_namespace(mut self, namespace: Option<&str>) -> Self {
        self.namespace = namespace.map(str::to_string);
        self
    }

    /// Write to `sink`.
    #[must_use]
    pub fn sink<S: Sink + 'static>(self, sink: S) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Write to an already shared sink.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Read timestamps from `clock`.
    #[must_use]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Use `registry` instead of the process-wide one.
    #[must_use]
    pub fn registry(mut self, registry: Arc<ColorRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: LagConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the color policy.
    #[must_use]
    pub fn color(mut self, color: ColorMode) -> Self {
        self.config.color = color;
        self
    }

    /// Build the logger, choosing the variant for the sink.
    #[must_use]
    pub fn build(self) -> Lag {
        let sink = self.sink.unwrap_or_else(|| Arc::new(StderrSink));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let namespace = self.namespace.as_deref();

        match DisplayMode::resolve(self.config.color, sink.as_ref()) {
            DisplayMode::Interactive => {
                let registry = self.registry.unwrap_or_else(ColorRegistry::global);
                Lag::Interactive(TtyLogger::with_parts(namespace, sink, clock, registry))
            }
            DisplayMode::Plain => Lag::Plain(PlainLogger::with_clock(namespace, sink, clock)),
        }
    }
}
