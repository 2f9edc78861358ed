//! Tracing subscriber integration.
//!
//! Provides a tracing `Layer` and builder that route events through a
//! [`Lag`] logger. Records forwarded from the `log` facade are normalized
//! back to their original target first.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use super::logger::target_namespace;
use crate::factory::Lag;
use crate::level::Level;
use crate::logging::Logger;
use crate::message::Message;
use crate::targets;

/// A tracing layer that writes events through a [`Lag`] logger.
///
/// The `message` field becomes the message text; other fields and the
/// enclosing span names are appended as `key=value` pairs. Events under the
/// crate's own `lag::*` targets are skipped.
#[derive(Debug)]
pub struct LagLayer {
    logger: Lag,
    targets: bool,
}

impl LagLayer {
    /// Create a new layer writing through `logger`.
    #[must_use]
    pub fn new(logger: Lag) -> Self {
        Self {
            logger,
            targets: true,
        }
    }

    /// Set whether event targets become child namespaces.
    #[must_use]
    pub fn with_targets(mut self, targets: bool) -> Self {
        self.targets = targets;
        self
    }
}

fn level_from_tracing(level: tracing::Level) -> Level {
    if level == tracing::Level::ERROR {
        Level::Error
    } else if level == tracing::Level::WARN {
        Level::Warn
    } else if level == tracing::Level::INFO {
        Level::Info
    } else {
        Level::Debug
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        let name = field.name();
        if name == "message" {
            if self.message.is_none() {
                self.message = Some(value);
            }
        } else if !name.starts_with("log.") {
            self.fields.push((field.name().to_string(), value));
        }
    }

    fn into_text(self, fallback: &str) -> String {
        let mut text = self.message.unwrap_or_else(|| fallback.to_string());
        for (key, value) in self.fields {
            text.push(' ');
            text.push_str(&key);
            text.push('=');
            text.push_str(&value);
        }
        text
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }
}

impl<S> Layer<S> for LagLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());
        if targets::is_internal(metadata.target()) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope.from_root().map(|span| span.name().to_string()).collect();
            if !spans.is_empty() {
                collector.fields.push(("span".to_string(), spans.join("::")));
            }
        }

        let level = level_from_tracing(*metadata.level());
        let message = Message::from(collector.into_text(metadata.name()));

        let result = if self.targets && !metadata.target().is_empty() {
            self.logger
                .on(&target_namespace(metadata.target()))
                .log_with_level(Some(level), message)
        } else {
            self.logger.log_with_level(Some(level), message)
        };
        // Layers cannot report errors.
        let _ = result;
    }
}

/// Builder for a tracing subscriber backed by a [`Lag`] logger.
#[derive(Debug)]
pub struct LagSubscriberBuilder {
    logger: Lag,
    targets: bool,
    level_filter: LevelFilter,
}

impl LagSubscriberBuilder {
    /// Create a new builder with defaults.
    #[must_use]
    pub fn new(logger: Lag) -> Self {
        Self {
            logger,
            targets: true,
            level_filter: LevelFilter::INFO,
        }
    }

    /// Toggle target namespaces.
    #[must_use]
    pub fn with_targets(mut self, show: bool) -> Self {
        self.targets = show;
        self
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn with_level_filter(mut self, filter: LevelFilter) -> Self {
        self.level_filter = filter;
        self
    }

    /// Build the subscriber without installing it.
    #[must_use]
    pub fn build(self) -> impl Subscriber + Send + Sync {
        let layer = LagLayer::new(self.logger).with_targets(self.targets);

        tracing_subscriber::registry()
            .with(self.level_filter)
            .with(layer)
    }

    /// Build and install as the global subscriber.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let subscriber = self.build();
        tracing::subscriber::set_global_default(subscriber)
    }
}
