//! `log` crate integration.
//!
//! Routes records from the [`log`] facade through a [`Lag`] logger.
//!
//! # Usage
//!
//! ```ignore
//! use lag::bridge::LagLog;
//! use log::LevelFilter;
//!
//! LagLog::new(lag::create(Some("app")))
//!     .with_max_level(LevelFilter::Debug)
//!     .init()?;
//!
//! log::info!(target: "http::server", "listening");
//! // app:http:server INFO listening
//! ```

use std::borrow::Cow;

use log::{LevelFilter, Log, Metadata, Record};

use crate::factory::Lag;
use crate::level::Level;
use crate::logging::Logger;
use crate::message::Message;
use crate::targets;

/// A `log::Log` implementation backed by a [`Lag`] logger.
///
/// Level filtering happens at the facade: records above the configured
/// maximum never reach the logger. Write failures are dropped, since
/// `Log::log` has no way to report them.
#[derive(Debug)]
pub struct LagLog {
    logger: Lag,
    max_level: LevelFilter,
    targets: bool,
}

impl LagLog {
    /// Wrap `logger`, accepting `Info` and above with targets as namespaces.
    #[must_use]
    pub fn new(logger: Lag) -> Self {
        Self {
            logger,
            max_level: LevelFilter::Info,
            targets: true,
        }
    }

    /// Set the maximum level passed through.
    #[must_use]
    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    /// Set whether record targets become child namespaces.
    #[must_use]
    pub fn with_targets(mut self, targets: bool) -> Self {
        self.targets = targets;
        self
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// Install as the global logger, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }

    fn logger_for(&self, target: &str) -> Cow<'_, Lag> {
        if self.targets && !target.is_empty() {
            Cow::Owned(self.logger.on(&target_namespace(target)))
        } else {
            Cow::Borrowed(&self.logger)
        }
    }
}

/// `a::b::c` becomes `a:b:c`.
pub(crate) fn target_namespace(target: &str) -> String {
    target.replace("::", ":")
}

impl Log for LagLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level && !targets::is_internal(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message::from(record.args().to_string());
        let _ = self
            .logger_for(record.target())
            .log_with_level(Some(Level::from(record.level())), message);
    }

    fn flush(&self) {
        let _ = self.logger.sink().flush();
    }
}
