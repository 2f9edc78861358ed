//! Logger implementations.
//!
//! This module provides the two logger variants behind the [`Logger`] trait:
//! - [`PlainLogger`] - timestamped plain text for files, pipes and buffers
//! - [`TtyLogger`] - colorized output with elapsed-time suffixes for terminals
//!
//! Both write one flushed line per call and hand sink errors back to the
//! caller unchanged. Pick a variant with [`crate::create`] or
//! [`crate::Lag::builder`] rather than constructing one directly.
//!
//! # Example
//!
//! ```ignore
//! use lag::{Logger, Message};
//!
//! let lag = lag::create(Some("server"));
//! lag.info("listening")?;
//!
//! let db = lag.on("db");
//! db.debug(Message::lazy(|| format!("pool size {}", pool.size())))?;
//! ```

use std::io;

use crate::level::Level;
use crate::message::Message;

pub mod formatter;
mod plain;
mod tty;

pub use plain::PlainLogger;
pub use tty::TtyLogger;

/// Common surface of both logger variants.
pub trait Logger: Send + Sync {
    /// Namespace prefixed to every line, if any.
    fn namespace(&self) -> Option<&str>;

    /// Write one line with an optional level.
    fn log_with_level(&self, level: Option<Level>, message: Message<'_>) -> io::Result<()>;

    /// Derive a logger of the same variant for a child namespace.
    ///
    /// The child shares this logger's sink. Its namespace is
    /// `parent:child`, or just `child` when this logger has none.
    fn on(&self, namespace: &str) -> Self
    where
        Self: Sized;

    /// Write an unleveled line.
    fn log<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(None, message.into())
    }

    fn debug<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Debug), message.into())
    }

    fn info<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Info), message.into())
    }

    fn warn<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Warn), message.into())
    }

    fn error<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Error), message.into())
    }

    fn fatal<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Fatal), message.into())
    }

    fn unknown<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()>
    where
        Self: Sized,
    {
        self.log_with_level(Some(Level::Unknown), message.into())
    }
}

/// Level helpers for trait objects.
///
/// The trait's generic helpers need `Self: Sized`, so `&dyn Logger` and
/// `Box<dyn Logger>` get the same methods here.
impl dyn Logger + '_ {
    pub fn log<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(None, message.into())
    }

    pub fn debug<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Debug), message.into())
    }

    pub fn info<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Info), message.into())
    }

    pub fn warn<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Warn), message.into())
    }

    pub fn error<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Error), message.into())
    }

    pub fn fatal<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Fatal), message.into())
    }

    pub fn unknown<'a>(&self, message: impl Into<Message<'a>>) -> io::Result<()> {
        self.log_with_level(Some(Level::Unknown), message.into())
    }
}

/// Join a parent namespace and a child with `:`.
pub(crate) fn child_namespace(parent: Option<&str>, child: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}:{child}"),
        None => child.to_string(),
    }
}
