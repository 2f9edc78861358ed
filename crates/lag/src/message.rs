//! Log message payloads.
//!
//! A message is either literal text or a producer closure that is only
//! invoked when the line is actually written.

use std::borrow::Cow;
use std::fmt;

/// Literal text or a deferred producer.
pub enum Message<'a> {
    /// Already resolved text.
    Text(Cow<'a, str>),
    /// Producer invoked once, at write time.
    Lazy(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> Message<'a> {
    /// Wrap a producer closure.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        Self::Lazy(Box::new(producer))
    }

    /// Use `literal` when present, otherwise fall back to `producer`.
    ///
    /// The producer is dropped without being called when a literal is given.
    pub fn or_else<T, F>(literal: Option<T>, producer: F) -> Self
    where
        T: Into<Cow<'a, str>>,
        F: FnOnce() -> String + 'a,
    {
        match literal {
            Some(text) => Self::Text(text.into()),
            None => Self::lazy(producer),
        }
    }

    /// The empty message.
    #[must_use]
    pub fn empty() -> Self {
        Self::Text(Cow::Borrowed(""))
    }

    /// Resolve to text, running the producer if there is one.
    #[must_use]
    pub fn resolve(self) -> Cow<'a, str> {
        match self {
            Self::Text(text) => text,
            Self::Lazy(producer) => Cow::Owned(producer()),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.debug_tuple("Lazy").finish_non_exhaustive(),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for Message<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or_else(Self::empty, |t| Self::Text(Cow::Borrowed(t)))
    }
}
