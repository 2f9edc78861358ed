//! Interactive/plain display detection
//!
//! Determines which logger variant a sink gets. This is the only place that
//! asks a sink whether it is a terminal.

use crate::config::ColorMode;
use crate::sink::Sink;

/// Display mode representing the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Plain timestamped text
    #[default]
    Plain,
    /// Colorized output with elapsed-time suffixes
    Interactive,
}

impl DisplayMode {
    /// Resolve the mode for `sink` under the given color policy
    #[must_use]
    pub fn resolve(color: ColorMode, sink: &dyn Sink) -> Self {
        match color {
            ColorMode::Always => Self::Interactive,
            ColorMode::Never => Self::Plain,
            ColorMode::Auto if sink.is_terminal() => Self::Interactive,
            ColorMode::Auto => Self::Plain,
        }
    }

    /// Check if this is the interactive mode
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }

    /// Check if this is the plain mode
    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestSink;

    #[test]
    fn test_auto_follows_terminal() {
        assert_eq!(
            DisplayMode::resolve(ColorMode::Auto, &TestSink::terminal()),
            DisplayMode::Interactive
        );
        assert_eq!(
            DisplayMode::resolve(ColorMode::Auto, &TestSink::new()),
            DisplayMode::Plain
        );
    }

    #[test]
    fn test_always_ignores_terminal() {
        assert!(DisplayMode::resolve(ColorMode::Always, &TestSink::new()).is_interactive());
    }

    #[test]
    fn test_never_ignores_terminal() {
        assert!(DisplayMode::resolve(ColorMode::Never, &TestSink::terminal()).is_plain());
    }

    #[test]
    fn test_default_is_plain() {
        assert!(DisplayMode::default().is_plain());
    }
}
