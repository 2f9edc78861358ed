//! Configuration for logger construction.
//!
//! `LagConfig` decides whether the factory may pick the interactive logger,
//! supporting both programmatic and environment variable-based configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Whether colorized output is allowed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colorize only when the sink is a terminal
    #[default]
    Auto,
    /// Always use the interactive logger
    Always,
    /// Never use the interactive logger
    Never,
}

/// Error returned for an unrecognised color mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError(String);

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color mode '{}' (expected auto, always or never)",
            self.0
        )
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "1" | "true" | "yes" => Ok(ColorMode::Always),
            "never" | "0" | "false" | "no" => Ok(ColorMode::Never),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        })
    }
}

/// Logger construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LagConfig {
    /// Color selection policy
    pub color: ColorMode,
}

impl LagConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `LAG_COLOR` | auto/always/never | Color policy |
    /// | `LAG_FORCE_COLOR` | (set) | Force colorized output |
    /// | `LAG_PLAIN` | (set) | Force plain output |
    /// | `NO_COLOR` | (set) | Disable colors (standard) |
    ///
    /// Plain wins over force. Unrecognised `LAG_COLOR` values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LagConfig::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup("LAG_COLOR").and_then(|v| v.parse().ok()) {
            config.color = mode;
        }
        if lookup("LAG_FORCE_COLOR").is_some() {
            config.color = ColorMode::Always;
        }
        if lookup("LAG_PLAIN").is_some() || lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        config
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the color policy
    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Force colorized output
    #[must_use]
    pub fn force_color(self) -> Self {
        self.with_color(ColorMode::Always)
    }

    /// Enable plain text mode (no styling)
    #[must_use]
    pub fn plain_mode(self) -> Self {
        self.with_color(ColorMode::Never)
    }
}
