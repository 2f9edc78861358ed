//! ANSI color codes and the palettes used by interactive loggers.

use std::fmt;

/// A numeric SGR color code (`ESC[<code>m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(30);
    pub const RED: Color = Color(31);
    pub const GREEN: Color = Color(32);
    pub const YELLOW: Color = Color(33);
    pub const BLUE: Color = Color(34);
    pub const MAGENTA: Color = Color(35);
    pub const CYAN: Color = Color(36);
    pub const WHITE: Color = Color(37);
    pub const LIGHT_BLACK: Color = Color(90);
    pub const LIGHT_RED: Color = Color(91);
    pub const LIGHT_GREEN: Color = Color(92);
    pub const LIGHT_YELLOW: Color = Color(93);
    pub const LIGHT_BLUE: Color = Color(94);
    pub const LIGHT_MAGENTA: Color = Color(95);
    pub const LIGHT_CYAN: Color = Color(96);
    pub const LIGHT_WHITE: Color = Color(97);

    /// Any raw SGR code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color of the message text.
pub const MSG_COLOR: Color = Color::WHITE;

/// Namespace palette, handed out in registration order and cycled.
pub const NS_COLORS: [Color; 14] = [
    Color::LIGHT_CYAN,
    Color::LIGHT_GREEN,
    Color::LIGHT_YELLOW,
    Color::LIGHT_BLUE,
    Color::LIGHT_MAGENTA,
    Color::LIGHT_CYAN,
    Color::LIGHT_RED,
    Color::CYAN,
    Color::GREEN,
    Color::YELLOW,
    Color::BLUE,
    Color::MAGENTA,
    Color::CYAN,
    Color::RED,
];

/// Level colors, indexed by [`crate::Level::index`].
pub const LEVEL_COLORS: [Color; 6] = [
    Color::CYAN,
    Color::GREEN,
    Color::YELLOW,
    Color::RED,
    Color::LIGHT_RED,
    Color::MAGENTA,
];

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the escape sequence for `color` and a reset.
#[must_use]
pub fn paint(text: &str, color: Color) -> String {
    format!("\x1b[{}m{text}{RESET}", color.code())
}
