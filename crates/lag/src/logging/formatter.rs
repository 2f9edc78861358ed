//! Line composition for both logger variants.

use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::colors::{Color, LEVEL_COLORS, MSG_COLOR, paint};
use crate::level::Level;

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS +HHMM`.
#[must_use]
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    let format = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    );
    ts.format(format).unwrap_or_else(|_| ts.to_string())
}

/// Human-readable time since the previous interactive line.
///
/// `+0ms` without a previous line (or when the clock went backwards),
/// otherwise whole minutes, whole seconds or whole milliseconds depending
/// on magnitude. Values are truncated, never rounded.
#[must_use]
pub fn elapsed_suffix(prev: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(prev) = prev else {
        return "+0ms".to_string();
    };

    let delta = now - prev;
    if delta.is_negative() {
        "+0ms".to_string()
    } else if delta >= Duration::MINUTE {
        format!("+{}m", delta.whole_minutes())
    } else if delta >= Duration::SECOND {
        format!("+{}s", delta.whole_seconds())
    } else {
        format!("+{}ms", delta.whole_milliseconds())
    }
}

/// `<timestamp> [<namespace>] <LEVEL> <message>`, absent parts omitted.
#[must_use]
pub fn plain_line(
    now: OffsetDateTime,
    namespace: Option<&str>,
    level: Option<Level>,
    message: &str,
) -> String {
    let mut line = format_timestamp(now);
    if let Some(ns) = namespace {
        line.push_str(" [");
        line.push_str(ns);
        line.push(']');
    }
    if let Some(level) = level {
        line.push(' ');
        line.push_str(level.as_str());
    }
    line.push(' ');
    line.push_str(message);
    line
}

/// `<ns> <LEVEL> <message> <elapsed>` with namespace, level and message
/// colorized. Namespace and level are omitted when absent.
#[must_use]
pub fn tty_line(
    namespace: Option<(&str, Color)>,
    level: Option<Level>,
    message: &str,
    elapsed: &str,
) -> String {
    let mut parts = Vec::with_capacity(4);
    if let Some((ns, color)) = namespace {
        parts.push(paint(ns, color));
    }
    if let Some(level) = level {
        parts.push(paint(level.as_str(), LEVEL_COLORS[level.index()]));
    }
    parts.push(paint(message, MSG_COLOR));
    parts.push(elapsed.to_string());
    parts.join(" ")
}
