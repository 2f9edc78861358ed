//! Shared namespace color registry.
//!
//! Interactive loggers share one [`ColorRegistry`]: it maps each namespace to
//! a palette color and remembers when the last interactive line was written.
//! Both pieces of state sit behind a single mutex.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use time::OffsetDateTime;

use crate::clock::Clock;
use crate::colors::{Color, NS_COLORS};
use crate::logging::formatter::elapsed_suffix;
use crate::targets;

#[derive(Debug, Default)]
struct RegistryState {
    colors: HashMap<String, Color>,
    prev: Option<OffsetDateTime>,
}

/// Namespace colors plus the previous-line timestamp.
///
/// Colors are handed out from [`NS_COLORS`] in registration order. Once a
/// namespace has a color it keeps it for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    state: Mutex<RegistryState>,
}

impl ColorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`crate::create`].
    #[must_use]
    pub fn global() -> Arc<ColorRegistry> {
        static GLOBAL: OnceLock<Arc<ColorRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up the color for `namespace`, assigning the next palette entry
    /// on first use.
    pub fn color_for(&self, namespace: &str) -> Color {
        let (color, assigned) = {
            let mut state = self.lock();
            if let Some(color) = state.colors.get(namespace) {
                return *color;
            }
            let color = NS_COLORS[state.colors.len() % NS_COLORS.len()];
            state.colors.insert(namespace.to_string(), color);
            (color, state.colors.len())
        };

        log::trace!(
            target: targets::REGISTRY,
            "assigned color {} to namespace '{}' ({} registered)",
            color,
            namespace,
            assigned
        );
        color
    }

    /// Color previously assigned to `namespace`, without assigning one.
    #[must_use]
    pub fn color_of(&self, namespace: &str) -> Option<Color> {
        self.lock().colors.get(namespace).copied()
    }

    /// Number of distinct namespaces that have received a color.
    #[must_use]
    pub fn assigned(&self) -> usize {
        self.lock().colors.len()
    }

    /// Timestamp of the last line written through [`ColorRegistry::emit`].
    #[must_use]
    pub fn previous(&self) -> Option<OffsetDateTime> {
        self.lock().prev
    }

    /// Run one interactive write as a single critical section.
    ///
    /// Reads the current time from `clock`, hands the elapsed suffix to
    /// `write`, and records the time as the previous timestamp once `write`
    /// succeeds. A failed write leaves the previous timestamp untouched and
    /// its error is returned as is.
    pub fn emit<F>(&self, clock: &dyn Clock, write: F) -> io::Result<()>
    where
        F: FnOnce(&str) -> io::Result<()>,
    {
        let mut state = self.lock();
        let now = clock.now();
        let suffix = elapsed_suffix(state.prev, now);
        write(&suffix)?;
        state.prev = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualClock;
    use std::thread;
    use time::Duration;

    #[test]
    fn test_first_namespace_gets_first_color() {
        let registry = ColorRegistry::new();
        assert_eq!(registry.color_for("app"), NS_COLORS[0]);
        assert_eq!(registry.color_for("db"), NS_COLORS[1]);
    }

    #[test]
    fn test_color_is_stable() {
        let registry = ColorRegistry::new();
        let first = registry.color_for("app");
        registry.color_for("other");
        assert_eq!(registry.color_for("app"), first);
        assert_eq!(registry.assigned(), 2);
    }

    #[test]
    fn test_palette_wraps() {
        let registry = ColorRegistry::new();
        for i in 0..NS_COLORS.len() {
            registry.color_for(&format!("ns{i}"));
        }
        assert_eq!(registry.color_for("wrapped"), NS_COLORS[0]);
    }

    #[test]
    fn test_color_of_does_not_assign() {
        let registry = ColorRegistry::new();
        assert_eq!(registry.color_of("missing"), None);
        assert_eq!(registry.assigned(), 0);
    }

    #[test]
    fn test_concurrent_registration_assigns_once() {
        let registry = Arc::new(ColorRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.color_for("shared"))
            })
            .collect();

        let colors: Vec<Color> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(colors.iter().all(|c| *c == colors[0]));
        assert_eq!(registry.assigned(), 1);
    }

    #[test]
    fn test_emit_first_line_is_zero() {
        let registry = ColorRegistry::new();
        let clock = ManualClock::frozen();
        let mut seen = String::new();
        registry
            .emit(&clock, |suffix| {
                seen = suffix.to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, "+0ms");
        assert_eq!(registry.previous(), Some(clock.now()));
    }

    #[test]
    fn test_emit_measures_from_previous_line() {
        let registry = ColorRegistry::new();
        let clock = ManualClock::frozen();
        registry.emit(&clock, |_| Ok(())).unwrap();

        clock.advance(Duration::milliseconds(2500));
        let mut seen = String::new();
        registry
            .emit(&clock, |suffix| {
                seen = suffix.to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, "+2s");
    }

    #[test]
    fn test_failed_write_keeps_previous() {
        let registry = ColorRegistry::new();
        let clock = ManualClock::frozen();
        registry.emit(&clock, |_| Ok(())).unwrap();
        let before = registry.previous();

        clock.advance(Duration::seconds(5));
        let err = registry
            .emit(&clock, |_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone")))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(registry.previous(), before);
    }
}
