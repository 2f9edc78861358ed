#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod bridge; // log/tracing adapters
pub mod clock;
pub mod colors;
pub mod config;
pub mod detection;
pub mod factory;
pub mod level;
pub mod logging; // PlainLogger, TtyLogger
pub mod message;
pub mod registry;
pub mod sink;
pub mod testing; // Test utilities

pub use clock::{Clock, SystemClock};
pub use colors::Color;
pub use config::{ColorMode, LagConfig};
pub use detection::DisplayMode;
pub use factory::{Lag, LagBuilder, create, create_with};
pub use level::Level;
pub use logging::{Logger, PlainLogger, TtyLogger};
pub use message::Message;
pub use registry::ColorRegistry;
pub use sink::{Sink, StderrSink, StdoutSink, WriterSink};

/// Log targets used for this crate's own diagnostics.
///
/// Records under these targets go to the host application's `log`
/// implementation; [`bridge::LagLog`] ignores them.
pub mod targets {
    /// Root target.
    pub const ROOT: &str = "lag";

    /// Namespace color assignment.
    pub const REGISTRY: &str = "lag::registry";

    /// Whether `target` is one of this crate's own targets.
    #[must_use]
    pub fn is_internal(target: &str) -> bool {
        target == ROOT
            || target
                .strip_prefix(ROOT)
                .is_some_and(|rest| rest.starts_with("::"))
    }

}
