//! Adapters for the `log` and `tracing` ecosystems.
//!
//! - [`LagLog`] - a `log::Log` implementation
//! - [`LagLayer`] / [`LagSubscriberBuilder`] - a `tracing_subscriber` layer
//!
//! Both map levels onto [`crate::Level`] (trace becomes `DEBUG`) and, by
//! default, turn the record target into a child namespace with `::`
//! replaced by `:`.

mod logger;
mod subscriber;

pub use logger::LagLog;
pub use subscriber::{LagLayer, LagSubscriberBuilder};
