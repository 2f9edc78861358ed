//! Testing utilities for lag output
//!
//! Provides `TestSink` for capturing and asserting on log lines and
//! `ManualClock` for frozen or stepped timestamps.

mod clock;
mod test_sink;

pub use clock::ManualClock;
pub use test_sink::TestSink;
