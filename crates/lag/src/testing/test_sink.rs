//! TestSink for capturing log lines in tests
//!
//! Provides a [`Sink`] that records every line in memory instead of writing
//! to stderr.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use strip_ansi_escapes::strip;

use crate::sink::Sink;

/// A sink that captures output for testing
///
/// Clones share the same buffer, so hand one clone to the logger and keep
/// another for assertions. Lines are kept both raw and with ANSI escape
/// sequences stripped.
#[derive(Clone)]
pub struct TestSink {
    buffer: Arc<Mutex<TestBuffer>>,
    terminal: bool,
    failing: bool,
}

#[derive(Debug, Default)]
struct TestBuffer {
    /// Exact bytes written, newlines included
    text: String,
    /// Lines with ANSI codes stripped
    lines: Vec<String>,
    /// Lines with ANSI codes preserved
    raw_lines: Vec<String>,
}

impl TestSink {
    /// Create a sink that reports as non-interactive
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(false, false)
    }

    /// Create a sink that reports as an interactive terminal
    #[must_use]
    pub fn terminal() -> Self {
        Self::new_inner(true, false)
    }

    /// Create a sink whose every write fails with `BrokenPipe`
    #[must_use]
    pub fn failing() -> Self {
        Self::new_inner(false, true)
    }

    fn new_inner(terminal: bool, failing: bool) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(TestBuffer::default())),
            terminal,
            failing,
        }
    }

    fn with_buffer<T>(&self, f: impl FnOnce(&mut TestBuffer) -> T) -> T {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut buffer)
    }

    /// Get all captured lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.with_buffer(|b| b.lines.clone())
    }

    /// Get all captured lines (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.with_buffer(|b| b.raw_lines.clone())
    }

    /// Everything written, byte for byte
    #[must_use]
    pub fn text(&self) -> String {
        self.with_buffer(|b| b.text.clone())
    }

    /// Get stripped output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Check if stripped output contains a string
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.output_string().contains(needle)
    }

    /// Check if stripped output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Clear the buffer
    pub fn clear(&self) {
        self.with_buffer(|b| {
            b.text.clear();
            b.lines.clear();
            b.raw_lines.clear();
        });
    }
}

impl Default for TestSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TestSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSink")
            .field("terminal", &self.terminal)
            .field("failing", &self.failing)
            .field("line_count", &self.output().len())
            .finish()
    }
}

impl Sink for TestSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        if self.failing {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "test sink closed"));
        }

        let stripped = strip(line.as_bytes());
        let stripped = String::from_utf8_lossy(&stripped).into_owned();

        self.with_buffer(|b| {
            b.text.push_str(line);
            b.text.push('\n');
            b.raw_lines.push(line.to_string());
            b.lines.push(stripped);
        });
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_not_terminal() {
        assert!(!TestSink::new().is_terminal());
        assert!(TestSink::terminal().is_terminal());
    }

    #[test]
    fn test_output_capture() {
        let sink = TestSink::new();
        sink.write_line("Hello, world!").unwrap();
        assert!(sink.contains("Hello"));
        assert_eq!(sink.text(), "Hello, world!\n");
    }

    #[test]
    fn test_strips_ansi() {
        let sink = TestSink::new();
        sink.write_line("\x1b[31mred\x1b[0m plain").unwrap();
        assert_eq!(sink.output(), ["red plain"]);
        assert_eq!(sink.raw_output(), ["\x1b[31mred\x1b[0m plain"]);
    }

    #[test]
    fn test_matches_regex() {
        let sink = TestSink::new();
        sink.write_line("took +42ms").unwrap();
        assert!(sink.matches(r"\+\d+ms$"));
        assert!(!sink.matches(r"\+\d+s$"));
    }

    #[test]
    fn test_clear() {
        let sink = TestSink::new();
        sink.write_line("Some output").unwrap();
        sink.assert_line_count(1);
        sink.clear();
        sink.assert_line_count(0);
        assert!(sink.text().is_empty());
    }

    #[test]
    fn test_clones_share_buffer() {
        let sink = TestSink::new();
        let other = sink.clone();
        other.write_line("Test").unwrap();
        sink.assert_contains("Test");
    }

    #[test]
    fn test_failing_sink() {
        let sink = TestSink::failing();
        let err = sink.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        sink.assert_line_count(0);
    }
}
