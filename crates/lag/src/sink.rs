//! Output sinks.
//!
//! A sink writes whole lines and can tell whether it is attached to an
//! interactive terminal. Every line is written with a single `write_all`
//! followed by a flush, so lines from concurrent callers never interleave.

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

/// Destination for log lines.
pub trait Sink: Send + Sync {
    /// Write `line` followed by a newline, then flush.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Whether the sink is attached to an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Flush any buffered output.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

fn terminated(line: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
    buf
}

/// The process's standard error stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(&terminated(line))?;
        stderr.flush()
    }

    fn is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// The process's standard output stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&terminated(line))?;
        stdout.flush()
    }

    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Any [`Write`] implementation behind a mutex.
///
/// The terminal flag is fixed at construction; use [`WriterSink::detect`]
/// for handles that can answer the question themselves.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: Mutex<W>,
    terminal: bool,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a non-interactive writer.
    pub fn new(writer: W) -> Self {
        Self::with_terminal(writer, false)
    }

    /// Wrap a writer with an explicit terminal flag.
    pub fn with_terminal(writer: W, terminal: bool) -> Self {
        Self {
            inner: Mutex::new(writer),
            terminal,
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + IsTerminal> WriterSink<W> {
    /// Wrap a writer, asking it whether it is a terminal.
    pub fn detect(writer: W) -> Self {
        let terminal = writer.is_terminal();
        Self::with_terminal(writer, terminal)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&terminated(line))?;
        writer.flush()
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn flush(&self) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_writer_sink_appends_newline() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_writer_sink_terminal_flag() {
        assert!(!WriterSink::new(Vec::new()).is_terminal());
        assert!(WriterSink::with_terminal(Vec::new(), true).is_terminal());
    }

    #[test]
    fn test_writer_sink_detect_file_is_not_terminal() {
        let file = tempfile::tempfile().unwrap();
        let sink = WriterSink::detect(file);
        assert!(!sink.is_terminal());
    }

    #[test]
    fn test_writer_sink_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let sink = WriterSink::new(file.reopen().unwrap());
        sink.write_line("to disk").unwrap();

        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "to disk\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_propagates_write_error() {
        let sink = WriterSink::new(Broken);
        let err = sink.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
