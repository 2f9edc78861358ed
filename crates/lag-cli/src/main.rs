//! lag CLI - log stdin lines (or a single message) through a lag logger.
//!
//! ```text
//! tail -f app.log | lag -n app -n tail -l info
//! lag -n deploy --level warn "rolling back"
//! ```

#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use lag::{ColorMode, Lag, LagConfig, Level, Logger, Message, StderrSink, StdoutSink};

/// lag - Timestamp, namespace and colorize log lines.
#[derive(Parser)]
#[command(name = "lag")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Namespace; repeat to nest (`-n app -n db` gives `app:db`).
    #[arg(long, short = 'n')]
    namespace: Vec<String>,

    /// Level attached to every line (debug, info, warn, error, fatal, unknown).
    #[arg(long, short = 'l')]
    level: Option<Level>,

    /// Color policy (auto, always, never). Defaults to LAG_COLOR and friends.
    #[arg(long)]
    color: Option<ColorMode>,

    /// Write to stdout instead of stderr.
    #[arg(long)]
    stdout: bool,

    /// Message to log. Without one, every stdin line is logged.
    #[arg(trailing_var_arg = true)]
    message: Vec<String>,
}

impl Cli {
    fn build_logger(&self) -> Lag {
        let mut config = LagConfig::from_env();
        if let Some(color) = self.color {
            config = config.with_color(color);
        }

        let builder = Lag::builder().config(config);
        let builder = if self.stdout {
            builder.sink(StdoutSink)
        } else {
            builder.sink(StderrSink)
        };

        let mut namespaces = self.namespace.iter();
        let root = builder
            .maybe_namespace(namespaces.next().map(String::as_str))
            .build();
        namespaces.fold(root, |logger, ns| logger.on(ns))
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let logger = cli.build_logger();

    if !cli.message.is_empty() {
        return logger.log_with_level(cli.level, Message::from(cli.message.join(" ")));
    }

    let mut stdin = io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if stdin.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        // Invalid UTF-8 is replaced rather than ending the stream.
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        logger.log_with_level(cli.level, Message::from(line))?;
    }
}

/// Strip a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stderr itself may be the broken sink.
            let _ = writeln!(io::stderr(), "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"one\n"), b"one");
        assert_eq!(trim_line_ending(b"two\r\n"), b"two");
        assert_eq!(trim_line_ending(b"last"), b"last");
        assert_eq!(trim_line_ending(b"lone\r"), b"lone\r");
        assert_eq!(trim_line_ending(b"\n"), b"");
    }
}
