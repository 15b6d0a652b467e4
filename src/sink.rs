//! Line-oriented destinations for dispatcher output.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

lazy_static! {
	// Serializes stdout and stderr together so an info line and an error
	// line from different threads never interleave.
	static ref STDIO_LOCK: Mutex<()> = Mutex::new(());
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Severity {
	Info,
	Error,
}

/// Receives one complete line per call, in call order.
pub trait Sink {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>);
}

impl<S: Sink + ?Sized> Sink for &S {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>) {
		(**self).write_line(severity, line)
	}
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>) {
		(**self).write_line(severity, line)
	}
}

const ERROR_PREFIX: &str = "ERROR: ";

/// Info lines to stdout, error lines to stderr with an `ERROR: ` prefix.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdioSink;

impl Sink for StdioSink {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>) {
		let _guard = STDIO_LOCK.lock().unwrap_or_else(|e| e.into_inner());

		let _ = match severity {
			Severity::Info => writeln!(std::io::stdout().lock(), "{}", line),
			Severity::Error => {
				writeln!(std::io::stderr().lock(), "{}{}", ERROR_PREFIX, line)
			}
		};
	}
}

/// Forwards lines to the `log` facade under the `glcheck` target.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>) {
		match severity {
			Severity::Info => log::info!(target: "glcheck", "{}", line),
			Severity::Error => log::error!(target: "glcheck", "{}", line),
		}
	}
}

/// Keeps every line, error lines with the `ERROR: ` prefix.
#[derive(Debug, Default)]
pub struct MemorySink {
	lines: Mutex<Vec<String>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lines(&self) -> Vec<String> {
		self.lock().clone()
	}

	pub fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.lock())
	}

	fn lock(&self) -> MutexGuard<'_, Vec<String>> {
		self.lines.lock().unwrap_or_else(|e| e.into_inner())
	}
}

impl Sink for MemorySink {
	fn write_line(&self, severity: Severity, line: fmt::Arguments<'_>) {
		let line = match severity {
			Severity::Info => line.to_string(),
			Severity::Error => format!("{}{}", ERROR_PREFIX, line),
		};
		self.lock().push(line);
	}
}
