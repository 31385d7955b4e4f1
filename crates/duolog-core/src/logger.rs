//! The logging core: one lock, two sinks
//!
//! A [`Logger`] is the single point of truth for "should this message be
//! shown, and where". Producer threads call [`Logger::emit`] (or the
//! `log_*!` macros); suppressed messages take a lock-free fast path, and
//! everything that passes the filter is decorated and written to the
//! enabled sinks inside one critical section, so lines from different
//! threads never interleave character-by-character.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::Local;
use parking_lot::Mutex;

use crate::error::{LoggerError, LoggerResult};
use crate::level::LogLevel;

/// Emitted in place of a message whose arguments failed to render.
const FORMAT_FAILURE_MESSAGE: &str = "[LOGGER] CRITICAL: MESSAGE FORMATTING FAILED";

/// Everything the critical section guards, as one unit.
struct SinkState {
    console: bool,
    file: bool,
    log_file: Option<File>,
}

/// Process-wide logging facility with a console and a file sink.
///
/// All methods take `&self`; the type is `Send + Sync` and is normally
/// shared by reference (see [`crate::global`]) or behind an `Arc`. Sink
/// toggles and the file handle live under a single mutex. The threshold is
/// the one exception: it is a relaxed atomic so the filtered-out fast path
/// never touches the lock. A `set_level` racing in-flight emits may filter
/// one or two borderline messages inconsistently near the change; that
/// race is accepted.
pub struct Logger {
    threshold: AtomicU8,
    sinks: Mutex<SinkState>,
}

impl Logger {
    /// Create a logger with the given threshold. The console sink starts
    /// enabled, the file sink disabled with no file open.
    pub fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
            sinks: Mutex::new(SinkState {
                console: true,
                file: false,
                log_file: None,
            }),
        }
    }

    /// Write `message` to every enabled sink, decorated with a timestamp
    /// and the level label.
    ///
    /// Returns immediately, without acquiring the sink lock, when `level`
    /// is less severe than the current threshold. Sink write failures are
    /// swallowed: logging must never crash the application it serves.
    pub fn emit(&self, level: LogLevel, message: &str) {
        if level as u8 > self.threshold.load(Ordering::Relaxed) {
            return;
        }

        let line = format_line(level, message);

        let mut sinks = self.sinks.lock();
        if sinks.console {
            let mut stderr = io::stderr().lock();
            #[cfg(feature = "color")]
            let _ = writeln!(stderr, "{}", crate::color::paint(level, &line));
            #[cfg(not(feature = "color"))]
            let _ = writeln!(stderr, "{line}");
        }
        if sinks.file {
            if let Some(file) = sinks.log_file.as_mut() {
                let _ = writeln!(file, "{line}");
                let _ = file.flush();
            }
        }
    }

    /// Like [`emit`](Self::emit), but renders lazily captured format
    /// arguments. The level filter runs before any formatting work, so a
    /// suppressed call never evaluates its arguments' `Display` impls.
    ///
    /// If rendering fails (a `Display`/`Debug` impl reporting
    /// `fmt::Error`), a fixed diagnostic line is emitted at
    /// [`LogLevel::Error`] instead of the intended message.
    pub fn emit_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level as u8 > self.threshold.load(Ordering::Relaxed) {
            return;
        }

        let mut message = String::new();
        if fmt::write(&mut message, args).is_err() {
            self.emit(LogLevel::Error, FORMAT_FAILURE_MESSAGE);
            return;
        }
        self.emit(level, &message);
    }

    /// Convenience: emit at `Error`.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }

    /// Convenience: emit at `Warning`.
    pub fn warning(&self, message: &str) {
        self.emit(LogLevel::Warning, message);
    }

    /// Convenience: emit at `Notice`.
    pub fn notice(&self, message: &str) {
        self.emit(LogLevel::Notice, message);
    }

    /// Convenience: emit at `Info`.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    /// Convenience: emit at `Debug`.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    /// Convenience: emit at `Debug2`.
    pub fn debug2(&self, message: &str) {
        self.emit(LogLevel::Debug2, message);
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Set the threshold. Visible to all subsequent emits.
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Whether the console sink is active.
    pub fn console_enabled(&self) -> bool {
        self.sinks.lock().console
    }

    /// Enable or disable the console sink.
    pub fn set_console_enabled(&self, enabled: bool) {
        self.sinks.lock().console = enabled;
    }

    /// Whether the file sink is active. An active file sink with no open
    /// file writes nothing.
    pub fn file_enabled(&self) -> bool {
        self.sinks.lock().file
    }

    /// Enable or disable the file sink. Toggling only gates writes; it
    /// never opens or closes the underlying file.
    pub fn set_file_enabled(&self, enabled: bool) {
        self.sinks.lock().file = enabled;
    }

    /// Redirect the file sink to `path`, opened for append (created if
    /// missing).
    ///
    /// Any previously open log file is closed before the new open is
    /// attempted, and both steps happen under the sink lock as one
    /// transition, so concurrent emits never observe a half-redirected
    /// handle. On failure the file sink is left with no open file and the
    /// error names the offending path; there is no rollback to the old
    /// file.
    pub fn open_log_file<P: AsRef<Path>>(&self, path: P) -> LoggerResult<()> {
        let path = path.as_ref();
        let mut sinks = self.sinks.lock();
        sinks.log_file = None;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;
        sinks.log_file = Some(file);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(crate::global::default_level())
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{stamp}] -- {level} :: {message}")
}

/// Log at [`LogLevel::Error`] through any logger handle:
/// `log_error!(logger, "boom: {}", cause)`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Error, format_args!($($arg)*))
    };
}

/// Log at [`LogLevel::Warning`].
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Warning, format_args!($($arg)*))
    };
}

/// Log at [`LogLevel::Notice`].
#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Notice, format_args!($($arg)*))
    };
}

/// Log at [`LogLevel::Info`].
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Info, format_args!($($arg)*))
    };
}

/// Log at [`LogLevel::Debug`].
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Debug, format_args!($($arg)*))
    };
}

/// Log at [`LogLevel::Debug2`].
#[macro_export]
macro_rules! log_debug2 {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit_args($crate::LogLevel::Debug2, format_args!($($arg)*))
    };
}
