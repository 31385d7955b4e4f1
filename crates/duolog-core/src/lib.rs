//! Duolog Core
//!
//! Thread-safe logging core with a console and a file sink, front-end
//! agnostic: the GUI (or any other caller) only ever hands messages to a
//! [`Logger`], never touches sink internals.
//!
//! - level-based filtering with a lock-free fast path for suppressed
//!   messages
//! - zero, one or two simultaneous sinks per record (stderr, append-mode
//!   file), serialized so concurrent lines never interleave
//! - lazy format arguments via the `log_*!` macros, filtered before any
//!   formatting work happens
//! - optional per-level console colors behind the `color` cargo feature
//!
//! ```rust,no_run
//! use duolog_core::{LogLevel, Logger};
//!
//! # fn main() -> duolog_core::LoggerResult<()> {
//! let logger = Logger::new(LogLevel::Info);
//! logger.open_log_file("/var/log/app.log")?;
//! logger.set_file_enabled(true);
//!
//! logger.notice("starting up");
//! duolog_core::log_info!(logger, "listening on port {}", 4242);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod global;
pub mod level;
pub mod logger;

#[cfg(feature = "color")]
mod color;

// Re-export commonly used types
pub use error::{LoggerError, LoggerResult, ParseLevelError};
pub use global::{global, init};
pub use level::LogLevel;
pub use logger::Logger;
