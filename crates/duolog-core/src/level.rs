//! Log severity levels

use std::str::FromStr;

use crate::error::ParseLevelError;

/// Severity of a log record, most severe first.
///
/// A record is emitted when its level is at or above the configured
/// threshold, i.e. `level <= threshold`: a threshold of [`LogLevel::Info`]
/// emits `Error`, `Warning`, `Notice` and `Info` but suppresses `Debug`
/// and `Debug2`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Notice = 2,
    Info = 3,
    Debug = 4,
    Debug2 = 5,
}

impl LogLevel {
    /// Unpadded uppercase name, e.g. `"WARNING"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Debug2 => "DEBUG2",
        }
    }

    /// Inverse of `level as u8`. Out-of-range values clamp to the least
    /// severe level; they cannot occur for values produced by this crate.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Notice,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Debug2,
        }
    }
}

/// The level name left-justified to 7 characters, the field width used in
/// decorated log lines.
impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR  "),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Notice => write!(f, "NOTICE "),
            LogLevel::Info => write!(f, "INFO   "),
            LogLevel::Debug => write!(f, "DEBUG  "),
            LogLevel::Debug2 => write!(f, "DEBUG2 "),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "debug2" => Ok(LogLevel::Debug2),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
