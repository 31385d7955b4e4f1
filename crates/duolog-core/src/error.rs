//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the logging core.
///
/// Only log-file redirection can fail audibly; a silently missing log file
/// is an operator-facing configuration error. Everything else the logger
/// does degrades internally instead of propagating.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Opening the log file for append failed
    #[error("unable to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to parse a level name, e.g. from the environment
#[derive(Debug, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

pub type LoggerResult<T> = Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_error_names_the_path() {
        let err = LoggerError::OpenLogFile {
            path: PathBuf::from("/var/log/missing/app.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/var/log/missing/app.log"));
    }
}
