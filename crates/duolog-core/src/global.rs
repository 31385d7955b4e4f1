//! Process-wide logger access
//!
//! Components normally receive a `&Logger` (or an `Arc`) from whoever
//! constructed them; [`global`] is the well-known accessor for the rest.
//! Installing an explicitly built instance with [`init`] keeps
//! single-instance semantics without scattering hidden global state
//! through the call sites.

use once_cell::sync::OnceCell;

use crate::level::LogLevel;
use crate::logger::Logger;

/// Threshold compiled in when nothing else is configured.
const BUILD_DEFAULT_LEVEL: LogLevel = if cfg!(debug_assertions) {
    LogLevel::Debug
} else {
    LogLevel::Info
};

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Initial threshold for a default-constructed logger: the `DUOLOG_LEVEL`
/// environment variable (a level name, case-insensitive) when it parses,
/// otherwise the build-profile default.
pub fn default_level() -> LogLevel {
    std::env::var("DUOLOG_LEVEL")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(BUILD_DEFAULT_LEVEL)
}

/// Install `logger` as the process-wide instance.
///
/// Returns `false` when an instance is already in place (including the
/// lazily-built default), in which case `logger` is discarded.
pub fn init(logger: Logger) -> bool {
    GLOBAL.set(logger).is_ok()
}

/// The process-wide logger. Lazily builds `Logger::default()` on first
/// use when [`init`] was never called.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_hands_out_one_instance() {
        let first = global() as *const Logger;
        let second = global() as *const Logger;
        assert_eq!(first, second);

        // Too late to replace it.
        assert!(!init(Logger::new(LogLevel::Error)));
    }

    #[test]
    fn default_level_is_one_of_the_six() {
        // Whatever the environment says, the fallback chain must land on a
        // defined level.
        let level = default_level();
        assert_eq!(level, LogLevel::from_u8(level as u8));
    }
}
