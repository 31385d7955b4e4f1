//! Per-level console palette, compiled with the `color` feature

use colored::{ColoredString, Colorize};

use crate::level::LogLevel;

/// Wrap a decorated line in the color assigned to `level`. Console sink
/// only; the file sink always receives the plain line.
///
/// `colored` drops the escapes on its own when stderr is not a terminal
/// or `NO_COLOR` is set.
pub(crate) fn paint(level: LogLevel, line: &str) -> ColoredString {
    match level {
        LogLevel::Error => line.red().bold(),
        LogLevel::Warning => line.yellow().bold(),
        LogLevel::Notice => line.blue().bold(),
        LogLevel::Info => line.green().bold(),
        LogLevel::Debug => line.magenta().bold(),
        LogLevel::Debug2 => line.cyan().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_a_distinct_color() {
        let painted: Vec<String> = [
            LogLevel::Error,
            LogLevel::Warning,
            LogLevel::Notice,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Debug2,
        ]
        .iter()
        .map(|level| {
            format!("{:?}", paint(*level, "line").fgcolor())
        })
        .collect();

        for (i, a) in painted.iter().enumerate() {
            for b in painted.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
