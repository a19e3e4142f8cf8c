//! Verbosity-gated progress reporting for the conversion pipeline.
//!
//! Diagnostics go to stderr and never alter the converted output. Warnings
//! and errors always print; `-v` enables info/success lines and `-vv` adds
//! parsing details.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity and gating level of a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    /// Per-file progress, shown at `-v`.
    Info,
    /// Per-file completion, shown at `-v`.
    Success,
    /// Parsing diagnostics, shown at `-vv`.
    Detail,
    /// Always shown.
    Warning,
    /// Always shown.
    Error,
}

impl LogLevel {
    /// Minimum verbosity at which this level prints.
    fn threshold(self) -> u8 {
        match self {
            LogLevel::Warning | LogLevel::Error => 0,
            LogLevel::Info | LogLevel::Success => 1,
            LogLevel::Detail => 2,
        }
    }
}

/// Global reporter; verbosity is set once at startup from the CLI flags.
static REPORTER: Lazy<Reporter> = Lazy::new(Reporter::new);

/// Prints pipeline messages to stderr, gated by verbosity.
pub struct Reporter {
    verbosity: AtomicU8,
}

impl Reporter {
    fn new() -> Self {
        Self {
            verbosity: AtomicU8::new(0),
        }
    }

    pub fn set_verbosity(&self, level: u8) {
        self.verbosity.store(level, Ordering::Relaxed);
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Print a message if the current verbosity admits its level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if self.verbosity() < level.threshold() {
            return;
        }

        let prefix = match level {
            LogLevel::Info => "  ",
            LogLevel::Success => "✓ ",
            LogLevel::Detail => "    ",
            LogLevel::Warning => "⚠ ",
            LogLevel::Error => "❌ ",
        };
        eprintln!("{}{}", prefix, message);
    }
}

/// Set the global verbosity (0 = quiet, 1 = progress, 2 = diagnostics).
pub fn set_verbosity(level: u8) {
    REPORTER.set_verbosity(level);
}

// Convenient logging functions
pub fn log_info(message: impl AsRef<str>) {
    REPORTER.log(LogLevel::Info, message.as_ref());
}

pub fn log_success(message: impl AsRef<str>) {
    REPORTER.log(LogLevel::Success, message.as_ref());
}

pub fn log_detail(message: impl AsRef<str>) {
    REPORTER.log(LogLevel::Detail, message.as_ref());
}

pub fn log_warning(message: impl AsRef<str>) {
    REPORTER.log(LogLevel::Warning, message.as_ref());
}

pub fn log_error(message: impl AsRef<str>) {
    REPORTER.log(LogLevel::Error, message.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(LogLevel::Error.threshold(), 0);
        assert_eq!(LogLevel::Warning.threshold(), 0);
        assert_eq!(LogLevel::Info.threshold(), 1);
        assert_eq!(LogLevel::Success.threshold(), 1);
        assert_eq!(LogLevel::Detail.threshold(), 2);
    }
}
