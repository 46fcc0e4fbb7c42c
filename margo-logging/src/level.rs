//! Log level definitions for the Margo workload.
//!
//! This module provides the level type accepted on the command line and in
//! the `MARGO_LOG_LEVEL` environment variable.

use core::fmt;
use core::str::FromStr;

use tracing::Level;

/// Log levels for workload diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Trace-level messages (detailed debugging information)
    Trace,
    /// Debug-level messages (useful for developers)
    Debug,
    /// Informational messages (general runtime information)
    Info,
    /// Warning messages (potential issues)
    Warn,
    /// Error messages (recoverable errors)
    Error,
    /// Critical error messages (severe issues)
    Critical,
}

/// Error returned when a string does not name a log level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError {
    /// The rejected input
    pub invalid_level: String,
}

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid log level '{}' (expected trace, debug, info, warn, error or critical)",
            self.invalid_level
        )
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLogLevelError {
                invalid_level: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LogLevel {
    /// Creates a `LogLevel` from a string, defaulting to Warn for invalid
    /// levels
    #[must_use]
    pub fn from_string_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Self::Warn)
    }

    /// Convert `LogLevel` to a string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// The `tracing` level this maps onto. `tracing` has no level above
    /// ERROR, so Critical shares it.
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error | Self::Critical => Level::ERROR,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn as_filter_directive(self) -> &'static str {
        match self {
            Self::Critical => "error",
            other => other.as_str(),
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Warn
    }
}
