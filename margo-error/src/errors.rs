// Margo - margo-error
// Module: Error Types
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;
use std::io;
use std::time::SystemTimeError;

use crate::codes;

/// `Error` categories for workload operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Standard output errors
    Io             = 1,
    /// System clock errors
    Clock          = 2,
    /// Workload profile errors
    Configuration  = 3,
    /// Startup errors (logging, argument handling)
    Initialization = 4,
}

impl ErrorCategory {
    /// Lower-case name of the category, suitable for structured log fields
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Clock => "clock",
            Self::Configuration => "configuration",
            Self::Initialization => "initialization",
        }
    }
}

/// Workload error
///
/// Errors are plain values: a category, a stable code and a static message.
/// They are cheap to copy and compare, which keeps test assertions simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Output stream rejected a write
    pub const OUTPUT_WRITE_FAILED: Self = Self::new(
        ErrorCategory::Io,
        codes::OUTPUT_WRITE_FAILED,
        "Failed to write to standard output",
    );
    /// Output stream closed before the run finished
    pub const OUTPUT_CLOSED: Self = Self::new(
        ErrorCategory::Io,
        codes::OUTPUT_CLOSED,
        "Standard output closed before the workload completed",
    );
    /// System clock is set before 1970-01-01T00:00:00Z
    pub const CLOCK_BEFORE_EPOCH: Self = Self::new(
        ErrorCategory::Clock,
        codes::CLOCK_BEFORE_EPOCH,
        "System clock reports a time before the Unix epoch",
    );
    /// Profile asks for no readings at all
    pub const EMPTY_READING_PROFILE: Self = Self::new(
        ErrorCategory::Configuration,
        codes::EMPTY_READING_PROFILE,
        "Reading count must be at least 1",
    );
    /// Base temperature plus step times count does not fit in an `i32`
    pub const TEMPERATURE_OVERFLOW: Self = Self::new(
        ErrorCategory::Configuration,
        codes::TEMPERATURE_OVERFLOW,
        "Temperature formula overflows for this profile",
    );
    /// Logging was initialised twice in one process
    pub const SUBSCRIBER_ALREADY_SET: Self = Self::new(
        ErrorCategory::Initialization,
        codes::SUBSCRIBER_ALREADY_SET,
        "A global tracing subscriber is already installed",
    );
    /// `RUST_LOG` or the level directive did not parse
    pub const INVALID_LOG_FILTER: Self = Self::new(
        ErrorCategory::Initialization,
        codes::INVALID_LOG_FILTER,
        "Invalid log filter directive",
    );

    /// Create a new error
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is an output (standard output) error
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        self.category == ErrorCategory::Io
    }

    /// Check if this is a clock error
    #[must_use]
    pub fn is_clock_error(&self) -> bool {
        self.category == ErrorCategory::Clock
    }

    /// Check if this is a configuration error
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        self.category == ErrorCategory::Configuration
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => Self::OUTPUT_CLOSED,
            _ => Self::OUTPUT_WRITE_FAILED,
        }
    }
}

impl From<SystemTimeError> for Error {
    fn from(_: SystemTimeError) -> Self {
        Self::CLOCK_BEFORE_EPOCH
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(
            ErrorCategory::Io,
            codes::OUTPUT_FORMAT_FAILED,
            "Formatting error (static)",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category_and_hex_code() {
        assert_eq!(
            Error::CLOCK_BEFORE_EPOCH.to_string(),
            "[Clock][E07D0] System clock reports a time before the Unix epoch"
        );
        assert_eq!(
            Error::OUTPUT_WRITE_FAILED.to_string(),
            "[Io][E03E8] Failed to write to standard output"
        );
    }

    #[test]
    fn test_category_predicates() {
        assert!(Error::OUTPUT_CLOSED.is_io_error());
        assert!(!Error::OUTPUT_CLOSED.is_clock_error());
        assert!(Error::CLOCK_BEFORE_EPOCH.is_clock_error());
        assert!(Error::TEMPERATURE_OVERFLOW.is_configuration_error());
        assert!(!Error::SUBSCRIBER_ALREADY_SET.is_configuration_error());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::Io.as_str(), "io");
        assert_eq!(ErrorCategory::Clock.as_str(), "clock");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
        assert_eq!(ErrorCategory::Initialization.as_str(), "initialization");
    }
}
