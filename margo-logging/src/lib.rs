// Margo - margo-logging
// Module: Logging Infrastructure
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! # Margo Logging
//!
//! Logging infrastructure for the Margo sensor workload.
//!
//! The workload's standard output is a fixed, line-oriented contract read by
//! an external log collector, so every diagnostic produced through this crate
//! goes to standard error. Callers pick a [`LogLevel`] and a [`LogFormat`]
//! and call [`init_tracing`] once at startup; afterwards the ordinary
//! `tracing` macros are used everywhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use margo_error::{Error, Result};

/// Output formats for the stderr log stream.
pub mod format;

/// Log level definitions for categorizing message severity.
///
/// Levels run from Trace (most verbose) to Critical (most severe) and map
/// onto `tracing` levels, with Critical folded into ERROR.
pub mod level;

/// Global subscriber installation.
pub mod subscriber;

pub use format::{LogFormat, ParseLogFormatError};
pub use level::{LogLevel, ParseLogLevelError};
pub use subscriber::{init_tracing, LOG_FILTER_ENV, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
