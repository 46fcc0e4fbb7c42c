// Margo - margo-error
// Module: Error Codes
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for the Margo workload

// I/O error codes (1000-1099)
/// Writing to the output stream failed
pub const OUTPUT_WRITE_FAILED: u16 = 1000;
/// Output stream was closed by the reader
pub const OUTPUT_CLOSED: u16 = 1001;
/// Formatting a line into the output stream failed
pub const OUTPUT_FORMAT_FAILED: u16 = 1002;

// Clock error codes (2000-2099)
/// System clock reports a time before the Unix epoch
pub const CLOCK_BEFORE_EPOCH: u16 = 2000;

// Configuration error codes (3000-3099)
/// Workload profile requests zero readings
pub const EMPTY_READING_PROFILE: u16 = 3000;
/// Temperature formula overflows for the configured profile
pub const TEMPERATURE_OVERFLOW: u16 = 3001;

// Initialization error codes (4000-4099)
/// A global tracing subscriber is already installed
pub const SUBSCRIBER_ALREADY_SET: u16 = 4000;
/// Log filter directives could not be parsed
pub const INVALID_LOG_FILTER: u16 = 4001;
