// Margo - margo-error
// Module: Error Handling
//
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the Margo sensor workload.
//!
//! Every failure the workload can observe is reported as an [`Error`]
//! carrying a coarse [`ErrorCategory`], a stable numeric code from
//! [`codes`] and a static message. The workload has very few ways to fail,
//! so the taxonomy is small:
//!
//! ## I/O Errors (1000-1099)
//! - Standard output closed or unwritable
//! - Output flush failures
//!
//! ## Clock Errors (2000-2099)
//! - System clock set before the Unix epoch
//!
//! ## Configuration Errors (3000-3099)
//! - Empty reading profile
//! - Temperature arithmetic overflow
//!
//! ## Initialization Errors (4000-4099)
//! - Logging subscriber already installed
//! - Invalid log filter directives
//!
//! # Usage
//!
//! ```
//! use margo_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Configuration,
//!     codes::EMPTY_READING_PROFILE,
//!     "Reading count must be at least 1",
//! );
//! assert_eq!(error.to_string(), "[Configuration][E0BB8] Reading count must be at least 1");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codes;
mod errors;

pub use errors::{Error, ErrorCategory};

/// Result type for workload operations
pub type Result<T> = core::result::Result<T, Error>;
