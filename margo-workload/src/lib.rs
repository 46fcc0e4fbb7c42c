//! # Margo sensor workload
//!
//! A deliberately small program used to prove that a WebAssembly (WASI)
//! execution environment can run a workload to completion under a process
//! supervisor. It prints an identification banner, emits five synthetic
//! sensor readings two seconds apart, prints a completion banner and exits.
//!
//! The library half holds everything testable: the reading model, the
//! banners, and the run loop, which is generic over its output sink, its
//! [`Clock`] and its [`Pacer`]. The binary wires the loop to standard
//! output, the system clock and `std::thread::sleep`.
//!
//! ```
//! use std::time::Duration;
//! use margo_workload::{Clock, Pacer, Result, Workload, WorkloadConfig};
//!
//! struct Frozen;
//! impl Clock for Frozen {
//!     fn unix_timestamp(&self) -> Result<u64> {
//!         Ok(1_700_000_000)
//!     }
//! }
//!
//! struct NoWait;
//! impl Pacer for NoWait {
//!     fn pause(&mut self, _interval: Duration) {}
//! }
//!
//! let mut workload = Workload::new(WorkloadConfig::default(), Frozen, NoWait).unwrap();
//! let mut out = Vec::new();
//! let summary = workload.run(&mut out).unwrap();
//!
//! assert_eq!(summary.temperatures(), vec![23, 26, 29, 32, 35]);
//! assert!(String::from_utf8(out).unwrap().contains("[5] Sensor reading: temperature=35°C"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod banner;
pub mod clock;
pub mod config;
pub mod pacing;
pub mod reading;
mod workload;

pub use clock::{Clock, SystemClock};
pub use config::WorkloadConfig;
pub use margo_error::{Error, ErrorCategory, Result};
pub use pacing::{Pacer, ThreadPacer};
pub use reading::Reading;
pub use workload::{RunSummary, Workload};
