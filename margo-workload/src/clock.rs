//! Wall-clock source for reading timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

use margo_error::Result;

/// Source of reading timestamps
pub trait Clock {
    /// Current wall-clock time in whole seconds since the Unix epoch
    ///
    /// # Errors
    ///
    /// Implementations return a clock error when no meaningful time is
    /// available.
    fn unix_timestamp(&self) -> Result<u64>;
}

/// The host's real-time clock (`clock_time_get` under WASI)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> Result<u64> {
        Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn unix_timestamp(&self) -> Result<u64> {
        (**self).unix_timestamp()
    }
}
