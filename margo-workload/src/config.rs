//! Workload profile.
//!
//! The demo profile is fixed: five readings, 20 °C base, 3 °C per step,
//! two seconds apart. It is still carried as a value so the run loop and its
//! tests do not depend on global constants.

use std::time::Duration;

use margo_error::{Error, Result};

/// Number of readings emitted per run
pub const READING_COUNT: u32 = 5;

/// Temperature the formula starts from, in whole degrees Celsius
pub const BASE_TEMPERATURE_C: i32 = 20;

/// Temperature added per reading, in whole degrees Celsius
pub const TEMPERATURE_STEP_C: i32 = 3;

/// Pause between two consecutive readings
pub const READING_INTERVAL: Duration = Duration::from_secs(2);

// The demo profile must produce 23, 26, 29, 32, 35.
const _: () = assert!(READING_COUNT == 5);
const _: () = assert!(BASE_TEMPERATURE_C + TEMPERATURE_STEP_C == 23);
const _: () = assert!(BASE_TEMPERATURE_C + TEMPERATURE_STEP_C * READING_COUNT as i32 == 35);

/// Parameters of one workload run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Readings per run, numbered from 1
    pub reading_count: u32,
    /// Base of the temperature formula
    pub base_temperature_c: i32,
    /// Per-reading increment of the temperature formula
    pub temperature_step_c: i32,
    /// Pause between consecutive readings
    pub reading_interval: Duration,
}

impl WorkloadConfig {
    /// The fixed demo profile
    #[must_use]
    pub const fn demo() -> Self {
        Self {
            reading_count: READING_COUNT,
            base_temperature_c: BASE_TEMPERATURE_C,
            temperature_step_c: TEMPERATURE_STEP_C,
            reading_interval: READING_INTERVAL,
        }
    }

    /// Temperature for reading `sequence`: `base + sequence * step`.
    ///
    /// Returns `None` if the result does not fit in an `i32`.
    #[must_use]
    pub fn temperature_for(&self, sequence: u32) -> Option<i32> {
        i32::try_from(sequence)
            .ok()?
            .checked_mul(self.temperature_step_c)?
            .checked_add(self.base_temperature_c)
    }

    /// Check that the profile can be run to completion.
    ///
    /// # Errors
    ///
    /// [`Error::EMPTY_READING_PROFILE`] when no readings are requested and
    /// [`Error::TEMPERATURE_OVERFLOW`] when the formula leaves the `i32`
    /// range for any sequence number of the run.
    pub fn validate(&self) -> Result<()> {
        if self.reading_count == 0 {
            return Err(Error::EMPTY_READING_PROFILE);
        }
        // The formula is linear, so checking both ends covers the run.
        self.temperature_for(1)
            .and(self.temperature_for(self.reading_count))
            .map(|_| ())
            .ok_or(Error::TEMPERATURE_OVERFLOW)
    }

    /// Lower bound on wall-clock time for one run: one interval between
    /// each pair of consecutive readings.
    #[must_use]
    pub fn minimum_run_time(&self) -> Duration {
        self.reading_interval
            .saturating_mul(self.reading_count.saturating_sub(1))
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::demo()
    }
}
