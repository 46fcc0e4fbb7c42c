//! Sensor reading value type
//!
//! A reading exists only long enough to be printed. It is not sampled from
//! any sensor: the temperature is a function of the sequence number.

use core::fmt;

/// One synthetic sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Position in the run, starting at 1
    pub sequence:      u32,
    /// Temperature in whole degrees Celsius
    pub temperature_c: i32,
    /// Wall-clock time in seconds since the Unix epoch
    pub timestamp:     u64,
}

impl Reading {
    /// Create a reading
    #[must_use]
    pub const fn new(sequence: u32, temperature_c: i32, timestamp: u64) -> Self {
        Self {
            sequence,
            temperature_c,
            timestamp,
        }
    }
}

/// Renders the line the log collector parses, without a trailing newline.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Sensor reading: temperature={}°C, timestamp={}",
            self.sequence, self.temperature_c, self.timestamp
        )
    }
}
