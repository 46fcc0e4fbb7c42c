//! The run loop.

use std::io::Write;

use margo_error::{Error, Result};
use tracing::{debug, instrument};

use crate::banner;
use crate::clock::{Clock, SystemClock};
use crate::config::WorkloadConfig;
use crate::pacing::{Pacer, ThreadPacer};
use crate::reading::Reading;

/// What a completed run emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Readings in emission order
    pub readings: Vec<Reading>,
    /// Number of pauses taken between readings
    pub pauses:   u32,
}

impl RunSummary {
    /// Temperatures in emission order
    #[must_use]
    pub fn temperatures(&self) -> Vec<i32> {
        self.readings.iter().map(|r| r.temperature_c).collect()
    }

    /// Timestamp of the first reading, if any
    #[must_use]
    pub fn first_timestamp(&self) -> Option<u64> {
        self.readings.first().map(|r| r.timestamp)
    }

    /// Timestamp of the last reading, if any
    #[must_use]
    pub fn last_timestamp(&self) -> Option<u64> {
        self.readings.last().map(|r| r.timestamp)
    }
}

/// A runnable sensor workload
///
/// Generic over its clock and pacer so the loop can be driven without real
/// time passing.
#[derive(Debug)]
pub struct Workload<C, P> {
    config: WorkloadConfig,
    clock:  C,
    pacer:  P,
}

impl Workload<SystemClock, ThreadPacer> {
    /// The demo profile on the system clock with real sleeps
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            config: WorkloadConfig::demo(),
            clock:  SystemClock,
            pacer:  ThreadPacer,
        }
    }
}

impl<C: Clock, P: Pacer> Workload<C, P> {
    /// Create a workload after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the configuration error from [`WorkloadConfig::validate`].
    pub fn new(config: WorkloadConfig, clock: C, pacer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            pacer,
        })
    }

    /// Profile this workload runs
    #[must_use]
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Run once, writing the full transcript to `out`.
    ///
    /// Emits the identification banner, a blank line, one line per reading
    /// with a pause between consecutive readings, a blank line and the
    /// completion banner. `out` is flushed after every reading.
    ///
    /// # Errors
    ///
    /// Stops at the first output or clock failure. The completion banner is
    /// never written for a failed run.
    #[instrument(name = "workload_run", skip_all, fields(readings = self.config.reading_count))]
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<RunSummary> {
        banner::write_identification(out)?;
        writeln!(out)?;
        out.flush()?;

        let mut readings = Vec::with_capacity(self.config.reading_count as usize);
        let mut pauses = 0;

        for sequence in 1..=self.config.reading_count {
            if sequence > 1 {
                self.pacer.pause(self.config.reading_interval);
                pauses += 1;
            }

            let reading = self.take_reading(sequence)?;
            writeln!(out, "{reading}")?;
            out.flush()?;

            debug!(
                sequence = reading.sequence,
                temperature_c = reading.temperature_c,
                timestamp = reading.timestamp,
                "emitted reading"
            );
            readings.push(reading);
        }

        writeln!(out)?;
        banner::write_completion(out)?;
        out.flush()?;

        Ok(RunSummary { readings, pauses })
    }

    fn take_reading(&self, sequence: u32) -> Result<Reading> {
        let temperature_c = self
            .config
            .temperature_for(sequence)
            .ok_or(Error::TEMPERATURE_OVERFLOW)?;
        let timestamp = self.clock.unix_timestamp()?;
        Ok(Reading::new(sequence, temperature_c, timestamp))
    }
}
