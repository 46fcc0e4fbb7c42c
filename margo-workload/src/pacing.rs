//! Pacing between readings.
//!
//! The only suspension point of the workload. Pauses block the single
//! thread of control and cannot be cancelled; stopping the process early is
//! the supervisor's job.

use std::thread;
use std::time::Duration;

use tracing::trace;

/// Blocks between two readings
pub trait Pacer {
    /// Suspend the caller for `interval`
    fn pause(&mut self, interval: Duration);
}

/// Sleeps the current thread (`poll_oneoff` under WASI)
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, interval: Duration) {
        trace!(interval_ms = interval.as_millis() as u64, "pausing before next reading");
        thread::sleep(interval);
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, interval: Duration) {
        (**self).pause(interval);
    }
}
