//! Elapsed time measurement
//!
//! [`ElapsedTimer`] records an epoch timestamp and reports the time passed
//! since then. It holds no reference to a clock; every call that needs
//! "now" takes the [`TimeSource`] explicitly.

use crate::traits::{Millis, TimeSource};

/// Passive stopwatch measuring milliseconds since its last restart.
///
/// The epoch is only ever set from the clock's current time (or copied from
/// another timer), so it never lies in the future.
///
/// # Example
///
/// ```
/// use iobutton_core::timing::ElapsedTimer;
/// use iobutton_core::traits::MockTime;
///
/// let time = MockTime::with_initial(1_000);
/// let timer = ElapsedTimer::new(&time);
///
/// time.advance(40);
/// assert_eq!(timer.elapsed(&time), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTimer {
    epoch_ms: Millis,
}

impl ElapsedTimer {
    /// Create a timer whose epoch is the current time.
    pub fn new<T: TimeSource>(time: &T) -> Self {
        Self {
            epoch_ms: time.now_ms(),
        }
    }

    /// Move the epoch to the current time.
    pub fn restart<T: TimeSource>(&mut self, time: &T) {
        self.epoch_ms = time.now_ms();
    }

    /// Milliseconds since the epoch.
    ///
    /// Correct across clock rollover as long as less than half the counter
    /// range has passed since the last restart.
    pub fn elapsed<T: TimeSource>(&self, time: &T) -> Millis {
        time.elapsed_since(self.epoch_ms)
    }

    /// Take over the epoch of `other` (value copy).
    pub fn copy_from(&mut self, other: &ElapsedTimer) {
        self.epoch_ms = other.epoch_ms;
    }

    /// Raw epoch timestamp.
    pub fn epoch(&self) -> Millis {
        self.epoch_ms
    }
}
