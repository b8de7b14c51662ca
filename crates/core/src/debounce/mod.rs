//! Binary input debouncing
//!
//! Converts a noisy raw boolean stream, sampled by a polling loop, into a
//! stable value plus the time that value has been held.
//!
//! # State Machine
//!
//! ```text
//!            update(raw) held > threshold
//! Unstable ────────────────────────────────▶ Stable(value)
//!    ▲                                          │   ▲
//!    │ restart()                                │   │ update(raw) held > threshold
//!    └──────────────────────────────────────────┘───┘ (value may change)
//! ```
//!
//! A changed raw reading only restarts the onset timer. It never clears
//! an already confirmed stable value; that value is kept until a new run
//! of identical readings qualifies or [`Debouncer::restart`] is called.

use crate::timing::ElapsedTimer;
use crate::traits::{Millis, TimeSource};

/// Default debounce threshold in milliseconds
pub const DEFAULT_DEBOUNCE_MS: Millis = 100;

/// Debouncer for one binary input.
///
/// # Example
///
/// ```
/// use iobutton_core::debounce::Debouncer;
/// use iobutton_core::traits::MockTime;
///
/// let time = MockTime::new();
/// let mut debouncer = Debouncer::new(100, &time);
///
/// debouncer.update(true, &time);
/// time.set(50);
/// debouncer.update(true, &time);
/// assert!(!debouncer.has_stable_value());
///
/// time.set(110);
/// debouncer.update(true, &time);
/// assert_eq!(debouncer.stable(), Some(true));
/// // Measured from the first `true` reading, not from detection
/// assert_eq!(debouncer.millis_in_stable_value(&time), 110);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    threshold_ms: Millis,

    // Most recent raw reading and when it started
    latest_value: bool,
    latest_epoch: ElapsedTimer,

    // Last confirmed value, valid only while has_stable is set
    has_stable: bool,
    stable_value: bool,
    stable_epoch: ElapsedTimer,
}

impl Debouncer {
    /// Create a debouncer in the unstable state.
    pub fn new<T: TimeSource>(threshold_ms: Millis, time: &T) -> Self {
        Self {
            threshold_ms,
            latest_value: false,
            latest_epoch: ElapsedTimer::new(time),
            has_stable: false,
            stable_value: false,
            stable_epoch: ElapsedTimer::new(time),
        }
    }

    /// Forget all history: no stable value, latest reading `false`, both
    /// timers restarted at the current time.
    pub fn restart<T: TimeSource>(&mut self, time: &T) {
        self.latest_value = false;
        self.latest_epoch.restart(time);
        self.has_stable = false;
        self.stable_value = false;
        self.stable_epoch.restart(time);
    }

    /// Same as [`restart`](Self::restart), also replacing the threshold.
    pub fn restart_with_threshold<T: TimeSource>(&mut self, threshold_ms: Millis, time: &T) {
        self.threshold_ms = threshold_ms;
        self.restart(time);
    }

    /// Feed one raw sample.
    pub fn update<T: TimeSource>(&mut self, raw: bool, time: &T) {
        if raw != self.latest_value {
            self.latest_value = raw;
            self.latest_epoch.restart(time);
            return;
        }

        // Strictly greater: a run of exactly `threshold_ms` does not qualify
        if self.latest_epoch.elapsed(time) > self.threshold_ms {
            self.has_stable = true;
            self.stable_value = self.latest_value;
            // Onset of the run, not the time of detection
            self.stable_epoch.copy_from(&self.latest_epoch);
        }
    }

    /// Whether a stable value has been confirmed since the last restart.
    pub fn has_stable_value(&self) -> bool {
        self.has_stable
    }

    /// The confirmed value. Meaningful only if [`has_stable_value`](Self::has_stable_value).
    pub fn stable_value(&self) -> bool {
        self.stable_value
    }

    /// Time since the onset of the confirmed value. Meaningful only if
    /// [`has_stable_value`](Self::has_stable_value).
    pub fn millis_in_stable_value<T: TimeSource>(&self, time: &T) -> Millis {
        self.stable_epoch.elapsed(time)
    }

    /// The confirmed value, or `None` while still unstable.
    pub fn stable(&self) -> Option<bool> {
        self.has_stable.then_some(self.stable_value)
    }

    /// Most recent raw reading.
    pub fn latest_value(&self) -> bool {
        self.latest_value
    }

    /// Debounce threshold in milliseconds.
    pub fn threshold_ms(&self) -> Millis {
        self.threshold_ms
    }
}
