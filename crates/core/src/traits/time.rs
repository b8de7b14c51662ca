//! Time abstraction traits for platform-agnostic timing operations.
//!
//! This module provides the `TimeSource` trait that abstracts over different
//! millisecond clocks (Embassy, mock, etc.) to enable host testing without
//! embedded dependencies.

use core::cell::Cell;

/// Millisecond timestamp or duration.
///
/// The counter wraps at `u32::MAX` (about 49.7 days). Differences must be
/// taken with [`u32::wrapping_sub`], which stays correct as long as the
/// measured interval is shorter than half the counter range.
pub type Millis = u32;

/// Platform-agnostic monotonic millisecond clock.
///
/// This trait abstracts over different time providers:
/// - `EmbassyTime` (in the root crate) for embedded targets using Embassy
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use iobutton_core::traits::{MockTime, TimeSource};
///
/// fn poll_due<T: TimeSource>(time: &T, last_poll: &mut u32) -> bool {
///     if time.elapsed_since(*last_poll) >= 5 {
///         *last_poll = time.now_ms();
///         return true;
///     }
///     false
/// }
///
/// let time = MockTime::new();
/// let mut last = 0;
/// assert!(!poll_due(&time, &mut last));
/// time.advance(5);
/// assert!(poll_due(&time, &mut last));
/// ```
pub trait TimeSource {
    /// Returns current time in milliseconds since system start, wrapping.
    fn now_ms(&self) -> Millis;

    /// Returns elapsed milliseconds since a reference timestamp.
    ///
    /// Uses wrapping subtraction so counter rollover between `reference_ms`
    /// and now still yields the true (small) interval.
    fn elapsed_since(&self, reference_ms: Millis) -> Millis {
        self.now_ms().wrapping_sub(reference_ms)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source for testing with controllable time advancement.
///
/// # Example
///
/// ```
/// use iobutton_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// assert_eq!(time.now_ms(), 0);
///
/// time.advance(250);
/// assert_eq!(time.now_ms(), 250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_ms: Cell<Millis>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(ms: Millis) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, ms: Millis) {
        self.current_ms.set(ms);
    }

    /// Advances the current time, wrapping like the hardware counter.
    pub fn advance(&self, ms: Millis) {
        self.current_ms.set(self.current_ms.get().wrapping_add(ms));
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> Millis {
        self.current_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial(5_000);
        assert_eq!(time.now_ms(), 5_000);
    }

    #[test]
    fn mock_time_set_and_advance() {
        let time = MockTime::new();
        time.set(1_000);
        time.advance(500);
        assert_eq!(time.now_ms(), 1_500);
    }

    #[test]
    fn mock_time_advance_wraps() {
        let time = MockTime::with_initial(u32::MAX - 9);
        time.advance(20);
        assert_eq!(time.now_ms(), 10);
    }

    #[test]
    fn elapsed_since_across_rollover() {
        let time = MockTime::with_initial(u32::MAX - 99);
        let reference = time.now_ms();
        time.advance(300);
        assert_eq!(time.elapsed_since(reference), 300);
    }

    #[test]
    fn reference_impl_forwards() {
        let time = MockTime::with_initial(42);
        let by_ref = &time;
        assert_eq!(TimeSource::now_ms(&by_ref), 42);
        time.advance(1);
        assert_eq!(by_ref.now_ms(), 43);
    }
}
