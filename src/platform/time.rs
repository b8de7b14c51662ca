//! Embassy-based time source implementation.
//!
//! This module provides the `EmbassyTime` implementation of the
//! `TimeSource` trait using Embassy's time driver.

use iobutton_core::traits::{Millis, TimeSource};

/// Embassy-based time source using the Embassy time driver.
///
/// The 64-bit Embassy tick count is truncated to the wrapping 32-bit
/// millisecond counter the core logic works with.
///
/// # Example
///
/// ```ignore
/// use iobutton::platform::EmbassyTime;
/// use iobutton_core::traits::TimeSource;
///
/// let time = EmbassyTime;
/// let now = time.now_ms();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> Millis {
        embassy_time::Instant::now().as_millis() as Millis
    }
}
