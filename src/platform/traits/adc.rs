//! ADC interface trait
//!
//! One instance owns one analog channel. On many parts the same physical
//! pin is addressed by a different index as an analog channel than as a
//! digital pin, so devices hold the two capabilities separately.

use crate::platform::Result;

/// Analog input channel
pub trait AdcInterface {
    /// Take one blocking conversion and return the raw counts
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc` if the conversion fails.
    fn read_counts(&mut self) -> Result<u16>;
}
