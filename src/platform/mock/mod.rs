//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "mock")] {
//! use iobutton::platform::mock::MockAdc;
//! use iobutton::platform::traits::AdcInterface;
//!
//! let mut adc = MockAdc::new(1023);
//! assert_eq!(adc.read_counts().unwrap(), 1023);
//! # }
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod eeprom;
mod gpio;

pub use adc::MockAdc;
pub use eeprom::MockEeprom;
pub use gpio::MockGpio;
