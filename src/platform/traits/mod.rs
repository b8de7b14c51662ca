//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod eeprom;
pub mod gpio;

// Re-export trait interfaces
pub use adc::AdcInterface;
pub use eeprom::EepromInterface;
pub use gpio::{GpioInterface, GpioMode};
