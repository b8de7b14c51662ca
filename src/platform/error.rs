//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// ADC operation failed
    Adc(AdcError),
    /// EEPROM operation failed
    Eeprom(EepromError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Invalid analog channel
    InvalidChannel,
    /// Conversion did not complete
    ConversionFailed,
}

/// EEPROM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError {
    /// Address out of range
    InvalidAddress,
    /// Write operation failed
    WriteFailed,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Eeprom(e) => write!(f, "EEPROM error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<AdcError> for PlatformError {
    fn from(e: AdcError) -> Self {
        PlatformError::Adc(e)
    }
}

impl From<EepromError> for PlatformError {
    fn from(e: EepromError) -> Self {
        PlatformError::Eeprom(e)
    }
}
