//! EEPROM interface trait
//!
//! Byte-addressable non-volatile storage used for persistent settings.
//!
//! # Characteristics
//!
//! - Erased cells read as `0xFF`
//! - Each byte can be written individually (no block erase)
//! - Cells have limited write endurance (typically 100k cycles)

use crate::platform::Result;

/// EEPROM interface trait
pub trait EepromInterface {
    /// Read one byte
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if `address`
    /// is not below [`capacity`](Self::capacity).
    fn read_byte(&mut self, address: u16) -> Result<u8>;

    /// Write one byte
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if `address`
    /// is out of range, `EepromError::WriteFailed` if the cell was not written.
    fn write_byte(&mut self, address: u16, value: u8) -> Result<()>;

    /// Total capacity in bytes
    fn capacity(&self) -> u16;
}
