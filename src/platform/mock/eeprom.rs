//! Mock EEPROM implementation for testing
//!
//! Provides in-memory EEPROM simulation for unit tests.

use crate::platform::{error::EepromError, traits::EepromInterface, Result};

/// Largest simulated EEPROM (512 bytes, same as ATtiny85)
const EEPROM_CAPACITY: u16 = 512;

/// Erased cell value
const ERASED: u8 = 0xFF;

/// Mock EEPROM implementation
///
/// Starts fully erased. Supports:
/// - Preloading bytes to simulate previously written or corrupt contents
/// - Write counting for endurance checks
/// - Write failure injection
///
/// # Example
///
/// ```
/// # #[cfg(feature = "mock")] {
/// use iobutton::platform::mock::MockEeprom;
/// use iobutton::platform::traits::EepromInterface;
///
/// let mut eeprom = MockEeprom::new();
/// assert_eq!(eeprom.read_byte(0).unwrap(), 0xFF);
///
/// eeprom.write_byte(0, 0x7B).unwrap();
/// assert_eq!(eeprom.read_byte(0).unwrap(), 0x7B);
/// assert_eq!(eeprom.write_count(), 1);
/// # }
/// ```
#[derive(Debug)]
pub struct MockEeprom {
    storage: [u8; EEPROM_CAPACITY as usize],
    capacity: u16,
    write_count: u32,
    fail_writes: bool,
}

impl MockEeprom {
    /// Create a new erased mock EEPROM
    pub fn new() -> Self {
        Self::with_capacity(EEPROM_CAPACITY)
    }

    /// Create a smaller erased mock EEPROM (clamped to 512 bytes)
    pub fn with_capacity(capacity: u16) -> Self {
        Self {
            storage: [ERASED; EEPROM_CAPACITY as usize],
            capacity: capacity.min(EEPROM_CAPACITY),
            write_count: 0,
            fail_writes: false,
        }
    }

    /// Set a byte directly, bypassing write counting
    pub fn preload(&mut self, address: u16, value: u8) {
        self.storage[address as usize] = value;
    }

    /// Read a byte directly (for test verification)
    pub fn get(&self, address: u16) -> u8 {
        self.storage[address as usize]
    }

    /// Number of successful writes
    pub fn write_count(&self) -> u32 {
        self.write_count
    }

    /// Make subsequent writes fail with `EepromError::WriteFailed`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl Default for MockEeprom {
    fn default() -> Self {
        Self::new()
    }
}

impl EepromInterface for MockEeprom {
    fn read_byte(&mut self, address: u16) -> Result<u8> {
        if address >= self.capacity {
            return Err(EepromError::InvalidAddress.into());
        }
        Ok(self.storage[address as usize])
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<()> {
        if address >= self.capacity {
            return Err(EepromError::InvalidAddress.into());
        }
        if self.fail_writes {
            return Err(EepromError::WriteFailed.into());
        }
        self.storage[address as usize] = value;
        self.write_count += 1;
        Ok(())
    }

    fn capacity(&self) -> u16 {
        self.capacity
    }
}
