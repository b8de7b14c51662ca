//! EEPROM-backed boolean flag
//!
//! The byte format is defined in `iobutton_core::parameters::flag`.
//!
//! # EEPROM Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Flag: u8 = 0x7B (true) / 0xF3 (false)         │  Address: 0x0000
//! ├───────────────────────────────────────────────┤
//! │ Unused                                        │
//! └───────────────────────────────────────────────┘
//! ```

use crate::platform::error::EepromError;
use crate::platform::traits::EepromInterface;
use crate::platform::Result;
use crate::{log_debug, log_error, log_info, log_warn};
pub use iobutton_core::parameters::flag::{decode_flag, encode_flag, FLAG_ADDRESS, FLAG_FALSE, FLAG_TRUE};

/// Fail early when the device is too small to hold the flag
fn check_capacity<E: EepromInterface>(eeprom: &E) -> Result<()> {
    if FLAG_ADDRESS >= eeprom.capacity() {
        log_error!(
            "Settings: flag address {} outside EEPROM ({} bytes)",
            FLAG_ADDRESS,
            eeprom.capacity()
        );
        return Err(EepromError::InvalidAddress.into());
    }
    Ok(())
}

/// Read the stored flag without collapsing the uninitialized case
///
/// Returns `Ok(None)` when the byte is not one of the two sentinels
/// (never written, erased or corrupt).
pub fn load_flag<E: EepromInterface>(eeprom: &mut E) -> Result<Option<bool>> {
    check_capacity(eeprom)?;
    let byte = eeprom.read_byte(FLAG_ADDRESS)?;
    let value = decode_flag(byte);
    if value.is_none() {
        log_warn!("Settings: unrecognized flag byte {:#x}", byte);
    }
    Ok(value)
}

/// Read the stored flag
///
/// Only an explicitly written `true` reads as `true`; anything else,
/// including uninitialized memory, reads as `false`.
pub fn read_flag<E: EepromInterface>(eeprom: &mut E) -> Result<bool> {
    Ok(load_flag(eeprom)? == Some(true))
}

/// Store the flag
///
/// Skips the write when the stored byte already holds `value`.
pub fn write_flag<E: EepromInterface>(eeprom: &mut E, value: bool) -> Result<()> {
    check_capacity(eeprom)?;
    let encoded = encode_flag(value);
    if eeprom.read_byte(FLAG_ADDRESS)? == encoded {
        log_debug!("Settings: flag already {}, write skipped", value);
        return Ok(());
    }
    eeprom.write_byte(FLAG_ADDRESS, encoded)?;
    log_info!("Settings: flag set to {}", value);
    Ok(())
}
