//! Boolean flag sentinel codec
//!
//! A single boolean setting is stored as one byte. Instead of `0x00`/`0x01`
//! two arbitrary, non-complementary byte values are used, so erased
//! (`0xFF`), zeroed or otherwise uninitialized memory is never mistaken
//! for a written value.

/// EEPROM address of the flag byte
pub const FLAG_ADDRESS: u16 = 0x0000;

/// Stored byte for `true`
pub const FLAG_TRUE: u8 = 0x7B;

/// Stored byte for `false`
pub const FLAG_FALSE: u8 = 0xF3;

/// Byte to store for `value`.
pub fn encode_flag(value: bool) -> u8 {
    if value {
        FLAG_TRUE
    } else {
        FLAG_FALSE
    }
}

/// Decode a stored byte.
///
/// Returns `None` for anything other than the two sentinels.
pub fn decode_flag(byte: u8) -> Option<bool> {
    match byte {
        FLAG_TRUE => Some(true),
        FLAG_FALSE => Some(false),
        _ => None,
    }
}
