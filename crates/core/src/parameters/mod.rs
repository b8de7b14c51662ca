//! Persistent parameter encodings
//!
//! Byte-level formats only. Reading and writing the backing EEPROM is done
//! by free functions in the root crate.

pub mod flag;

pub use flag::{decode_flag, encode_flag, FLAG_ADDRESS, FLAG_FALSE, FLAG_TRUE};
