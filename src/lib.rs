#![cfg_attr(not(test), no_std)]

//! iobutton - Debounced dual-mode button pin for small microcontrollers
//!
//! Senses an external push button through the ADC, can pull the same line
//! low to simulate a press, renders a status word on a diagnostics LED and
//! keeps one boolean setting in EEPROM.
//!
//! The pure state machines live in `iobutton_core`; this crate binds them
//! to injected platform capabilities.

// Platform abstraction layer (GPIO, ADC, EEPROM)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros
pub mod core;

// Persistent settings
pub mod parameters;

pub use iobutton_core::traits::{Millis, TimeSource};
