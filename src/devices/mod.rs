//! Device drivers
//!
//! Drivers built on the platform abstraction traits, so they run unchanged
//! on hardware and against the mock platform.
//!
//! ## Modules
//!
//! - `io_button`: Dual-mode button pin (ADC sensing / open-drain drive)
//! - `in_pin`: Debounced digital input
//! - `diagnostics_led`: Indicator LED with status pattern rendering

pub mod diagnostics_led;
pub mod in_pin;
pub mod io_button;

pub use diagnostics_led::DiagnosticsLed;
pub use in_pin::InPin;
pub use io_button::{IoButton, IoButtonConfig, PinMode};
