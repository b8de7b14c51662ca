//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the pins, analog channels
//! and non-volatile storage the devices are built on. All platform-specific
//! code is isolated to this module.

pub mod error;
pub mod traits;

#[cfg(all(feature = "embassy", target_os = "none"))]
pub mod time;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcInterface, EepromInterface, GpioInterface, GpioMode};

#[cfg(all(feature = "embassy", target_os = "none"))]
pub use time::EmbassyTime;
