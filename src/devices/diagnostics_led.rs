//! Diagnostics LED
//!
//! Active-high indicator on a push-pull output. Besides plain on/off it
//! can render a 32-bit status pattern, see [`iobutton_core::pattern`].

use crate::platform::{GpioInterface, GpioMode, Result};
use iobutton_core::pattern::pulse_at;
use iobutton_core::traits::Millis;

/// Indicator LED on an output pin
#[derive(Debug)]
pub struct DiagnosticsLed<G> {
    gpio: G,
    is_on: bool,
}

impl<G: GpioInterface> DiagnosticsLed<G> {
    /// Configure the pin as output, LED off
    pub fn new(mut gpio: G) -> Result<Self> {
        gpio.set_mode(GpioMode::OutputPushPull)?;
        gpio.set_low()?;
        Ok(Self { gpio, is_on: false })
    }

    /// Turn the LED on or off
    pub fn set(&mut self, is_on: bool) -> Result<()> {
        if is_on {
            self.gpio.set_high()?;
        } else {
            self.gpio.set_low()?;
        }
        self.is_on = is_on;
        Ok(())
    }

    /// Drive the LED for `pattern` at time `t`, returning the level set
    pub fn set_for_pattern(&mut self, t: Millis, pattern: u32) -> Result<bool> {
        let is_on = pulse_at(t, pattern);
        self.set(is_on)?;
        Ok(is_on)
    }

    /// Last level driven
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Underlying pin
    pub fn gpio(&self) -> &G {
        &self.gpio
    }
}
