//! Debounced digital input pin
//!
//! A plain input with the internal pull-up enabled. The raw logic level is
//! debounced as-is: an idle pulled-up line reads `true`.

use crate::platform::{GpioInterface, GpioMode, Result};
use iobutton_core::debounce::Debouncer;
use iobutton_core::traits::{Millis, TimeSource};

/// Digital input with debouncing
#[derive(Debug)]
pub struct InPin<G> {
    gpio: G,
    debouncer: Debouncer,
}

impl<G: GpioInterface> InPin<G> {
    /// Configure the pin as pulled-up input
    pub fn new<T: TimeSource>(mut gpio: G, debounce_ms: Millis, time: &T) -> Result<Self> {
        gpio.set_mode(GpioMode::InputPullUp)?;
        Ok(Self {
            gpio,
            debouncer: Debouncer::new(debounce_ms, time),
        })
    }

    /// Read the pin level and update the debouncer
    pub fn update_debouncer<T: TimeSource>(&mut self, time: &T) {
        self.debouncer.update(self.gpio.read(), time);
    }

    /// Whether a debounced level is available
    pub fn has_stable_value(&self) -> bool {
        self.debouncer.has_stable_value()
    }

    /// Debounced level
    pub fn stable_value(&self) -> bool {
        self.debouncer.stable_value()
    }

    /// Time since the onset of the debounced level
    pub fn millis_in_stable_value<T: TimeSource>(&self, time: &T) -> Millis {
        self.debouncer.millis_in_stable_value(time)
    }

    /// Debounced level, `None` while unstable
    pub fn stable(&self) -> Option<bool> {
        self.debouncer.stable()
    }

    /// Underlying pin
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockGpio;
    use iobutton_core::traits::MockTime;

    #[test]
    fn test_new_enables_pull_up() {
        let time = MockTime::new();
        let mut pin = InPin::new(MockGpio::new_output(), 20, &time).unwrap();
        assert_eq!(pin.gpio_mut().mode(), GpioMode::InputPullUp);
        assert!(!pin.has_stable_value());
    }

    #[test]
    fn test_idle_high_then_pulled_low() {
        let time = MockTime::new();
        let mut pin = InPin::new(MockGpio::new_input(), 20, &time).unwrap();
        pin.gpio_mut().set_input_state(true);

        for _ in 0..5 {
            time.advance(10);
            pin.update_debouncer(&time);
        }
        assert_eq!(pin.stable(), Some(true));

        // Pulled low at t = 60
        pin.gpio_mut().set_input_state(false);
        for _ in 0..2 {
            time.advance(10);
            pin.update_debouncer(&time);
        }
        assert!(pin.stable_value());

        for _ in 0..2 {
            time.advance(10);
            pin.update_debouncer(&time);
        }
        assert_eq!(pin.stable(), Some(false));
        assert_eq!(pin.millis_in_stable_value(&time), 30);
    }
}
