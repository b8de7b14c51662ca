//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode for test verification.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    mode_changes: u32,
    fail_mode_changes: bool,
    fail_mode_change_to: Option<GpioMode>,
    fail_writes: bool,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            mode_changes: 0,
            fail_mode_changes: false,
            fail_mode_change_to: None,
            fail_writes: false,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            mode_changes: 0,
            fail_mode_changes: false,
            fail_mode_change_to: None,
            fail_writes: false,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Number of successful `set_mode` calls
    pub fn mode_changes(&self) -> u32 {
        self.mode_changes
    }

    /// Make subsequent `set_mode` calls fail with `GpioError::InvalidPin`
    pub fn set_fail_mode_changes(&mut self, fail: bool) {
        self.fail_mode_changes = fail;
    }

    /// Make `set_mode` fail only when switching to `mode`
    pub fn set_fail_mode_change_to(&mut self, mode: Option<GpioMode>) {
        self.fail_mode_change_to = mode;
    }

    /// Make subsequent `set_high`/`set_low` calls fail with `GpioError::InvalidPin`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.fail_writes {
            return Err(GpioError::InvalidPin.into());
        }
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.fail_writes {
            return Err(GpioError::InvalidPin.into());
        }
        self.state = false;
        Ok(())
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if self.fail_mode_changes || self.fail_mode_change_to == Some(mode) {
            return Err(GpioError::InvalidPin.into());
        }
        self.mode = mode;
        self.mode_changes += 1;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input() {
        let mut gpio = MockGpio::new_input();
        assert!(!gpio.read());

        // Simulate external signal
        gpio.set_input_state(true);
        assert!(gpio.read());

        // Input mode should not allow set_high/set_low
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());
    }

    #[test]
    fn test_mock_gpio_mode() {
        let mut gpio = MockGpio::new_output();
        assert_eq!(gpio.mode(), GpioMode::OutputPushPull);

        gpio.set_mode(GpioMode::Input).unwrap();
        assert_eq!(gpio.mode(), GpioMode::Input);
        assert_eq!(gpio.mode_changes(), 1);
    }

    #[test]
    fn test_mock_gpio_open_drain_drives_low() {
        let mut gpio = MockGpio::new_input();
        gpio.set_mode(GpioMode::OutputOpenDrain).unwrap();
        gpio.set_input_state(true);
        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_mode_failure() {
        let mut gpio = MockGpio::new_input();
        gpio.set_fail_mode_changes(true);
        assert_eq!(
            gpio.set_mode(GpioMode::OutputOpenDrain),
            Err(PlatformError::Gpio(GpioError::InvalidPin))
        );
        assert_eq!(gpio.mode(), GpioMode::Input);
        assert_eq!(gpio.mode_changes(), 0);
    }

    #[test]
    fn test_mock_gpio_mode_failure_for_one_mode() {
        let mut gpio = MockGpio::new_input();
        gpio.set_fail_mode_change_to(Some(GpioMode::Input));
        gpio.set_mode(GpioMode::OutputOpenDrain).unwrap();
        assert!(gpio.set_mode(GpioMode::Input).is_err());
        assert_eq!(gpio.mode(), GpioMode::OutputOpenDrain);
        assert_eq!(gpio.mode_changes(), 1);
    }

    #[test]
    fn test_mock_gpio_write_failure() {
        let mut gpio = MockGpio::new_output();
        gpio.set_high().unwrap();
        gpio.set_fail_writes(true);
        assert_eq!(
            gpio.set_low(),
            Err(PlatformError::Gpio(GpioError::InvalidPin))
        );
        assert!(gpio.read());
        assert!(gpio.set_high().is_err());
    }
}
