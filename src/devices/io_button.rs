//! Dual-mode button pin
//!
//! One physical pin wired to an external push button with a pull-up. The
//! pin alternates between two modes:
//!
//! - **Sensing**: high-impedance input. The pull-up pole voltage is sampled
//!   through the ADC and the button counts as pressed while it is below a
//!   millivolt threshold. Readings are debounced.
//! - **Driving**: open-drain output held low, simulating a button press on
//!   the shared line.
//!
//! Debouncer state is kept while driving but reported as unavailable.
//! Re-entering sensing restarts the debouncer, so stability has to be
//! accumulated again from zero.

use crate::platform::{AdcInterface, GpioInterface, GpioMode, PlatformError, Result};
use crate::{log_debug, log_error, log_info, log_warn};
use iobutton_core::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
use iobutton_core::traits::{Millis, TimeSource};

/// Default press detection threshold (pull-up pole voltage)
pub const DEFAULT_THRESHOLD_MV: u32 = 1000;

/// Default ADC reference voltage
pub const DEFAULT_REFERENCE_MV: u32 = 5000;

/// Default ADC full-scale reading (10-bit converter)
pub const DEFAULT_FULL_SCALE_COUNTS: u16 = 1023;

/// Current role of the pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Input, sensing the button
    Sensing,
    /// Open-drain output held low
    Driving,
}

/// Button pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoButtonConfig {
    /// Debounce threshold in milliseconds
    pub debounce_ms: Millis,
    /// Pressed while the pin voltage is below this
    pub threshold_millivolts: u32,
    /// Voltage corresponding to a full-scale ADC reading
    pub reference_millivolts: u32,
    /// Full-scale ADC reading
    pub full_scale_counts: u16,
}

impl Default for IoButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            threshold_millivolts: DEFAULT_THRESHOLD_MV,
            reference_millivolts: DEFAULT_REFERENCE_MV,
            full_scale_counts: DEFAULT_FULL_SCALE_COUNTS,
        }
    }
}

impl IoButtonConfig {
    /// Configuration from the build-time environment
    ///
    /// Reads `IOBUTTON_DEBOUNCE_MS` and `IOBUTTON_THRESHOLD_MV` as captured
    /// by the build script. Values that do not parse fall back to the
    /// defaults.
    pub fn from_build_env() -> Self {
        Self::from_strings(env!("IOBUTTON_DEBOUNCE_MS"), env!("IOBUTTON_THRESHOLD_MV"))
    }

    fn from_strings(debounce_ms: &str, threshold_millivolts: &str) -> Self {
        let defaults = Self::default();

        let debounce_ms = debounce_ms.trim().parse().unwrap_or_else(|_| {
            log_warn!("IOBUTTON_DEBOUNCE_MS is not a number, using {}", defaults.debounce_ms);
            defaults.debounce_ms
        });
        let threshold_millivolts = threshold_millivolts.trim().parse().unwrap_or_else(|_| {
            log_warn!(
                "IOBUTTON_THRESHOLD_MV is not a number, using {}",
                defaults.threshold_millivolts
            );
            defaults.threshold_millivolts
        });

        Self {
            debounce_ms,
            threshold_millivolts,
            ..defaults
        }
    }
}

/// ADC counts corresponding to `threshold_millivolts`
///
/// `floor(full_scale_counts * threshold_millivolts / reference_millivolts)`,
/// computed in 64 bits. Returns `None` for a zero reference or a result
/// that does not fit the count type.
///
/// # Example
///
/// ```
/// use iobutton::devices::io_button::threshold_counts;
///
/// assert_eq!(threshold_counts(1023, 1000, 5000), Some(204));
/// assert_eq!(threshold_counts(1023, 1000, 0), None);
/// ```
pub fn threshold_counts(
    full_scale_counts: u16,
    threshold_millivolts: u32,
    reference_millivolts: u32,
) -> Option<u16> {
    if reference_millivolts == 0 {
        return None;
    }
    let counts =
        u64::from(full_scale_counts) * u64::from(threshold_millivolts) / u64::from(reference_millivolts);
    u16::try_from(counts).ok()
}

/// Button pin that senses through the ADC or drives the line low
///
/// `G` is the digital side of the pin, `A` the analog channel of the same
/// pin.
#[derive(Debug)]
pub struct IoButton<G, A> {
    gpio: G,
    adc: A,
    mode: PinMode,
    threshold_counts: u16,
    debouncer: Debouncer,
}

impl<G: GpioInterface, A: AdcInterface> IoButton<G, A> {
    /// Configure the pin as input and start sensing
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the threshold cannot be
    /// converted to counts, or the GPIO error if the pin cannot be
    /// configured.
    pub fn new<T: TimeSource>(mut gpio: G, adc: A, config: IoButtonConfig, time: &T) -> Result<Self> {
        let threshold_counts = threshold_counts(
            config.full_scale_counts,
            config.threshold_millivolts,
            config.reference_millivolts,
        )
        .ok_or(PlatformError::InvalidConfig)?;

        gpio.set_mode(GpioMode::Input)?;

        log_info!(
            "IoButton: pressed below {} counts ({} mV), debounce {} ms",
            threshold_counts,
            config.threshold_millivolts,
            config.debounce_ms
        );

        Ok(Self {
            gpio,
            adc,
            mode: PinMode::Sensing,
            threshold_counts,
            debouncer: Debouncer::new(config.debounce_ms, time),
        })
    }

    // --- Sensing mode

    /// Switch to sensing. Does nothing if already sensing.
    ///
    /// Entering sensing restarts the debouncer.
    pub fn set_mode_input<T: TimeSource>(&mut self, time: &T) -> Result<()> {
        if self.mode == PinMode::Sensing {
            return Ok(());
        }
        self.gpio.set_mode(GpioMode::Input)?;
        self.debouncer.restart(time);
        self.mode = PinMode::Sensing;
        log_debug!("IoButton: sensing");
        Ok(())
    }

    /// Sample the pin and update the debouncer. Does nothing unless sensing.
    pub fn update_debouncer<T: TimeSource>(&mut self, time: &T) -> Result<()> {
        if self.mode != PinMode::Sensing {
            return Ok(());
        }
        let reading = self.adc.read_counts()?;
        let pressed = reading < self.threshold_counts;
        self.debouncer.update(pressed, time);
        Ok(())
    }

    /// Whether a debounced value is available. Always `false` while driving.
    pub fn has_stable_value(&self) -> bool {
        self.mode == PinMode::Sensing && self.debouncer.has_stable_value()
    }

    /// Debounced pressed state. `false` while driving.
    pub fn stable_value(&self) -> bool {
        self.mode == PinMode::Sensing && self.debouncer.stable_value()
    }

    /// Time in the debounced state. `0` while driving.
    pub fn millis_in_stable_value<T: TimeSource>(&self, time: &T) -> Millis {
        if self.mode == PinMode::Sensing {
            self.debouncer.millis_in_stable_value(time)
        } else {
            0
        }
    }

    /// Debounced pressed state, `None` while unavailable
    pub fn stable(&self) -> Option<bool> {
        if self.mode == PinMode::Sensing {
            self.debouncer.stable()
        } else {
            None
        }
    }

    // --- Driving mode

    /// Pull the line low as an open-drain output, simulating a press.
    /// Does nothing if already driving.
    pub fn set_mode_output_low(&mut self) -> Result<()> {
        if self.mode == PinMode::Driving {
            return Ok(());
        }
        self.gpio.set_mode(GpioMode::OutputOpenDrain)?;
        if let Err(e) = self.gpio.set_low() {
            log_error!("IoButton: drive low failed: {}", e);
            // Back to input so the pin matches the unchanged mode
            if let Err(restore) = self.gpio.set_mode(GpioMode::Input) {
                // Pin is stuck as output: keep sensing masked
                log_error!("IoButton: restoring input failed: {}", restore);
                self.mode = PinMode::Driving;
            }
            return Err(e);
        }
        self.mode = PinMode::Driving;
        log_debug!("IoButton: driving low");
        Ok(())
    }

    // --- Accessors

    /// Current mode
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// Press threshold in ADC counts
    pub fn threshold_counts(&self) -> u16 {
        self.threshold_counts
    }

    /// Underlying debouncer, unmasked
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Digital side of the pin
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Digital side of the pin, mutable
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Analog channel of the pin
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Give back the pin capabilities
    pub fn release(self) -> (G, A) {
        (self.gpio, self.adc)
    }
}
