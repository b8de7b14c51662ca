//! Mock ADC implementation for testing

use crate::platform::{error::AdcError, traits::AdcInterface, Result};

/// Mock ADC channel returning a programmable reading
#[derive(Debug)]
pub struct MockAdc {
    counts: u16,
    conversions: u32,
    fail: bool,
}

impl MockAdc {
    /// Create a mock channel that reads `counts`
    pub fn new(counts: u16) -> Self {
        Self {
            counts,
            conversions: 0,
            fail: false,
        }
    }

    /// Change the simulated reading
    pub fn set_counts(&mut self, counts: u16) {
        self.counts = counts;
    }

    /// Make conversions fail with `AdcError::ConversionFailed`
    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Number of successful conversions
    pub fn conversions(&self) -> u32 {
        self.conversions
    }
}

impl AdcInterface for MockAdc {
    fn read_counts(&mut self) -> Result<u16> {
        if self.fail {
            return Err(AdcError::ConversionFailed.into());
        }
        self.conversions += 1;
        Ok(self.counts)
    }
}
