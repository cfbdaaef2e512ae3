//! Input device configuration records

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resistive touch panel configuration
///
/// Raw ADC readings span `min..max` per axis; drivers map them onto the
/// panel resolution. The mapping itself lives with the driver, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResistiveTouchConfig {
    /// Panel width in pixels
    pub hor_res: u16,
    /// Panel height in pixels
    pub ver_res: u16,
    /// Smallest raw reading on the X axis
    pub x_min: u16,
    /// Smallest raw reading on the Y axis
    pub y_min: u16,
    /// Largest raw reading on the X axis
    pub x_max: u16,
    /// Largest raw reading on the Y axis
    pub y_max: u16,
    /// Samples averaged per reported point
    pub samples: u8,
    /// Swap the reported axis direction
    pub invert: bool,
}

impl ResistiveTouchConfig {
    pub const fn is_consistent(&self) -> bool {
        self.x_min < self.x_max && self.y_min < self.y_max && self.samples > 0
    }
}

/// Capacitive touch controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapacitiveTouchConfig {
    /// 7-bit I2C slave address
    pub i2c_address: u8,
}

impl CapacitiveTouchConfig {
    pub const fn is_consistent(&self) -> bool {
        self.i2c_address <= 0x7F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_range_must_be_ordered() {
        let mut cfg = ResistiveTouchConfig {
            hor_res: 480,
            ver_res: 320,
            x_min: 200,
            y_min: 200,
            x_max: 3800,
            y_max: 3800,
            samples: 4,
            invert: false,
        };
        assert!(cfg.is_consistent());

        cfg.x_max = 100;
        assert!(!cfg.is_consistent());
    }

    #[test]
    fn test_address_must_be_seven_bits() {
        assert!(CapacitiveTouchConfig { i2c_address: 0x38 }.is_consistent());
        assert!(!CapacitiveTouchConfig { i2c_address: 0x80 }.is_consistent());
    }
}
