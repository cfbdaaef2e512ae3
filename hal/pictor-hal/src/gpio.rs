//! GPIO pin abstractions
//!
//! Provides traits for the digital control and status lines display
//! drivers toggle directly (reset, data/command select, chip select,
//! touch interrupt).

/// Logical level of a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Digital output pin
///
/// Writing drives an observable electrical state change. There is no
/// return value; GPIO operations are infallible at this boundary.
pub trait OutputPin {
    /// Drive the pin to the given level
    fn write(&mut self, level: Level);

    /// Drive the pin high (logic 1)
    fn set_high(&mut self) {
        self.write(Level::High);
    }

    /// Drive the pin low (logic 0)
    fn set_low(&mut self) {
        self.write(Level::Low);
    }
}

/// Digital input pin
///
/// Reading is a pure observation of the instantaneous level; it never
/// changes system state.
pub trait InputPin {
    /// Read the current pin level
    fn read(&self) -> Level;

    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool {
        self.read() == Level::High
    }

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        self.read() == Level::Low
    }
}

/// Pin that can be used for both input and output
///
/// Some panels share a bidirectional line (e.g. a read-back capable
/// data/command pin).
pub trait IoPin: OutputPin + InputPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + InputPin> IoPin for T {}
