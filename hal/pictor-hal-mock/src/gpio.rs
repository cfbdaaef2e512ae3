//! Loopback GPIO pin mock

use pictor_hal::gpio::{InputPin, Level, OutputPin};

/// Pin whose input level reflects the last written output level
///
/// Validates handle/state consistency for driver code that writes a
/// control line and reads it back; it models no electrical behavior.
#[derive(Debug)]
pub struct LoopbackPin {
    level: Level,
}

impl LoopbackPin {
    /// Create a pin at the given initial level
    pub fn new(initial: Level) -> Self {
        Self { level: initial }
    }

    /// Create a pin idling low
    pub fn low() -> Self {
        Self::new(Level::Low)
    }
}

impl OutputPin for LoopbackPin {
    fn write(&mut self, level: Level) {
        self.level = level;
    }
}

impl InputPin for LoopbackPin {
    fn read(&self) -> Level {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_reflects_last_write() {
        let mut pin = LoopbackPin::low();
        assert!(pin.is_low());

        pin.write(Level::High);
        assert_eq!(pin.read(), Level::High);

        pin.write(Level::Low);
        assert_eq!(pin.read(), Level::Low);
    }

    #[test]
    fn test_convenience_setters() {
        let mut pin = LoopbackPin::low();
        pin.set_high();
        assert!(pin.is_high());
        pin.set_low();
        assert!(pin.is_low());
    }
}
