//! Accumulating delay mock

use pictor_hal::delay::Delay;

/// Delay mock that records requested wait time instead of blocking
#[derive(Debug, Default)]
pub struct MockDelay {
    total_us: u64,
    calls: u32,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total microseconds requested so far
    pub fn total_us(&self) -> u64 {
        self.total_us
    }

    /// Number of `delay_us` calls observed
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl Delay for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.total_us += us as u64;
        self.calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_microseconds() {
        let mut delay = MockDelay::new();
        delay.delay_us(150);
        delay.delay_us(50);
        assert_eq!(delay.total_us(), 200);
        assert_eq!(delay.calls(), 2);
    }

    #[test]
    fn test_default_ms_expands_to_us() {
        // The trait's default delay_ms must request at least ms * 1000 us
        let mut delay = MockDelay::new();
        delay.delay_ms(3);
        assert_eq!(delay.total_us(), 3000);
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let mut delay = MockDelay::new();
        delay.delay_ms(0);
        delay.delay_us(0);
        assert_eq!(delay.total_us(), 0);
    }
}
