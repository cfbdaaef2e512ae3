//! Blocking delay abstraction
//!
//! Display controllers need bounded pauses between reset, command and
//! data phases. Backends provide them here.

/// Blocking delay source
///
/// Implementations block the calling execution context for at least the
/// requested duration and never return early. There is no error channel:
/// a backend that cannot guarantee the minimum wait cannot signal that
/// here, it can only document the limitation.
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}
