//! Recording mock backend for the Pictor HAL contract
//!
//! Every mock journals the bus activity a real backend would produce, so
//! driver code (and the contract itself) can be tested byte-exactly on a
//! host machine. The mocks never touch hardware.
//!
//! Capability groups mirror the `pictor-hal` features one to one: a build
//! with `--no-default-features --features i2c` compiles only the I2C mock
//! and exposes no SPI or parallel-port items at all.
//!
//! Transaction mocks can be armed to fail their next operation, so the
//! caller's handling of the single-outcome error convention is testable
//! too.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "delay")]
mod delay;
#[cfg(feature = "gpio")]
mod gpio;
#[cfg(feature = "i2c")]
mod i2c;
#[cfg(feature = "parport")]
mod parport;
#[cfg(feature = "spi")]
mod spi;

#[cfg(feature = "delay")]
pub use delay::MockDelay;
#[cfg(feature = "gpio")]
pub use gpio::LoopbackPin;
#[cfg(feature = "i2c")]
pub use i2c::{Direction, I2cRecord, MockI2c};
#[cfg(feature = "parport")]
pub use parport::MockParallelPort;
#[cfg(feature = "spi")]
pub use spi::MockSpi;

/// Capacity of the recorded byte journals
#[cfg(any(feature = "spi", feature = "parport"))]
pub const JOURNAL_BYTES: usize = 512;

/// Errors raised by the transaction mocks
///
/// Real backends keep their error opaque; the mock spells its own out so
/// tests can tell a contract violation from an injected fault.
#[cfg(any(feature = "i2c", feature = "spi", feature = "parport"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MockError {
    /// Buffer length not word aligned, mismatched buffer lengths, or a
    /// phase bit width outside 1..=32
    Geometry,
    /// Journal or response queue capacity exceeded
    Capacity,
    /// An armed fault was consumed by this operation
    Fault,
}
