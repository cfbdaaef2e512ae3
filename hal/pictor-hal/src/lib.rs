//! Pictor Hardware Abstraction Layer
//!
//! This crate defines the peripheral contract a platform backend must
//! satisfy so that display and input drivers can run on it without
//! depending on a specific SDK. The backend owns and initializes every
//! peripheral; the traits here only borrow them for the duration of a
//! single call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display / input drivers (external)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pictor-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ platform SDK  │       │ pictor-hal-   │
//! │   backend     │       │     mock      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Capability groups
//!
//! Each operation group lives behind a cargo feature and compiles to
//! nothing when disabled. A backend implements a group completely or not
//! at all; there is no runtime capability query.
//!
//! - `delay` - [`delay::Delay`] blocking waits
//! - `gpio` - [`gpio::OutputPin`], [`gpio::InputPin`] digital I/O
//! - `i2c` - [`i2c::I2cDevice`] register-addressed transactions
//! - `spi` - [`spi::SpiDevice`], [`spi::SpiPhases`] full-duplex transfers
//! - `parport` - [`parport::ParallelPort`] bulk word transfers
//!
//! # Error convention
//!
//! Bus traits carry an opaque associated `Error`. A transaction either
//! completed or it did not; the contract defines no finer taxonomy, and
//! callers must treat any `Err` as an unrecoverable single-transaction
//! failure. Retry policy belongs to the layer above.

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "delay")]
pub mod delay;
#[cfg(feature = "gpio")]
pub mod gpio;
#[cfg(feature = "i2c")]
pub mod i2c;
#[cfg(feature = "parport")]
pub mod parport;
#[cfg(feature = "spi")]
pub mod spi;

#[cfg(any(feature = "spi", feature = "parport"))]
mod word;

#[cfg(all(
    feature = "embedded-hal",
    any(feature = "delay", feature = "i2c", feature = "spi")
))]
pub mod compat;

// Re-export key traits at crate root for convenience
#[cfg(feature = "delay")]
pub use delay::Delay;
#[cfg(feature = "gpio")]
pub use gpio::{InputPin, Level, OutputPin};
#[cfg(feature = "i2c")]
pub use i2c::I2cDevice;
#[cfg(feature = "parport")]
pub use parport::ParallelPort;
#[cfg(feature = "spi")]
pub use spi::{PhaseScope, SpiDevice, SpiPhases};
#[cfg(any(feature = "spi", feature = "parport"))]
pub use word::WordSize;
