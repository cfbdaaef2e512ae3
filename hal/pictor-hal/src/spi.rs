//! SPI device abstractions
//!
//! Provides traits for full-duplex transfers and for the command/address/
//! dummy phase configuration used by command-addressed controllers
//! (quad-SPI panels, 3-wire OLED modules).

use crate::word::WordSize;

/// Lifetime of a configured SPI phase
///
/// The source drivers left this controller-dependent; here it is an
/// explicit parameter of the contract so callers never have to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseScope {
    /// The phase prefixes the next transaction only, then clears itself
    PerTransaction,
    /// The phase prefixes every transaction until explicitly cleared
    Persistent,
}

/// SPI device
///
/// All transfers are synchronous and blocking, and clock whole words of
/// the given [`WordSize`]. Buffer lengths must be a multiple of the word
/// size; when both buffers are supplied they must be equal in length.
///
/// Errors are opaque single-transaction failures, as for
/// [`I2cDevice`](crate::i2c::I2cDevice).
pub trait SpiDevice {
    /// Error type for SPI operations
    type Error;

    /// Full-duplex transfer
    ///
    /// - `read: None` discards received data.
    /// - `write: None` clocks out zero-filled words while receiving.
    /// - Both `None` is a no-op that succeeds without bus activity.
    fn transaction(
        &mut self,
        read: Option<&mut [u8]>,
        write: Option<&[u8]>,
        word_size: WordSize,
    ) -> Result<(), Self::Error>;

    /// Transmit one word-sized pattern `repeats` times
    ///
    /// Fill shortcut: the pattern buffer is supplied once and clocked out
    /// `repeats` times. `pattern: None` sends zero-filled words. The bus
    /// activity is identical to a [`SpiDevice::transaction`] carrying the
    /// expanded buffer; received data is discarded.
    fn repeat(
        &mut self,
        pattern: Option<&[u8]>,
        repeats: u32,
        word_size: WordSize,
    ) -> Result<(), Self::Error>;

    /// Write-only transfer
    fn write(&mut self, data: &[u8], word_size: WordSize) -> Result<(), Self::Error> {
        self.transaction(None, Some(data), word_size)
    }

    /// Read-only transfer (clocks out zeros)
    fn read(&mut self, buf: &mut [u8], word_size: WordSize) -> Result<(), Self::Error> {
        self.transaction(Some(buf), None, word_size)
    }
}

/// Command/address/dummy phase configuration
///
/// Command-addressed controllers prefix the data phase with a command
/// phase, an address phase and a run of dummy clocks. Configuration is
/// stateful per device handle: each setter replaces the previous value
/// for its phase, and each `clear_*` removes it. Clearing an unset phase
/// is a no-op that succeeds.
pub trait SpiPhases: SpiDevice {
    /// Set the command phase: `bits` low-order bits of `value`
    fn set_command(&mut self, value: u32, bits: u8, scope: PhaseScope)
        -> Result<(), Self::Error>;

    /// Set the address phase: `bits` low-order bits of `value`
    fn set_address(&mut self, value: u32, bits: u8, scope: PhaseScope)
        -> Result<(), Self::Error>;

    /// Set the dummy phase: `bits` don't-care clocks before data
    fn set_dummy(&mut self, bits: u8, scope: PhaseScope) -> Result<(), Self::Error>;

    /// Remove the configured command phase
    fn clear_command(&mut self) -> Result<(), Self::Error>;

    /// Remove the configured address phase
    fn clear_address(&mut self) -> Result<(), Self::Error>;

    /// Remove the configured dummy phase
    fn clear_dummy(&mut self) -> Result<(), Self::Error>;
}
