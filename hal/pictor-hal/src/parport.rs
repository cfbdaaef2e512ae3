//! Parallel port abstractions
//!
//! Bulk word transfer over an 8/16-bit parallel bus (Intel 8080 / Motorola
//! 6800 style panel interfaces). Strobe and select lines belong to the
//! backend; only the data path crosses this boundary.

use crate::word::WordSize;

/// Parallel port device
///
/// Symmetric blocking bulk transfer. Buffer lengths must be a multiple of
/// the word size. Errors are opaque single-transaction failures, as for
/// the serial buses.
pub trait ParallelPort {
    /// Error type for parallel port operations
    type Error;

    /// Write whole words from `data` to the port
    fn write(&mut self, data: &[u8], word_size: WordSize) -> Result<(), Self::Error>;

    /// Read whole words from the port into `buf`
    fn read(&mut self, buf: &mut [u8], word_size: WordSize) -> Result<(), Self::Error>;
}
