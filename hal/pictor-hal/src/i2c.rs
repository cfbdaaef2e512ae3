//! I2C device abstractions
//!
//! Provides a trait for register-addressed transactions against a single
//! I2C peripheral. The backend's device type carries the bus handle and
//! slave address; this contract never constructs or retains it.

/// Register-addressed I2C device
///
/// All transfers are synchronous and blocking. Buffers are caller-owned:
/// the backend reads or writes exactly the slice given, during the call
/// only, and keeps no reference afterwards.
///
/// The error is opaque. A transaction either completed or it did not
/// (NACK, timeout and bus faults all collapse to `Err`); callers treat
/// any failure as terminal for that transaction and retry above this
/// layer if they want to.
pub trait I2cDevice {
    /// Error type for I2C operations
    type Error;

    /// Write `data` to an 8-bit register
    ///
    /// With `reg: None` the register-address phase is omitted and the
    /// payload is transmitted raw.
    fn write(&mut self, reg: Option<u8>, data: &[u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from an 8-bit register
    ///
    /// With `reg: None` the register-address phase is omitted and the
    /// device is read directly.
    fn read(&mut self, reg: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write `data` to a 16-bit register
    ///
    /// Same semantics as [`I2cDevice::write`] with a wider register
    /// address, for controllers with 16-bit register maps.
    fn write_reg16(&mut self, reg: Option<u16>, data: &[u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes from a 16-bit register
    ///
    /// Same semantics as [`I2cDevice::read`] with a wider register
    /// address.
    fn read_reg16(&mut self, reg: Option<u16>, buf: &mut [u8]) -> Result<(), Self::Error>;
}
