//! Adapters over embedded-hal 1.0 peripherals
//!
//! Most platform SDKs already expose their buses through embedded-hal
//! traits. These wrappers let such peripherals satisfy the Pictor
//! contract without a hand-written backend.

#[cfg(feature = "delay")]
use crate::delay::Delay;
#[cfg(feature = "i2c")]
use crate::i2c::I2cDevice;
#[cfg(feature = "spi")]
use crate::spi::SpiDevice;
#[cfg(feature = "spi")]
use crate::word::WordSize;

/// Wrap an [`embedded_hal::delay::DelayNs`] as a [`Delay`]
#[cfg(feature = "delay")]
pub struct EhDelay<T>(pub T);

#[cfg(feature = "delay")]
impl<T: embedded_hal::delay::DelayNs> Delay for EhDelay<T> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

/// Bind an [`embedded_hal::i2c::I2c`] bus to one slave address
///
/// The register phase is expressed as a write operation in the same bus
/// transaction as the payload; register reads use a repeated start.
#[cfg(feature = "i2c")]
pub struct EhI2c<B> {
    bus: B,
    address: u8,
}

#[cfg(feature = "i2c")]
impl<B> EhI2c<B> {
    /// Create a device bound to a 7-bit slave address
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }
}

#[cfg(feature = "i2c")]
impl<B: embedded_hal::i2c::I2c> I2cDevice for EhI2c<B> {
    type Error = B::Error;

    fn write(&mut self, reg: Option<u8>, data: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal::i2c::Operation;
        match reg {
            Some(r) => {
                let reg_bytes = [r];
                self.bus.transaction(
                    self.address,
                    &mut [Operation::Write(&reg_bytes), Operation::Write(data)],
                )
            }
            None => self.bus.write(self.address, data),
        }
    }

    fn read(&mut self, reg: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error> {
        match reg {
            Some(r) => self.bus.write_read(self.address, &[r], buf),
            None => self.bus.read(self.address, buf),
        }
    }

    fn write_reg16(&mut self, reg: Option<u16>, data: &[u8]) -> Result<(), Self::Error> {
        use embedded_hal::i2c::Operation;
        match reg {
            Some(r) => {
                let reg_bytes = r.to_be_bytes();
                self.bus.transaction(
                    self.address,
                    &mut [Operation::Write(&reg_bytes), Operation::Write(data)],
                )
            }
            None => self.bus.write(self.address, data),
        }
    }

    fn read_reg16(&mut self, reg: Option<u16>, buf: &mut [u8]) -> Result<(), Self::Error> {
        match reg {
            Some(r) => self.bus.write_read(self.address, &r.to_be_bytes(), buf),
            None => self.bus.read(self.address, buf),
        }
    }
}

/// Wrap an [`embedded_hal::spi::SpiBus`] as a [`SpiDevice`]
///
/// The bus is byte-oriented, so word framing collapses to a byte stream;
/// callers still owe word-aligned buffer lengths. Command/address/dummy
/// phases are not expressible over `SpiBus` and the wrapper does not
/// implement [`SpiPhases`](crate::spi::SpiPhases).
#[cfg(feature = "spi")]
pub struct EhSpi<B>(pub B);

#[cfg(feature = "spi")]
impl<B: embedded_hal::spi::SpiBus<u8>> SpiDevice for EhSpi<B> {
    type Error = B::Error;

    fn transaction(
        &mut self,
        read: Option<&mut [u8]>,
        write: Option<&[u8]>,
        word_size: WordSize,
    ) -> Result<(), Self::Error> {
        match (read, write) {
            (Some(r), Some(w)) => {
                debug_assert_eq!(r.len(), w.len());
                debug_assert!(word_size.divides(w.len()));
                self.0.transfer(r, w)
            }
            (Some(r), None) => {
                debug_assert!(word_size.divides(r.len()));
                self.0.read(r)
            }
            (None, Some(w)) => {
                debug_assert!(word_size.divides(w.len()));
                self.0.write(w)
            }
            (None, None) => Ok(()),
        }
    }

    fn repeat(
        &mut self,
        pattern: Option<&[u8]>,
        repeats: u32,
        word_size: WordSize,
    ) -> Result<(), Self::Error> {
        const ZEROS: [u8; 4] = [0; 4];
        let word = match pattern {
            Some(p) => {
                debug_assert_eq!(p.len(), word_size.bytes());
                p
            }
            None => &ZEROS[..word_size.bytes()],
        };
        for _ in 0..repeats {
            self.0.write(word)?;
        }
        Ok(())
    }
}
