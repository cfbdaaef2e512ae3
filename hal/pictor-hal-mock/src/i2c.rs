//! Journaling I2C device mock

use heapless::{Deque, Vec};
use pictor_hal::i2c::I2cDevice;

use crate::MockError;

/// Maximum journaled transactions
pub const MAX_RECORDS: usize = 16;

/// Maximum payload bytes per journaled transaction
pub const MAX_PAYLOAD: usize = 64;

/// Transfer direction of a journaled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Write,
    Read,
}

/// One journaled I2C transaction
#[derive(Debug, Clone)]
pub struct I2cRecord {
    pub direction: Direction,
    /// Register address, widened to u16; `None` for raw transfers
    pub reg: Option<u16>,
    /// True when the caller used the 16-bit register variant
    pub reg_wide: bool,
    /// Bytes written by the caller, or bytes delivered to the caller
    pub bytes: Vec<u8, MAX_PAYLOAD>,
}

/// I2C device mock
///
/// Writes are journaled byte-exactly. Reads drain a programmable response
/// queue and zero-fill once it is exhausted; the delivered bytes are
/// journaled as well.
#[derive(Debug, Default)]
pub struct MockI2c {
    journal: Vec<I2cRecord, MAX_RECORDS>,
    responses: Deque<u8, MAX_PAYLOAD>,
    fail_next: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Journaled transactions, oldest first
    pub fn journal(&self) -> &[I2cRecord] {
        &self.journal
    }

    /// Queue bytes for subsequent reads to return
    pub fn push_response(&mut self, bytes: &[u8]) -> Result<(), MockError> {
        for &b in bytes {
            self.responses.push_back(b).map_err(|_| MockError::Capacity)?;
        }
        Ok(())
    }

    /// Fail the next transaction with [`MockError::Fault`]
    pub fn arm_fault(&mut self) {
        self.fail_next = true;
    }

    fn take_fault(&mut self) -> Result<(), MockError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(MockError::Fault);
        }
        Ok(())
    }

    fn record(
        &mut self,
        direction: Direction,
        reg: Option<u16>,
        reg_wide: bool,
        bytes: &[u8],
    ) -> Result<(), MockError> {
        let payload = Vec::from_slice(bytes).map_err(|_| MockError::Capacity)?;
        self.journal
            .push(I2cRecord {
                direction,
                reg,
                reg_wide,
                bytes: payload,
            })
            .map_err(|_| MockError::Capacity)
    }

    fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.responses.pop_front().unwrap_or(0);
        }
    }
}

impl I2cDevice for MockI2c {
    type Error = MockError;

    fn write(&mut self, reg: Option<u8>, data: &[u8]) -> Result<(), Self::Error> {
        self.take_fault()?;
        self.record(Direction::Write, reg.map(u16::from), false, data)
    }

    fn read(&mut self, reg: Option<u8>, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.take_fault()?;
        self.fill(buf);
        self.record(Direction::Read, reg.map(u16::from), false, buf)
    }

    fn write_reg16(&mut self, reg: Option<u16>, data: &[u8]) -> Result<(), Self::Error> {
        self.take_fault()?;
        self.record(Direction::Write, reg, true, data)
    }

    fn read_reg16(&mut self, reg: Option<u16>, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.take_fault()?;
        self.fill(buf);
        self.record(Direction::Read, reg, true, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_journals_exact_payload() {
        let mut dev = MockI2c::new();
        dev.write(Some(0x2A), &[1, 2, 3]).unwrap();

        let rec = &dev.journal()[0];
        assert_eq!(rec.direction, Direction::Write);
        assert_eq!(rec.reg, Some(0x2A));
        assert!(!rec.reg_wide);
        assert_eq!(rec.bytes.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_raw_write_omits_register_phase() {
        let mut dev = MockI2c::new();
        dev.write(None, &[0xAA]).unwrap();
        assert_eq!(dev.journal()[0].reg, None);
    }

    #[test]
    fn test_read_fills_exactly_requested_length() {
        let mut dev = MockI2c::new();
        dev.push_response(&[0x10, 0x20]).unwrap();

        // Queue shorter than the buffer: remainder is zero-filled
        let mut buf = [0xFFu8; 4];
        dev.read(Some(0x00), &mut buf).unwrap();
        assert_eq!(buf, [0x10, 0x20, 0, 0]);
        assert_eq!(dev.journal()[0].bytes.as_slice(), &buf);
    }

    #[test]
    fn test_empty_read_touches_nothing() {
        let mut dev = MockI2c::new();
        dev.push_response(&[0x55]).unwrap();
        let mut buf = [0u8; 0];
        dev.read(None, &mut buf).unwrap();
        // Response queue must be untouched by a zero-length read
        let mut one = [0u8; 1];
        dev.read(None, &mut one).unwrap();
        assert_eq!(one, [0x55]);
    }

    #[test]
    fn test_wide_register_variant_is_flagged() {
        let mut dev = MockI2c::new();
        dev.write_reg16(Some(0x01FE), &[9]).unwrap();

        let rec = &dev.journal()[0];
        assert_eq!(rec.reg, Some(0x01FE));
        assert!(rec.reg_wide);
    }

    #[test]
    fn test_armed_fault_fails_one_transaction() {
        let mut dev = MockI2c::new();
        dev.arm_fault();
        assert_eq!(dev.write(None, &[1]), Err(MockError::Fault));
        assert!(dev.journal().is_empty());

        // The fault is single-shot
        dev.write(None, &[1]).unwrap();
        assert_eq!(dev.journal().len(), 1);
    }
}
