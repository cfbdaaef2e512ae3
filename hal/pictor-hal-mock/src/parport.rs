//! Journaling parallel port mock

use heapless::Vec;
use pictor_hal::parport::ParallelPort;
use pictor_hal::WordSize;

use crate::{MockError, JOURNAL_BYTES};

/// Parallel port mock
///
/// Writes are journaled byte-exactly; reads are synthesized from a
/// programmable fill byte.
#[derive(Debug)]
pub struct MockParallelPort {
    written: Vec<u8, JOURNAL_BYTES>,
    read_fill: u8,
    fail_next: bool,
}

impl Default for MockParallelPort {
    fn default() -> Self {
        Self {
            written: Vec::new(),
            read_fill: 0,
            fail_next: false,
        }
    }
}

impl MockParallelPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Byte returned for every read slot
    pub fn set_read_fill(&mut self, byte: u8) {
        self.read_fill = byte;
    }

    /// Fail the next transfer with [`MockError::Fault`]
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
}

impl ParallelPort for MockParallelPort {
    type Error = MockError;

    fn write(&mut self, data: &[u8], word_size: WordSize) -> Result<(), Self::Error> {
        self.take_fault()?;
        if !word_size.divides(data.len()) {
            return Err(MockError::Geometry);
        }
        self.written
            .extend_from_slice(data)
            .map_err(|_| MockError::Capacity)
    }

    fn read(&mut self, buf: &mut [u8], word_size: WordSize) -> Result<(), Self::Error> {
        self.take_fault()?;
        if !word_size.divides(buf.len()) {
            return Err(MockError::Geometry);
        }
        buf.fill(self.read_fill);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_captures_exact_word_count() {
        let mut port = MockParallelPort::new();
        port.write(&[1, 2, 3, 4, 5, 6], WordSize::Two).unwrap();
        assert_eq!(port.written(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_read_fills_exactly_requested_length() {
        let mut port = MockParallelPort::new();
        port.set_read_fill(0x7E);

        let mut buf = [0u8; 4];
        port.read(&mut buf, WordSize::Four).unwrap();
        assert_eq!(buf, [0x7E; 4]);
    }

    #[test]
    fn test_misaligned_length_is_rejected() {
        let mut port = MockParallelPort::new();
        assert_eq!(
            port.write(&[1, 2, 3], WordSize::Two),
            Err(MockError::Geometry)
        );
        assert!(port.written().is_empty());

        let mut buf = [0u8; 5];
        assert_eq!(
            port.read(&mut buf, WordSize::Two),
            Err(MockError::Geometry)
        );
    }

    #[test]
    fn test_armed_fault_fails_one_transfer() {
        let mut port = MockParallelPort::new();
        port.arm_fault();
        assert_eq!(port.write(&[1, 2], WordSize::One), Err(MockError::Fault));

        port.write(&[1, 2], WordSize::One).unwrap();
        assert_eq!(port.written(), &[1, 2]);
    }
}
