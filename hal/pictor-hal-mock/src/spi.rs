//! Journaling SPI device mock
//!
//! Records the MOSI byte stream a real controller would clock out,
//! including command/address/dummy phase prefixes, so tests can compare
//! bus activity byte-exactly.

use heapless::Vec;
use pictor_hal::spi::{PhaseScope, SpiDevice, SpiPhases};
use pictor_hal::WordSize;

use crate::{MockError, JOURNAL_BYTES};

/// One configured phase: `bits` low-order bits of `value`
#[derive(Debug, Clone, Copy)]
struct Phase {
    value: u32,
    bits: u8,
    scope: PhaseScope,
}

impl Phase {
    /// Bytes the phase occupies on the wire (big-endian, bit-padded up)
    fn byte_len(&self) -> usize {
        (self.bits as usize + 7) / 8
    }

    fn emit(&self, mosi: &mut Vec<u8, JOURNAL_BYTES>) -> Result<(), MockError> {
        let be = self.value.to_be_bytes();
        mosi.extend_from_slice(&be[4 - self.byte_len()..])
            .map_err(|_| MockError::Capacity)
    }
}

fn masked(value: u32, bits: u8) -> u32 {
    if bits >= 32 {
        value
    } else {
        value & ((1u32 << bits) - 1)
    }
}

/// SPI device mock
///
/// Received data is synthesized from a programmable fill byte (default
/// zero). Journal layout per transaction: command phase, address phase,
/// dummy clocks, then the data words.
#[derive(Debug)]
pub struct MockSpi {
    mosi: Vec<u8, JOURNAL_BYTES>,
    miso_fill: u8,
    command: Option<Phase>,
    address: Option<Phase>,
    dummy: Option<Phase>,
    fail_next: bool,
}

impl Default for MockSpi {
    fn default() -> Self {
        Self {
            mosi: Vec::new(),
            miso_fill: 0,
            command: None,
            address: None,
            dummy: None,
            fail_next: false,
        }
    }
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything clocked out so far, phases included
    pub fn mosi(&self) -> &[u8] {
        &self.mosi
    }

    /// Forget journaled activity; configured phases are kept
    pub fn clear_journal(&mut self) {
        self.mosi.clear();
    }

    /// Byte returned for every received word slot
    pub fn set_miso_fill(&mut self, byte: u8) {
        self.miso_fill = byte;
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

    /// Prefix the journal with the configured phases, consuming the
    /// per-transaction ones
    fn emit_phases(&mut self) -> Result<(), MockError> {
        if let Some(p) = self.command {
            p.emit(&mut self.mosi)?;
            if p.scope == PhaseScope::PerTransaction {
                self.command = None;
            }
        }
        if let Some(p) = self.address {
            p.emit(&mut self.mosi)?;
            if p.scope == PhaseScope::PerTransaction {
                self.address = None;
            }
        }
        if let Some(p) = self.dummy {
            // Dummy clocks carry don't-care data; journal them as zeros
            for _ in 0..p.byte_len() {
                self.mosi.push(0).map_err(|_| MockError::Capacity)?;
            }
            if p.scope == PhaseScope::PerTransaction {
                self.dummy = None;
            }
        }
        Ok(())
    }

    fn check_bits(bits: u8) -> Result<(), MockError> {
        if bits == 0 || bits > 32 {
            return Err(MockError::Geometry);
        }
        Ok(())
    }
}

impl SpiDevice for MockSpi {
    type Error = MockError;

    fn transaction(
        &mut self,
        read: Option<&mut [u8]>,
        write: Option<&[u8]>,
        word_size: WordSize,
    ) -> Result<(), Self::Error> {
        self.take_fault()?;

        let len = match (&read, &write) {
            // No buffers at all: succeed without bus activity
            (None, None) => return Ok(()),
            (Some(r), Some(w)) => {
                if r.len() != w.len() {
                    return Err(MockError::Geometry);
                }
                w.len()
            }
            (Some(r), None) => r.len(),
            (None, Some(w)) => w.len(),
        };
        if !word_size.divides(len) {
            return Err(MockError::Geometry);
        }

        self.emit_phases()?;

        match write {
            Some(w) => self
                .mosi
                .extend_from_slice(w)
                .map_err(|_| MockError::Capacity)?,
            // Receive-only: zero-filled words are clocked out
            None => {
                for _ in 0..len {
                    self.mosi.push(0).map_err(|_| MockError::Capacity)?;
                }
            }
        }

        if let Some(r) = read {
            r.fill(self.miso_fill);
        }
        Ok(())
    }

    fn repeat(
        &mut self,
        pattern: Option<&[u8]>,
        repeats: u32,
        word_size: WordSize,
    ) -> Result<(), Self::Error> {
        self.take_fault()?;

        if let Some(p) = pattern {
            if p.len() != word_size.bytes() {
                return Err(MockError::Geometry);
            }
        }

        self.emit_phases()?;

        let zeros = [0u8; 4];
        let word = pattern.unwrap_or(&zeros[..word_size.bytes()]);
        for _ in 0..repeats {
            self.mosi
                .extend_from_slice(word)
                .map_err(|_| MockError::Capacity)?;
        }
        Ok(())
    }
}

impl SpiPhases for MockSpi {
    fn set_command(
        &mut self,
        value: u32,
        bits: u8,
        scope: PhaseScope,
    ) -> Result<(), Self::Error> {
        Self::check_bits(bits)?;
        self.command = Some(Phase {
            value: masked(value, bits),
            bits,
            scope,
        });
        Ok(())
    }

    fn set_address(
        &mut self,
        value: u32,
        bits: u8,
        scope: PhaseScope,
    ) -> Result<(), Self::Error> {
        Self::check_bits(bits)?;
        self.address = Some(Phase {
            value: masked(value, bits),
            bits,
            scope,
        });
        Ok(())
    }

    fn set_dummy(&mut self, bits: u8, scope: PhaseScope) -> Result<(), Self::Error> {
        Self::check_bits(bits)?;
        self.dummy = Some(Phase {
            value: 0,
            bits,
            scope,
        });
        Ok(())
    }

    fn clear_command(&mut self) -> Result<(), Self::Error> {
        self.command = None;
        Ok(())
    }

    fn clear_address(&mut self) -> Result<(), Self::Error> {
        self.address = None;
        Ok(())
    }

    fn clear_dummy(&mut self) -> Result<(), Self::Error> {
        self.dummy = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_write_is_journaled_byte_exactly() {
        let mut dev = MockSpi::new();
        dev.write(&[0xDE, 0xAD, 0xBE, 0xEF], WordSize::Two).unwrap();
        assert_eq!(dev.mosi(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_receive_only_clocks_zero_words() {
        let mut dev = MockSpi::new();
        dev.set_miso_fill(0x5A);

        let mut buf = [0u8; 4];
        dev.read(&mut buf, WordSize::One).unwrap();
        assert_eq!(buf, [0x5A; 4]);
        assert_eq!(dev.mosi(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_discarded_receive_is_not_an_error() {
        let mut dev = MockSpi::new();
        dev.transaction(None, Some(&[1, 2]), WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[1, 2]);
    }

    #[test]
    fn test_empty_transaction_produces_no_activity() {
        let mut dev = MockSpi::new();
        dev.set_command(0x03, 8, PhaseScope::PerTransaction).unwrap();
        dev.transaction(None, None, WordSize::One).unwrap();
        assert!(dev.mosi().is_empty());

        // The pending phase survives for the next real transaction
        dev.write(&[0xAB], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0x03, 0xAB]);
    }

    #[test]
    fn test_mismatched_buffers_are_rejected() {
        let mut dev = MockSpi::new();
        let mut buf = [0u8; 3];
        assert_eq!(
            dev.transaction(Some(&mut buf), Some(&[1, 2]), WordSize::One),
            Err(MockError::Geometry)
        );
        assert_eq!(
            dev.write(&[1, 2, 3], WordSize::Two),
            Err(MockError::Geometry)
        );
        assert!(dev.mosi().is_empty());
    }

    #[test]
    fn test_repeat_none_matches_zero_buffer_transaction() {
        let mut shortcut = MockSpi::new();
        shortcut.repeat(None, 3, WordSize::Two).unwrap();

        let mut general = MockSpi::new();
        general
            .transaction(None, Some(&[0u8; 6]), WordSize::Two)
            .unwrap();

        assert_eq!(shortcut.mosi(), general.mosi());
    }

    #[test]
    fn test_cleared_command_leaves_no_phase() {
        let mut dev = MockSpi::new();
        dev.set_command(0x03, 8, PhaseScope::Persistent).unwrap();
        dev.clear_command().unwrap();
        // Clearing twice is a no-op
        dev.clear_command().unwrap();

        dev.write(&[0x11], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0x11]);
    }

    #[test]
    fn test_per_transaction_phase_is_consumed_once() {
        let mut dev = MockSpi::new();
        dev.set_command(0xA5, 8, PhaseScope::PerTransaction).unwrap();

        dev.write(&[0x01], WordSize::One).unwrap();
        dev.write(&[0x02], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0xA5, 0x01, 0x02]);
    }

    #[test]
    fn test_persistent_phase_applies_until_cleared() {
        let mut dev = MockSpi::new();
        dev.set_command(0xA5, 8, PhaseScope::Persistent).unwrap();

        dev.write(&[0x01], WordSize::One).unwrap();
        dev.write(&[0x02], WordSize::One).unwrap();
        dev.clear_command().unwrap();
        dev.write(&[0x03], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0xA5, 0x01, 0xA5, 0x02, 0x03]);
    }

    #[test]
    fn test_phase_prefix_order_and_widths() {
        let mut dev = MockSpi::new();
        dev.set_command(0x0B, 8, PhaseScope::PerTransaction).unwrap();
        dev.set_address(0x012345, 24, PhaseScope::PerTransaction)
            .unwrap();
        dev.set_dummy(8, PhaseScope::PerTransaction).unwrap();

        dev.write(&[0xFF], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0x0B, 0x01, 0x23, 0x45, 0x00, 0xFF]);
    }

    #[test]
    fn test_phase_value_is_masked_to_width() {
        let mut dev = MockSpi::new();
        dev.set_command(0xFFFF_FF03, 8, PhaseScope::PerTransaction)
            .unwrap();
        dev.write(&[0x00], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[0x03, 0x00]);
    }

    #[test]
    fn test_zero_and_oversized_bit_widths_are_rejected() {
        let mut dev = MockSpi::new();
        assert_eq!(
            dev.set_command(0, 0, PhaseScope::Persistent),
            Err(MockError::Geometry)
        );
        assert_eq!(
            dev.set_address(0, 33, PhaseScope::Persistent),
            Err(MockError::Geometry)
        );
    }

    #[test]
    fn test_armed_fault_fails_one_transaction() {
        let mut dev = MockSpi::new();
        dev.arm_fault();
        assert_eq!(dev.write(&[1], WordSize::One), Err(MockError::Fault));
        assert!(dev.mosi().is_empty());

        dev.write(&[1], WordSize::One).unwrap();
        assert_eq!(dev.mosi(), &[1]);
    }

    fn word_size() -> impl Strategy<Value = WordSize> {
        prop_oneof![
            Just(WordSize::One),
            Just(WordSize::Two),
            Just(WordSize::Three),
            Just(WordSize::Four),
        ]
    }

    proptest! {
        // The fill shortcut must be indistinguishable on the wire from
        // the general path carrying the expanded buffer.
        #[test]
        fn prop_repeat_matches_expanded_transaction(
            ws in word_size(),
            pattern in proptest::collection::vec(any::<u8>(), 4),
            repeats in 0u32..16,
        ) {
            let word = &pattern[..ws.bytes()];

            let mut shortcut = MockSpi::new();
            shortcut.repeat(Some(word), repeats, ws).unwrap();

            let mut expanded: std::vec::Vec<u8> = std::vec::Vec::new();
            for _ in 0..repeats {
                expanded.extend_from_slice(word);
            }
            let mut general = MockSpi::new();
            general.transaction(None, Some(&expanded), ws).unwrap();

            prop_assert_eq!(shortcut.mosi(), general.mosi());
        }
    }
}
