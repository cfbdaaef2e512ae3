/// Transfer word width for SPI and parallel-port operations.
///
/// Panel buses move data in 8, 16, 24 or 32 bit words, but buffers are
/// always plain byte slices. A buffer passed with a given word size must
/// have a length that is a multiple of [`WordSize::bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordSize {
    /// 8-bit words
    One = 1,
    /// 16-bit words
    Two = 2,
    /// 24-bit words (packed RGB888 panels)
    Three = 3,
    /// 32-bit words
    Four = 4,
}

impl WordSize {
    /// Word width in bytes
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Check that a byte length is a whole number of words
    pub const fn divides(self, len: usize) -> bool {
        len % self.bytes() == 0
    }
}

impl Default for WordSize {
    fn default() -> Self {
        WordSize::One
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_alignment() {
        assert!(WordSize::One.divides(7));
        assert!(WordSize::Two.divides(6));
        assert!(!WordSize::Two.divides(7));
        assert!(WordSize::Three.divides(9));
        assert!(!WordSize::Four.divides(10));
        assert!(WordSize::Four.divides(0));
    }

    #[test]
    fn test_byte_widths() {
        assert_eq!(WordSize::One.bytes(), 1);
        assert_eq!(WordSize::Two.bytes(), 2);
        assert_eq!(WordSize::Three.bytes(), 3);
        assert_eq!(WordSize::Four.bytes(), 4);
    }
}
