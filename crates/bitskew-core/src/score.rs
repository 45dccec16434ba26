//! Bit imbalance scoring.

use serde::Serialize;

/// Zero/one bit totals for a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitCounts {
    pub zeros: u64,
    pub ones: u64,
}

impl BitCounts {
    /// Absolute difference between zero and one bits.
    ///
    /// This is the search's optimization objective: 0 for a perfectly
    /// balanced buffer, `8 * len` when every bit is equal.
    pub fn imbalance(&self) -> u64 {
        self.zeros.abs_diff(self.ones)
    }
}

/// Count zero and one bits over an entire buffer.
///
/// The empty buffer yields `(0, 0)`.
pub fn count_bits(data: &[u8]) -> BitCounts {
    let ones: u64 = data.iter().map(|b| u64::from(b.count_ones())).sum();
    BitCounts {
        zeros: data.len() as u64 * 8 - ones,
        ones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bits_empty() {
        assert_eq!(count_bits(&[]), BitCounts { zeros: 0, ones: 0 });
    }

    #[test]
    fn test_count_bits_balanced() {
        let counts = count_bits(&[0xF0, 0x0F]);
        assert_eq!(counts.ones, 8);
        assert_eq!(counts.zeros, 8);
        assert_eq!(counts.imbalance(), 0);
    }

    #[test]
    fn test_imbalance_peaks_when_all_bits_equal() {
        assert_eq!(count_bits(&[0x00; 4]).imbalance(), 32);
        assert_eq!(count_bits(&[0xFF; 4]).imbalance(), 32);
    }

    #[test]
    fn test_imbalance_stays_within_bit_total() {
        let counts = count_bits(&[0xA5, 0x3C, 0x01]);
        assert_eq!(counts.ones, 9);
        assert_eq!(counts.zeros, 15);
        assert!(counts.imbalance() <= 24);
    }
}
