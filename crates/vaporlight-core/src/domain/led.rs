//! LED addressing.
//!
//! The wire carries a 16-bit big-endian index.  The client keeps no record of
//! how many LEDs the server drives, so any index is accepted and wider
//! integers are reduced to their low 16 bits.  Whether the addressed LED
//! exists is for the server to decide.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Address of one LED in the remote array.
///
/// # Examples
///
/// ```rust
/// use vaporlight_core::LedIndex;
///
/// assert_eq!(LedIndex::from(3u16).get(), 3);
/// // Wider values keep only their low 16 bits.
/// assert_eq!(LedIndex::from(0x1_0003u32).get(), 3);
/// // Plain integer literals work too.
/// assert_eq!(LedIndex::from(7).get(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedIndex(u16);

impl LedIndex {
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Big-endian wire representation.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    fn truncating(raw: u64) -> Self {
        let masked = (raw & 0xFFFF) as u16;
        if raw > u64::from(u16::MAX) {
            debug!(raw, masked, "LED index wider than 16 bits; keeping low bits");
        }
        Self(masked)
    }
}

impl From<u16> for LedIndex {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl From<u8> for LedIndex {
    fn from(index: u8) -> Self {
        Self(u16::from(index))
    }
}

impl From<u32> for LedIndex {
    fn from(index: u32) -> Self {
        Self::truncating(u64::from(index))
    }
}

impl From<usize> for LedIndex {
    fn from(index: usize) -> Self {
        Self::truncating(index as u64)
    }
}

// Signed values are taken as two's complement, so `-1` addresses 0xFFFF.
impl From<i32> for LedIndex {
    fn from(index: i32) -> Self {
        Self::truncating(index as u64)
    }
}

impl From<i64> for LedIndex {
    fn from(index: i64) -> Self {
        Self::truncating(index as u64)
    }
}

impl From<LedIndex> for u16 {
    fn from(index: LedIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_index_is_kept_as_is() {
        assert_eq!(LedIndex::from(65535u16).get(), 65535);
        assert_eq!(LedIndex::from(0u16).get(), 0);
    }

    #[test]
    fn test_wide_index_is_masked_to_low_sixteen_bits() {
        assert_eq!(LedIndex::from(65536u32).get(), 0);
        assert_eq!(LedIndex::from(0xABCD_1234u32).get(), 0x1234);
        assert_eq!(LedIndex::from(70_000usize).get(), 4_464);
    }

    #[test]
    fn test_signed_index_keeps_low_sixteen_bits() {
        assert_eq!(LedIndex::from(3i32).get(), 3);
        assert_eq!(LedIndex::from(70_000i64).get(), 4_464);
        assert_eq!(LedIndex::from(-1i32).get(), 0xFFFF);
    }

    #[test]
    fn test_unsuffixed_literal_converts() {
        fn index(i: impl Into<LedIndex>) -> u16 {
            i.into().get()
        }
        assert_eq!(index(3), 3);
    }

    #[test]
    fn test_be_bytes_put_high_byte_first() {
        assert_eq!(LedIndex::new(0x0102).to_be_bytes(), [0x01, 0x02]);
    }
}
