// Internet checksum (RFC 1071)
// 16-bit one's complement sum with end-around carry, then complemented

use byteorder::{ByteOrder, NetworkEndian};
use tracing::{debug, trace};

use crate::error::{NetsumError, Result};

/// Running one's complement sum.
///
/// The accumulator is folded back into 16 bits after every word, so any number
/// of segments can be added in sequence and the result is identical to summing
/// their concatenation, as long as each segment starts on a word boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    sum: u32,
}

impl Checksum {
    pub const fn new() -> Self {
        Self { sum: 0 }
    }

    /// Add one big-endian 16-bit word
    #[inline]
    pub fn add_word(&mut self, word: u16) {
        self.sum += word as u32;
        self.sum = fold(self.sum);
    }

    /// Add an even-length byte sequence as 16-bit words
    pub fn add_bytes(&mut self, data: &[u8]) -> Result<()> {
        if data.len() % 2 != 0 {
            debug!(len = data.len(), "rejecting odd-length checksum input");
            return Err(NetsumError::OddLength(data.len()));
        }

        for word in data.chunks_exact(2) {
            self.add_word(NetworkEndian::read_u16(word));
        }
        Ok(())
    }

    /// Add a byte sequence, treating a trailing odd byte as if followed by zero.
    /// The pad byte only exists for the sum; nothing is written anywhere.
    pub fn add_padded(&mut self, data: &[u8]) {
        let mut words = data.chunks_exact(2);
        for word in &mut words {
            self.add_word(NetworkEndian::read_u16(word));
        }
        if let [last] = words.remainder() {
            self.add_word((*last as u16) << 8);
        }
    }

    /// Final fold and one's complement
    pub fn finish(self) -> u16 {
        let sum = fold(self.sum);
        trace!("checksum folded to {:#06x}", sum);
        !(sum as u16)
    }
}

/// Fold carries above bit 15 back into the low 16 bits
#[inline(always)]
fn fold(mut sum: u32) -> u32 {
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    sum
}

/// Internet checksum of an even-length buffer.
///
/// An all-zero buffer yields `0xFFFF` (the complement of zero), never `0x0000`.
/// Callers with an odd logical length must pad one zero byte first.
pub fn internet_checksum(data: &[u8]) -> Result<u16> {
    let mut csum = Checksum::new();
    csum.add_bytes(data)?;
    Ok(csum.finish())
}
