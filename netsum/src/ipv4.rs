// IPv4 header checksum
// RFC 791: one's complement of the one's complement sum of the header words,
// computed with the checksum field taken as zero

use netsum_common::{IPV4_CHECKSUM_OFFSET, IPV4_HDR_LEN};
use tracing::debug;

use crate::csum::Checksum;
use crate::error::{NetsumError, Result};

/// A complete, option-less IPv4 header.
///
/// Only the length is enforced. Version, IHL and every other field are carried
/// as-is; this type exists to checksum headers, not to parse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header([u8; IPV4_HDR_LEN]);

impl Ipv4Header {
    pub const fn new(bytes: [u8; IPV4_HDR_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IPV4_HDR_LEN] {
        &self.0
    }

    /// Checksum currently stored at offset 10
    pub fn stored_checksum(&self) -> u16 {
        u16::from_be_bytes([self.0[IPV4_CHECKSUM_OFFSET], self.0[IPV4_CHECKSUM_OFFSET + 1]])
    }

    /// Header checksum, ignoring whatever the checksum field holds
    pub fn checksum(&self) -> u16 {
        let mut zeroed = self.0;
        zeroed[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2].fill(0);

        let mut csum = Checksum::new();
        csum.add_padded(&zeroed);
        csum.finish()
    }

    /// Compute the checksum and write it into the checksum field
    pub fn fill_checksum(&mut self) -> u16 {
        let csum = self.checksum();
        self.0[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2].copy_from_slice(&csum.to_be_bytes());
        csum
    }

    /// Receiver-side check: summing the whole header, checksum included,
    /// must come out as zero
    pub fn is_valid(&self) -> bool {
        let mut csum = Checksum::new();
        csum.add_padded(&self.0);
        csum.finish() == 0
    }
}

impl From<[u8; IPV4_HDR_LEN]> for Ipv4Header {
    fn from(bytes: [u8; IPV4_HDR_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Ipv4Header {
    type Error = NetsumError;

    fn try_from(data: &[u8]) -> Result<Self> {
        let bytes: [u8; IPV4_HDR_LEN] = data.try_into().map_err(|_| {
            debug!(len = data.len(), "rejecting IPv4 header of wrong size");
            NetsumError::InvalidLength {
                expected: IPV4_HDR_LEN,
                actual: data.len(),
            }
        })?;
        Ok(Self(bytes))
    }
}

/// Checksum of a 20-byte IPv4 header.
///
/// The two bytes at offset 10 are treated as zero. Any other size fails with
/// [`NetsumError::InvalidLength`].
pub fn ipv4_header_checksum(header: &[u8]) -> Result<u16> {
    Ipv4Header::try_from(header).map(|header| header.checksum())
}
