// netsum Common - Wire layouts shared by the checksum routines
// This crate is no_std compatible so it can sit under any packet path

#![no_std]

/// Length of an IPv4 header without options
pub const IPV4_HDR_LEN: usize = 20;

/// Byte offset of the header checksum field inside an IPv4 header
pub const IPV4_CHECKSUM_OFFSET: usize = 10;

/// Length of a UDP header
pub const UDP_HDR_LEN: usize = 8;

/// Length of the IPv4 pseudo-header used by UDP/TCP checksums
pub const PSEUDO_HDR_LEN: usize = 12;

/// IP protocol number for UDP
pub const IPPROTO_UDP: u8 = 17;

/// IPv4 pseudo-header as it is fed into a transport checksum.
/// Never transmitted; it binds the checksum to the addressing context.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoHeader {
    /// Source address octets
    pub source: [u8; 4],
    /// Destination address octets
    pub destination: [u8; 4],
    /// Always zero
    pub zero: u8,
    /// Transport protocol number
    pub protocol: u8,
    /// Transport length (header + payload), host order
    pub length: u16,
}

impl PseudoHeader {
    pub const fn udp(source: [u8; 4], destination: [u8; 4], length: u16) -> Self {
        Self {
            source,
            destination,
            zero: 0,
            protocol: IPPROTO_UDP,
            length,
        }
    }

    /// Network byte order encoding
    pub fn to_bytes(&self) -> [u8; PSEUDO_HDR_LEN] {
        let mut buf = [0u8; PSEUDO_HDR_LEN];
        buf[0..4].copy_from_slice(&self.source);
        buf[4..8].copy_from_slice(&self.destination);
        buf[8] = self.zero;
        buf[9] = self.protocol;
        buf[10..12].copy_from_slice(&self.length.to_be_bytes());
        buf
    }
}

/// UDP header fields, host order
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub source_port: u16,
    pub dest_port: u16,
    /// Header + payload length as carried on the wire
    pub length: u16,
    pub checksum: u16,
}

impl UdpHeader {
    /// Header with the checksum placeholder zeroed
    pub const fn new(source_port: u16, dest_port: u16, length: u16) -> Self {
        Self {
            source_port,
            dest_port,
            length,
            checksum: 0,
        }
    }

    /// Network byte order encoding
    pub fn to_bytes(&self) -> [u8; UDP_HDR_LEN] {
        let mut buf = [0u8; UDP_HDR_LEN];
        buf[0..2].copy_from_slice(&self.source_port.to_be_bytes());
        buf[2..4].copy_from_slice(&self.dest_port.to_be_bytes());
        buf[4..6].copy_from_slice(&self.length.to_be_bytes());
        buf[6..8].copy_from_slice(&self.checksum.to_be_bytes());
        buf
    }
}
