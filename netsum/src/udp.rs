// UDP checksum over the IPv4 pseudo-header, UDP header and payload

use std::net::Ipv4Addr;

use netsum_common::{PseudoHeader, UdpHeader, UDP_HDR_LEN};
use tracing::debug;

use crate::csum::Checksum;

/// Compute the UDP checksum for an IPv4 datagram.
///
/// `udp_length` is the header + payload size exactly as it would appear on the
/// wire; it goes into both the pseudo-header and the UDP header and is not
/// checked against `payload`. An odd-sized datagram is summed as if one zero
/// byte followed the payload.
///
/// The arithmetic result is returned unchanged, including `0x0000`. Use
/// [`wire_checksum`] before transmitting.
pub fn udp_checksum(
    source_ip: Ipv4Addr,
    dest_ip: Ipv4Addr,
    udp_length: u16,
    source_port: u16,
    dest_port: u16,
    payload: &[u8],
) -> u16 {
    if UDP_HDR_LEN + payload.len() != udp_length as usize {
        debug!(
            udp_length,
            actual = UDP_HDR_LEN + payload.len(),
            "UDP length field does not match datagram size"
        );
    }

    let pseudo = PseudoHeader::udp(source_ip.octets(), dest_ip.octets(), udp_length);
    let header = UdpHeader::new(source_port, dest_port, udp_length);

    let mut csum = Checksum::new();
    csum.add_padded(&pseudo.to_bytes());
    csum.add_padded(&header.to_bytes());
    csum.add_padded(payload);
    csum.finish()
}

/// UDP checksum of 0 means "no checksum", so a computed 0 goes out as 0xFFFF
pub fn wire_checksum(csum: u16) -> u16 {
    if csum == 0 {
        0xFFFF
    } else {
        csum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csum::internet_checksum;

    #[test]
    fn test_reference_datagram() {
        let csum = udp_checksum(
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(192, 168, 1, 2),
            16,
            12345,
            80,
            b"hello world\x00\x00\x00",
        );
        assert_eq!(csum, 0xba22);
    }

    #[test]
    fn test_matches_concatenated_buffer() {
        let src = Ipv4Addr::new(10, 0, 0, 1);
        let dst = Ipv4Addr::new(10, 0, 0, 2);
        let payload = b"hello";

        let mut buf = Vec::new();
        buf.extend_from_slice(&PseudoHeader::udp(src.octets(), dst.octets(), 13).to_bytes());
        buf.extend_from_slice(&UdpHeader::new(53, 5353, 13).to_bytes());
        buf.extend_from_slice(payload);
        buf.push(0);

        assert_eq!(
            udp_checksum(src, dst, 13, 53, 5353, payload),
            internet_checksum(&buf).unwrap()
        );
        assert_eq!(udp_checksum(src, dst, 13, 53, 5353, payload), 0x92e1);
    }

    #[test]
    fn test_empty_payload() {
        let csum = udp_checksum(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2), 8, 1, 2, &[]);
        assert_eq!(csum, 0xebd8);
    }

    #[test]
    fn test_wire_checksum() {
        assert_eq!(wire_checksum(0), 0xFFFF);
        assert_eq!(wire_checksum(0xba22), 0xba22);
        assert_eq!(wire_checksum(0xFFFF), 0xFFFF);
    }
}
