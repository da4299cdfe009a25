#![no_main]

use libfuzzer_sys::fuzz_target;
use netsum::{internet_checksum, udp_checksum};
use std::net::Ipv4Addr;

// Fuzz target for the UDP checksum
// The segmented sum must agree with a flat sum over the same bytes

fuzz_target!(|data: &[u8]| {
    // Need 12 bytes for addresses and ports
    if data.len() < 12 {
        return;
    }

    let src = Ipv4Addr::new(data[0], data[1], data[2], data[3]);
    let dst = Ipv4Addr::new(data[4], data[5], data[6], data[7]);
    let src_port = u16::from_be_bytes([data[8], data[9]]);
    let dst_port = u16::from_be_bytes([data[10], data[11]]);
    let payload = &data[12..];
    let length = (8 + payload.len()) as u16;

    let csum = udp_checksum(src, dst, length, src_port, dst_port, payload);

    let mut flat = Vec::with_capacity(20 + payload.len() + 1);
    flat.extend_from_slice(&src.octets());
    flat.extend_from_slice(&dst.octets());
    flat.extend_from_slice(&[0, 17]);
    flat.extend_from_slice(&length.to_be_bytes());
    flat.extend_from_slice(&src_port.to_be_bytes());
    flat.extend_from_slice(&dst_port.to_be_bytes());
    flat.extend_from_slice(&length.to_be_bytes());
    flat.extend_from_slice(&[0, 0]);
    flat.extend_from_slice(payload);
    if flat.len() % 2 == 1 {
        flat.push(0);
    }

    assert_eq!(csum, internet_checksum(&flat).expect("padded to even length"));
});
