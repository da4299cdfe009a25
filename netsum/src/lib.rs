//! netsum Library
//!
//! This library provides the Internet checksum (RFC 1071), the IPv4 header and
//! UDP checksums built on it, and a bit shifter for hex-encoded values.

pub mod config;
pub mod csum;
pub mod error;
pub mod hex;
pub mod ipv4;
pub mod shift;
pub mod udp;

// Re-export commonly used types
pub use config::NetsumConfig;
pub use csum::{internet_checksum, Checksum};
pub use error::{NetsumError, Result};
pub use ipv4::{ipv4_header_checksum, Ipv4Header};
pub use shift::{shift_bytes, shift_hex, Direction};
pub use udp::{udp_checksum, wire_checksum};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routines_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Checksum>();
        assert_send_sync::<Ipv4Header>();
        assert_send_sync::<Direction>();
        assert_send_sync::<NetsumError>();
    }
}
