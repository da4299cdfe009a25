use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use netsum_common::IPV4_HDR_LEN;

use crate::error::{NetsumError, Result};
use crate::hex;
use crate::shift::Direction;

/// Inputs for the demo runs of each routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetsumConfig {
    /// IPv4 header checksum input
    pub ipv4: Ipv4DemoConfig,
    /// Hex shift input
    pub shift: ShiftDemoConfig,
    /// UDP checksum input
    pub udp: UdpDemoConfig,
}

/// IPv4 header checksum demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipv4DemoConfig {
    /// 20-byte header as hex
    pub header: String,
}

/// Hex shift demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDemoConfig {
    /// Value to shift, as hex
    pub data: String,
    /// Number of bits
    pub bits: usize,
    /// "left" or "right"
    pub direction: String,
}

/// UDP checksum demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UdpDemoConfig {
    pub source_ip: Ipv4Addr,
    pub dest_ip: Ipv4Addr,
    /// UDP header + payload length as carried on the wire
    pub length: u16,
    pub source_port: u16,
    pub dest_port: u16,
    /// Payload bytes as hex
    pub payload: String,
}

impl Default for NetsumConfig {
    fn default() -> Self {
        Self {
            ipv4: Ipv4DemoConfig {
                header: "450000280000400040110000c0a80165c0a801ff".to_string(),
            },
            shift: ShiftDemoConfig {
                data: "D5FFFFFFFFFF3F10203004142408081400000D00400040009127C1800A50C6800AD03FC421C421002800C0BEAFDEEDBEAFDEEDBEAFDEEDBEAFDEEDBEAFDEEDBEAFDEADFA".to_string(),
                bits: 2,
                direction: "left".to_string(),
            },
            udp: UdpDemoConfig {
                source_ip: Ipv4Addr::new(192, 168, 1, 1),
                dest_ip: Ipv4Addr::new(192, 168, 1, 2),
                length: 16,
                source_port: 12345,
                dest_port: 80,
                // "hello world" plus three NUL bytes
                payload: "68656c6c6f20776f726c64000000".to_string(),
            },
        }
    }
}

impl NetsumConfig {
    /// Load configuration from file
    pub fn from_file(path: &str) -> std::result::Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(
                config::Environment::with_prefix("NETSUM")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let header = hex::decode(&self.ipv4.header)
            .map_err(|e| NetsumError::Config(format!("ipv4.header: {}", e)))?;
        if header.len() != IPV4_HDR_LEN {
            return Err(NetsumError::Config(format!(
                "ipv4.header must be {} bytes, got {}",
                IPV4_HDR_LEN,
                header.len()
            )));
        }

        hex::decode(&self.shift.data)
            .map_err(|e| NetsumError::Config(format!("shift.data: {}", e)))?;
        self.shift
            .direction
            .parse::<Direction>()
            .map_err(|e| NetsumError::Config(format!("shift.direction: {}", e)))?;

        // An empty payload is allowed, so only reject non-hex text
        if !self.udp.payload.trim().is_empty() {
            hex::decode(&self.udp.payload)
                .map_err(|e| NetsumError::Config(format!("udp.payload: {}", e)))?;
        }

        Ok(())
    }

    /// Decoded UDP payload bytes
    pub fn udp_payload(&self) -> Result<Vec<u8>> {
        if self.udp.payload.trim().is_empty() {
            return Ok(Vec::new());
        }
        hex::decode(&self.udp.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = NetsumConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.udp_payload().unwrap(), b"hello world\x00\x00\x00".to_vec());
    }

    #[test]
    fn test_validation_failures() {
        let mut config = NetsumConfig::default();
        config.ipv4.header = "4500".to_string();
        assert!(matches!(config.validate(), Err(NetsumError::Config(_))));

        let mut config = NetsumConfig::default();
        config.shift.direction = "sideways".to_string();
        assert!(matches!(config.validate(), Err(NetsumError::Config(_))));

        let mut config = NetsumConfig::default();
        config.udp.payload = "not hex".to_string();
        assert!(matches!(config.validate(), Err(NetsumError::Config(_))));
    }

    #[test]
    fn test_empty_payload() {
        let mut config = NetsumConfig::default();
        config.udp.payload = String::new();
        assert!(config.validate().is_ok());
        assert!(config.udp_payload().unwrap().is_empty());
    }
}
