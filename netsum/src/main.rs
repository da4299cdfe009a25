use anyhow::{Context, Result};
use tracing::{info, warn};

use netsum::{hex, shift_hex, udp_checksum, Ipv4Header, NetsumConfig};

fn main() -> Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netsum=info".into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting netsum v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from file if available, otherwise use defaults
    let config = match NetsumConfig::from_file("config/default") {
        Ok(config) => {
            info!("Configuration loaded from config/default.toml");
            config
        }
        Err(e) => {
            warn!("Failed to load config file: {}, using defaults", e);
            NetsumConfig::default()
        }
    };
    config.validate().context("invalid demo configuration")?;

    let header_bytes = hex::decode(&config.ipv4.header).context("decoding ipv4.header")?;
    let header = Ipv4Header::try_from(header_bytes.as_slice())?;
    println!("Checksum: {:04x}", header.checksum());

    let shifted = shift_hex(&config.shift.data, config.shift.bits, &config.shift.direction)
        .context("shifting demo value")?;
    println!("{}", shifted);

    let payload = config.udp_payload().context("decoding udp.payload")?;
    let csum = udp_checksum(
        config.udp.source_ip,
        config.udp.dest_ip,
        config.udp.length,
        config.udp.source_port,
        config.udp.dest_port,
        &payload,
    );
    println!("UDP checksum: {:04x}", csum);

    Ok(())
}
