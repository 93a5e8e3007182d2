//! regtool - register decoding from the command line
//!
//! Decodes register values copied from a poll log or device manual and
//! computes Modbus RTU checksums. Nothing is read from a device.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use voltage_regcodec::{CodecConfig, RegisterCodec};

#[derive(Parser)]
#[command(name = "regtool")]
#[command(about = "Decode field-bus registers and compute Modbus CRC16")]
#[command(version)]
struct Cli {
    /// YAML file with default conventions (default_32, default_64, host_endian)
    #[arg(short, long, global = true, env = "REGCODEC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode registers into typed values
    Decode {
        /// Value type to decode
        #[arg(short = 't', long = "type", value_enum)]
        value_type: ValueType,

        /// Ordering convention (ABCD, CDAB, ..., HGFEDCBA); configured default if omitted
        #[arg(short, long)]
        order: Option<String>,

        /// Register values, decimal or 0x-prefixed hex
        #[arg(required = true, value_parser = commands::parse_u16)]
        registers: Vec<u16>,
    },

    /// Compute the CRC16 of a byte sequence
    Crc {
        /// Index of the first byte to include
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Number of bytes to include (defaults to the rest of the input)
        #[arg(long)]
        length: Option<usize>,

        /// Byte values, decimal or 0x-prefixed hex
        #[arg(value_parser = commands::parse_u8)]
        bytes: Vec<u8>,
    },

    /// List supported ordering conventions
    Orders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    F32,
    F64,
    I32,
    U32,
    I16,
    U16,
    Ascii,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CodecConfig::load(cli.config.as_deref()).context("Failed to load codec config")?;
    let codec = RegisterCodec::from_config(&config)?;
    debug!(
        "Codec ready: host {}, defaults {} / {}",
        codec.host(),
        codec.default_32(),
        codec.default_64()
    );

    let lines = match cli.command {
        Commands::Decode {
            value_type,
            order,
            registers,
        } => commands::decode(&codec, value_type, order.as_deref(), &registers)?,
        Commands::Crc {
            start,
            length,
            bytes,
        } => vec![commands::crc(&bytes, start, length)?],
        Commands::Orders => commands::orders(),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
