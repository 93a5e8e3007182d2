//! Voltage Register Codec Library
//!
//! Decodes blocks of 16-bit field-bus registers into typed values and computes
//! the Modbus RTU CRC16 used to validate frames.
//!
//! # Architecture
//!
//! This library provides:
//! - **Register Packer**: registers → big-endian byte stream
//! - **Byte-Order Transformer**: table-driven permutation per ordering convention and host order
//! - **Numeric Decoder**: f32/f64/i32/u32/ASCII decoding on top of the transformer
//! - **Checksum Engine**: CRC16 (poly `0xA001`, init `0xFFFF`), low byte first
//!
//! No I/O happens here; transport layers hand in registers already read from a device.
//!
//! # Example
//!
//! ```rust
//! use voltage_regcodec::{decode_f32, OrderingConvention};
//!
//! // 25.0 in IEEE 754: 0x41C80000
//! let value = decode_f32(&[0x41C8, 0x0000], OrderingConvention::ABCD).unwrap();
//! assert_eq!(value, 25.0);
//! ```

pub mod bytes;
pub mod config;
pub mod crc;
pub mod error;

// Re-export core types
pub use bytes::{
    decode_ascii, decode_f32, decode_f64, decode_i16, decode_i32, decode_multi_f32,
    decode_multi_f64, decode_multi_i32, decode_multi_u32, decode_u16, decode_u32, host_endian,
    pack_registers, reorder_bytes, ConventionFamily, HostEndian, NativeValue,
    OrderingConvention, RegisterCodec,
};
pub use config::CodecConfig;
pub use crc::{
    crc16_modbus, crc16_modbus_checked, crc16_modbus_prefix, crc16_modbus_range, crc16_value,
};
pub use error::{CodecError, Result};
