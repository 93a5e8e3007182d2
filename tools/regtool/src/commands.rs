//! Command implementations, returning output lines

use anyhow::{bail, Context, Result};
use colored::*;
use voltage_regcodec::{
    crc16_modbus_checked, decode_ascii, decode_i16, decode_u16, OrderingConvention, RegisterCodec,
};

use crate::ValueType;

/// Parse a register value in decimal or `0x` hex
pub fn parse_u16(s: &str) -> Result<u16> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("invalid register value '{}'", s))
}

/// Parse a byte value in decimal or `0x` hex
pub fn parse_u8(s: &str) -> Result<u8> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("invalid byte value '{}'", s))
}

pub fn decode(
    codec: &RegisterCodec,
    value_type: ValueType,
    order: Option<&str>,
    regs: &[u16],
) -> Result<Vec<String>> {
    let order = order
        .map(str::parse::<OrderingConvention>)
        .transpose()?;

    let lines = match value_type {
        ValueType::F32 => to_lines(codec.decode_multi_f32(regs, order)?),
        ValueType::F64 => to_lines(codec.decode_multi_f64(regs, order)?),
        ValueType::I32 => to_lines(codec.decode_multi_i32(regs, order)?),
        ValueType::U32 => to_lines(codec.decode_multi_u32(regs, order)?),
        ValueType::I16 => regs.iter().map(|r| decode_i16(*r).to_string()).collect(),
        ValueType::U16 => regs.iter().map(|r| decode_u16(*r).to_string()).collect(),
        ValueType::Ascii => vec![decode_ascii(regs)],
    };
    Ok(lines)
}

fn to_lines<T: ToString>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

pub fn crc(bytes: &[u8], start: usize, length: Option<usize>) -> Result<String> {
    let length = match length {
        Some(length) => length,
        None => match bytes.len().checked_sub(start) {
            Some(rest) => rest,
            None => bail!("start {} is past the end of {} bytes", start, bytes.len()),
        },
    };

    let Some((low, high)) = crc16_modbus_checked(bytes, start, length) else {
        bail!(
            "range of {} bytes from {} exceeds {} bytes",
            length,
            start,
            bytes.len()
        );
    };
    Ok(format!("{:02X} {:02X}", low, high))
}

pub fn orders() -> Vec<String> {
    OrderingConvention::ALL
        .iter()
        .map(|order| {
            format!(
                "{} {}-byte group ({} registers)",
                format!("{:<10}", order.letters()).bold(),
                order.group_size(),
                order.group_size() / 2
            )
        })
        .collect()
}
