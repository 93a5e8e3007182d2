//! Modbus RTU CRC16
//!
//! Reflected CRC-16 with polynomial `0xA001` and initial value `0xFFFF`.
//! Results are returned as `(low, high)`, the order the two bytes are
//! appended to an RTU frame.

const CRC16_INIT: u16 = 0xFFFF;
const CRC16_POLY: u16 = 0xA001;

/// Raw 16-bit CRC accumulator over `data`
pub fn crc16_value(data: &[u8]) -> u16 {
    let mut crc = CRC16_INIT;

    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc >>= 1;
                crc ^= CRC16_POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

/// CRC of `length` bytes starting at `start`, as `(low, high)`
///
/// # Panics
/// If `start + length` exceeds `bytes.len()`, like slice indexing.
pub fn crc16_modbus_range(bytes: &[u8], start: usize, length: usize) -> (u8, u8) {
    let [low, high] = crc16_value(&bytes[start..start.saturating_add(length)]).to_le_bytes();
    (low, high)
}

/// Non-panicking `crc16_modbus_range`: `None` if the range leaves `bytes`
pub fn crc16_modbus_checked(bytes: &[u8], start: usize, length: usize) -> Option<(u8, u8)> {
    let end = start.checked_add(length)?;
    let [low, high] = crc16_value(bytes.get(start..end)?).to_le_bytes();
    Some((low, high))
}

/// CRC of the whole buffer, as `(low, high)`
///
/// ```rust
/// use voltage_regcodec::crc16_modbus;
///
/// assert_eq!(crc16_modbus(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x0A]), (0xC5, 0xCD));
/// ```
pub fn crc16_modbus(bytes: &[u8]) -> (u8, u8) {
    crc16_modbus_range(bytes, 0, bytes.len())
}

/// CRC of the first `length` bytes, as `(low, high)`
pub fn crc16_modbus_prefix(bytes: &[u8], length: usize) -> (u8, u8) {
    crc16_modbus_range(bytes, 0, length)
}
