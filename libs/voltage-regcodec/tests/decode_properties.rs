//! Register Decoding Property Tests
//!
//! End-to-end checks through the public API:
//! - Packing layout for arbitrary register blocks
//! - Host independence of every ordering convention
//! - Validation failures and first-value convenience decoders
//! - CRC16 reference vectors

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use voltage_regcodec::{
    crc16_modbus, crc16_modbus_prefix, crc16_modbus_range, decode_ascii, decode_f32, decode_f64,
    decode_multi_f32, decode_multi_f64, decode_multi_u32, pack_registers, reorder_bytes, HostEndian,
    OrderingConvention, RegisterCodec,
};

fn float_regs(values: &[f32]) -> Vec<u16> {
    pack_be(values.iter().flat_map(|v| v.to_be_bytes()))
}

fn pack_be(bytes: impl IntoIterator<Item = u8>) -> Vec<u16> {
    let bytes: Vec<u8> = bytes.into_iter().collect();
    bytes
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

// ============================================================================
// Register Packer
// ============================================================================

proptest! {
    #[test]
    fn prop_pack_layout(regs in prop::collection::vec(any::<u16>(), 1..64)) {
        let bytes = pack_registers(&regs);
        prop_assert_eq!(bytes.len(), regs.len() * 2);
        for (i, reg) in regs.iter().enumerate() {
            prop_assert_eq!(bytes[2 * i], (reg >> 8) as u8);
            prop_assert_eq!(bytes[2 * i + 1], (reg & 0xFF) as u8);
        }
    }

    #[test]
    fn prop_reorder_preserves_length_and_input(
        groups in 1usize..8,
        seed in any::<u64>(),
        index in 0usize..8,
    ) {
        let convention = OrderingConvention::ALL[index];
        let len = groups * convention.group_size();
        let raw: Vec<u8> = (0..len).map(|i| (seed >> (i % 8 * 8)) as u8 ^ i as u8).collect();
        let snapshot = raw.clone();

        for host in [HostEndian::Little, HostEndian::Big] {
            let out = reorder_bytes(&raw, convention, host).unwrap();
            prop_assert_eq!(out.len(), raw.len());
            prop_assert_eq!(&raw, &snapshot);
        }
    }

    #[test]
    fn prop_u32_host_independent(regs in prop::collection::vec(any::<u16>(), 1..16), index in 0usize..4) {
        let regs: Vec<u16> = regs.iter().chain(regs.iter()).copied().collect();
        let convention = OrderingConvention::ALL[index];
        let little = RegisterCodec::new(HostEndian::Little).decode_multi_u32(&regs, Some(convention)).unwrap();
        let big = RegisterCodec::new(HostEndian::Big).decode_multi_u32(&regs, Some(convention)).unwrap();
        prop_assert_eq!(little.len(), regs.len() / 2);
        prop_assert_eq!(little, big);
    }

    #[test]
    fn prop_f64_host_independent(bits in any::<[u16; 4]>(), index in 0usize..2) {
        // Straight 64-bit layouts decode identically on either host
        let convention = [OrderingConvention::ABCDEFGH, OrderingConvention::HGFEDCBA][index];
        let little = RegisterCodec::new(HostEndian::Little).decode_f64(&bits, Some(convention)).unwrap();
        let big = RegisterCodec::new(HostEndian::Big).decode_f64(&bits, Some(convention)).unwrap();
        prop_assert_eq!(little.to_bits(), big.to_bits());
    }

    #[test]
    fn prop_abcd_f32_roundtrip(values in prop::collection::vec(any::<f32>(), 1..16)) {
        let decoded = decode_multi_f32(&float_regs(&values), OrderingConvention::ABCD).unwrap();
        let expected: Vec<u32> = values.iter().map(|v| v.to_bits()).collect();
        let actual: Vec<u32> = decoded.iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Byte-Order Transformer
// ============================================================================

#[test]
fn test_dcba_little_endian_is_identity() {
    let raw = [0x11, 0x22, 0x33, 0x44];
    let out = reorder_bytes(&raw, OrderingConvention::DCBA, HostEndian::Little).unwrap();
    assert_eq!(out, raw);
}

#[test]
fn test_abcd_little_endian_twice_restores() {
    let raw = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
    let once = reorder_bytes(&raw, OrderingConvention::ABCD, HostEndian::Little).unwrap();
    assert_eq!(once, [0x44, 0x33, 0x22, 0x11, 0x88, 0x77, 0x66, 0x55]);

    let twice = reorder_bytes(&once, OrderingConvention::ABCD, HostEndian::Little).unwrap();
    assert_eq!(twice, raw);
}

#[test]
fn test_reorder_rejects_bad_lengths() {
    for host in [HostEndian::Little, HostEndian::Big] {
        for convention in OrderingConvention::ALL {
            let err = reorder_bytes(&[], convention, host).unwrap_err();
            assert!(err.is_invalid_argument(), "empty buffer for {convention}");
        }
        assert!(reorder_bytes(&[0; 5], OrderingConvention::ABCD, host)
            .unwrap_err()
            .is_invalid_argument());
        assert!(reorder_bytes(&[0; 12], OrderingConvention::HGFEDCBA, host)
            .unwrap_err()
            .is_invalid_argument());
    }
}

// ============================================================================
// Numeric Decoder
// ============================================================================

#[test]
fn test_multi_f32_abcd_roundtrip() {
    let regs = float_regs(&[3.5, -0.125]);
    assert_eq!(regs.len(), 4);
    assert_eq!(
        decode_multi_f32(&regs, OrderingConvention::ABCD).unwrap(),
        vec![3.5, -0.125]
    );
}

#[test]
fn test_singular_decoders_take_first_group() {
    let regs = float_regs(&[3.5, -0.125]);
    assert_eq!(decode_f32(&regs, OrderingConvention::ABCD).unwrap(), 3.5);

    let doubles = pack_be([1.0f64, 2.0f64].iter().flat_map(|v| v.to_be_bytes()));
    assert_eq!(decode_f64(&doubles, OrderingConvention::ABCDEFGH).unwrap(), 1.0);
}

#[test]
fn test_multi_f64_groups() {
    let values = [1.5f64, -273.15, 1.0e300];
    let straight = pack_be(values.iter().flat_map(|v| v.to_be_bytes()));
    assert_eq!(straight.len(), 12);

    let decoded = decode_multi_f64(&straight, OrderingConvention::ABCDEFGH).unwrap();
    assert_eq!(decoded.len(), straight.len() / 4);
    assert_eq!(decoded, values);

    // HGFEDCBA: each value sent least significant byte first
    let reversed = pack_be(values.iter().flat_map(|v| v.to_le_bytes()));
    let decoded = decode_multi_f64(&reversed, OrderingConvention::HGFEDCBA).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded, values);
}

#[test]
fn test_word_swapped_device_layout() {
    // 0x12345678 transmitted low word first needs the word-swapping 32-bit convention
    let regs = [0x5678, 0x1234];
    assert_eq!(
        decode_multi_u32(&regs, OrderingConvention::BADC).unwrap(),
        vec![0x1234_5678]
    );
}

#[test]
fn test_decode_ascii_text_block() {
    assert_eq!(decode_ascii(&[0x4142]), "AB");
    assert_eq!(decode_ascii(&[0x5356, 0x2D31]), "SV-1");
    assert_eq!(decode_ascii(&[0x4142, 0x4344]).len(), 4);
}

// ============================================================================
// Checksum Engine
// ============================================================================

#[test]
fn test_crc16_reference_frame() {
    let request = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
    assert_eq!(crc16_modbus(&request), (0xC5, 0xCD));
    assert_eq!(crc16_modbus_prefix(&request, request.len()), (0xC5, 0xCD));
    assert_eq!(crc16_modbus_range(&request, 0, request.len()), (0xC5, 0xCD));
}

#[test]
fn test_crc16_empty_range() {
    assert_eq!(crc16_modbus_range(&[], 0, 0), (0xFF, 0xFF));
}
