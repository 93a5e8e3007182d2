//! Register packing
//!
//! Turns a register block into the raw byte stream it was transmitted as:
//! each register contributes its high byte then its low byte, in register order.

/// Pack registers into a big-endian byte stream (`2 * regs.len()` bytes)
///
/// ```rust
/// use voltage_regcodec::pack_registers;
///
/// assert_eq!(pack_registers(&[0x1234, 0x5678]), vec![0x12, 0x34, 0x56, 0x78]);
/// assert!(pack_registers(&[]).is_empty());
/// ```
pub fn pack_registers(regs: &[u16]) -> Vec<u8> {
    regs.iter().flat_map(|reg| reg.to_be_bytes()).collect()
}
