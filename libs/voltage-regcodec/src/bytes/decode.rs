//! Numeric decoding of register blocks
//!
//! Every decode follows the same pipeline: pack the registers into their
//! big-endian byte stream, reorder each group for the host, then read each
//! group with the host's native layout.
//!
//! The free functions use the process host order; `RegisterCodec` carries an
//! explicit host order and default conventions (usually from `CodecConfig`).

use tracing::debug;

use super::{host_endian, pack_registers, reorder_bytes, HostEndian, OrderingConvention};
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

// ============================================================================
// Native Reads
// ============================================================================

/// Fixed-width value that can be read from one reordered group
pub trait NativeValue: Sized + Copy {
    /// Bytes per value (4 or 8)
    const WIDTH: usize;

    /// Interpret `bytes` (exactly `WIDTH` long) in `host` layout
    fn read(bytes: &[u8], host: HostEndian) -> Self;
}

macro_rules! impl_native_value {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl NativeValue for $ty {
                const WIDTH: usize = $width;

                #[inline]
                fn read(bytes: &[u8], host: HostEndian) -> Self {
                    let mut buf = [0u8; $width];
                    buf.copy_from_slice(bytes);
                    match host {
                        HostEndian::Little => <$ty>::from_le_bytes(buf),
                        HostEndian::Big => <$ty>::from_be_bytes(buf),
                    }
                }
            }
        )*
    };
}

impl_native_value!(f32 => 4, f64 => 8, i32 => 4, u32 => 4);

// ============================================================================
// Register Codec
// ============================================================================

/// Register decoder bound to a host byte order and default conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterCodec {
    host: HostEndian,
    default_32: OrderingConvention,
    default_64: OrderingConvention,
}

impl Default for RegisterCodec {
    fn default() -> Self {
        Self::new(host_endian())
    }
}

impl RegisterCodec {
    /// Codec for `host` with ABCD / ABCDEFGH defaults
    pub const fn new(host: HostEndian) -> Self {
        Self {
            host,
            default_32: OrderingConvention::DEFAULT_32,
            default_64: OrderingConvention::DEFAULT_64,
        }
    }

    /// Build a codec from loaded configuration
    ///
    /// Fails if a configured default belongs to the wrong family.
    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            host: config.host_endian.unwrap_or_else(host_endian),
            default_32: config.default_32,
            default_64: config.default_64,
        })
    }

    pub fn host(&self) -> HostEndian {
        self.host
    }

    pub fn default_32(&self) -> OrderingConvention {
        self.default_32
    }

    pub fn default_64(&self) -> OrderingConvention {
        self.default_64
    }

    /// Decode every group of `regs` as `T`
    ///
    /// # Errors
    /// `CodecError::InvalidArgument` if `order` has a different group width
    /// than `T`, or the register count does not fill whole groups.
    pub fn decode_multi<T: NativeValue>(
        &self,
        regs: &[u16],
        order: OrderingConvention,
    ) -> Result<Vec<T>> {
        if order.group_size() != T::WIDTH {
            return Err(CodecError::invalid_argument(format!(
                "{} uses {}-byte groups, value needs {}",
                order,
                order.group_size(),
                T::WIDTH
            )));
        }

        let bytes = reorder_bytes(&pack_registers(regs), order, self.host)?;
        debug!(
            "Decoding {} registers as {} values ({})",
            regs.len(),
            bytes.len() / T::WIDTH,
            order
        );

        Ok(bytes
            .chunks_exact(T::WIDTH)
            .map(|group| T::read(group, self.host))
            .collect())
    }

    /// Decode only the first group of `regs`; later registers are ignored
    /// once they pass validation.
    pub fn decode_first<T: NativeValue>(
        &self,
        regs: &[u16],
        order: OrderingConvention,
    ) -> Result<T> {
        self.decode_multi(regs, order)?
            .first()
            .copied()
            .ok_or_else(|| CodecError::invalid_argument("no complete value in register block"))
    }

    /// `None` selects the codec's 64-bit default (ABCDEFGH unless configured)
    pub fn decode_multi_f64(
        &self,
        regs: &[u16],
        order: Option<OrderingConvention>,
    ) -> Result<Vec<f64>> {
        self.decode_multi(regs, order.unwrap_or(self.default_64))
    }

    pub fn decode_f64(&self, regs: &[u16], order: Option<OrderingConvention>) -> Result<f64> {
        self.decode_first(regs, order.unwrap_or(self.default_64))
    }

    /// `None` selects the codec's 32-bit default (ABCD unless configured)
    pub fn decode_multi_f32(
        &self,
        regs: &[u16],
        order: Option<OrderingConvention>,
    ) -> Result<Vec<f32>> {
        self.decode_multi(regs, order.unwrap_or(self.default_32))
    }

    pub fn decode_f32(&self, regs: &[u16], order: Option<OrderingConvention>) -> Result<f32> {
        self.decode_first(regs, order.unwrap_or(self.default_32))
    }

    pub fn decode_multi_i32(
        &self,
        regs: &[u16],
        order: Option<OrderingConvention>,
    ) -> Result<Vec<i32>> {
        self.decode_multi(regs, order.unwrap_or(self.default_32))
    }

    pub fn decode_i32(&self, regs: &[u16], order: Option<OrderingConvention>) -> Result<i32> {
        self.decode_first(regs, order.unwrap_or(self.default_32))
    }

    pub fn decode_multi_u32(
        &self,
        regs: &[u16],
        order: Option<OrderingConvention>,
    ) -> Result<Vec<u32>> {
        self.decode_multi(regs, order.unwrap_or(self.default_32))
    }

    pub fn decode_u32(&self, regs: &[u16], order: Option<OrderingConvention>) -> Result<u32> {
        self.decode_first(regs, order.unwrap_or(self.default_32))
    }
}

// ============================================================================
// Process-Host Convenience Functions
// ============================================================================

/// Decode 4-register groups as f64 (ABCDEFGH is the usual choice)
pub fn decode_multi_f64(regs: &[u16], order: OrderingConvention) -> Result<Vec<f64>> {
    RegisterCodec::default().decode_multi(regs, order)
}

pub fn decode_f64(regs: &[u16], order: OrderingConvention) -> Result<f64> {
    RegisterCodec::default().decode_first(regs, order)
}

/// Decode 2-register groups as f32 (ABCD is the usual choice)
pub fn decode_multi_f32(regs: &[u16], order: OrderingConvention) -> Result<Vec<f32>> {
    RegisterCodec::default().decode_multi(regs, order)
}

pub fn decode_f32(regs: &[u16], order: OrderingConvention) -> Result<f32> {
    RegisterCodec::default().decode_first(regs, order)
}

pub fn decode_multi_i32(regs: &[u16], order: OrderingConvention) -> Result<Vec<i32>> {
    RegisterCodec::default().decode_multi(regs, order)
}

pub fn decode_i32(regs: &[u16], order: OrderingConvention) -> Result<i32> {
    RegisterCodec::default().decode_first(regs, order)
}

pub fn decode_multi_u32(regs: &[u16], order: OrderingConvention) -> Result<Vec<u32>> {
    RegisterCodec::default().decode_multi(regs, order)
}

pub fn decode_u32(regs: &[u16], order: OrderingConvention) -> Result<u32> {
    RegisterCodec::default().decode_first(regs, order)
}

/// Single register as unsigned 16-bit value
#[inline]
pub fn decode_u16(reg: u16) -> u16 {
    reg
}

/// Single register as signed 16-bit value (two's complement)
#[inline]
pub fn decode_i16(reg: u16) -> i16 {
    reg as i16
}

/// Text block: each packed byte becomes one char, no reordering
///
/// Bytes above 0x7F map to the char with the same code point, so the result
/// always has `2 * regs.len()` chars.
pub fn decode_ascii(regs: &[u16]) -> String {
    pack_registers(regs).into_iter().map(char::from).collect()
}
