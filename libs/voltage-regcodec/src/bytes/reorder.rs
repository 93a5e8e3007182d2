//! Byte-order transformer
//!
//! Rearranges a packed register stream, group by group, so that a native
//! multi-byte read on the given host reconstructs the value the device meant.
//!
//! Each (convention, host order) pair maps to a fixed index permutation:
//! output byte `i` of a group is input byte `perm[i]` of the same group.
//! On a little-endian host both 64-bit word-swapped conventions reverse the
//! whole group, the same as ABCDEFGH.

use tracing::{debug, warn};

use super::{HostEndian, OrderingConvention};
use crate::error::{CodecError, Result};

// ============================================================================
// Permutation Tables
// ============================================================================

const IDENTITY_4: [usize; 4] = [0, 1, 2, 3];
const REVERSE_4: [usize; 4] = [3, 2, 1, 0];
const SWAP_HALVES_4: [usize; 4] = [2, 3, 0, 1];
const SWAP_PAIR_BYTES_4: [usize; 4] = [1, 0, 3, 2];

const IDENTITY_8: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
const REVERSE_8: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const MIRROR_PAIRS_8: [usize; 8] = [6, 7, 4, 5, 2, 3, 0, 1];
const SWAP_PAIR_BYTES_8: [usize; 8] = [1, 0, 3, 2, 5, 4, 7, 6];

/// Permutation applied to each group for a convention on a given host
pub fn permutation(convention: OrderingConvention, host: HostEndian) -> &'static [usize] {
    use OrderingConvention::*;

    match (convention, host) {
        (ABCD, HostEndian::Little) => &REVERSE_4,
        (ABCD, HostEndian::Big) => &IDENTITY_4,
        (CDAB, HostEndian::Little) => &SWAP_HALVES_4,
        (CDAB, HostEndian::Big) => &SWAP_PAIR_BYTES_4,
        (BADC, HostEndian::Little) => &SWAP_PAIR_BYTES_4,
        (BADC, HostEndian::Big) => &SWAP_HALVES_4,
        (DCBA, HostEndian::Little) => &IDENTITY_4,
        (DCBA, HostEndian::Big) => &REVERSE_4,

        (ABCDEFGH, HostEndian::Little) => &REVERSE_8,
        (ABCDEFGH, HostEndian::Big) => &IDENTITY_8,
        (GHEFCDAB, HostEndian::Little) => &REVERSE_8,
        (GHEFCDAB, HostEndian::Big) => &MIRROR_PAIRS_8,
        (BADCFEHG, HostEndian::Little) => &REVERSE_8,
        (BADCFEHG, HostEndian::Big) => &SWAP_PAIR_BYTES_8,
        (HGFEDCBA, HostEndian::Little) => &IDENTITY_8,
        (HGFEDCBA, HostEndian::Big) => &REVERSE_8,
    }
}

// ============================================================================
// Validation and Transformation
// ============================================================================

/// Check that `len` bytes can be split into whole groups of `convention`
pub fn validate_len(len: usize, convention: OrderingConvention) -> Result<()> {
    let group = convention.group_size();

    if len == 0 {
        warn!("Rejecting empty buffer for {}", convention);
        return Err(CodecError::invalid_argument(format!(
            "buffer must not be empty for {}",
            convention
        )));
    }

    if len % group != 0 {
        warn!(
            "Rejecting {}-byte buffer for {}: not a multiple of {}",
            len, convention, group
        );
        return Err(CodecError::invalid_argument(format!(
            "buffer length {} is not a multiple of {} for {}",
            len, group, convention
        )));
    }

    Ok(())
}

/// Reorder `bytes` for a native read under `convention` on `host`
///
/// Returns a new buffer of the same length; the input is left untouched.
///
/// # Errors
/// `CodecError::InvalidArgument` if `bytes` is empty or its length is not a
/// multiple of the convention's group size.
///
/// ```rust
/// use voltage_regcodec::{reorder_bytes, HostEndian, OrderingConvention};
///
/// let raw = [0x12, 0x34, 0x56, 0x78];
/// let le = reorder_bytes(&raw, OrderingConvention::ABCD, HostEndian::Little).unwrap();
/// assert_eq!(u32::from_le_bytes([le[0], le[1], le[2], le[3]]), 0x12345678);
/// ```
pub fn reorder_bytes(
    bytes: &[u8],
    convention: OrderingConvention,
    host: HostEndian,
) -> Result<Vec<u8>> {
    validate_len(bytes.len(), convention)?;

    let perm = permutation(convention, host);
    debug!(
        "Reordering {} bytes as {} for {}-endian host",
        bytes.len(),
        convention,
        host
    );

    let mut out = Vec::with_capacity(bytes.len());
    for group in bytes.chunks_exact(perm.len()) {
        out.extend(perm.iter().map(|&src| group[src]));
    }
    Ok(out)
}
