//! Host byte order
//!
//! The byte-order transformer needs to know how the machine that performs the
//! final multi-byte read lays out its integers. The real host order is fixed at
//! compile time; it is cached once in a process-wide `OnceLock` and never
//! written again, so it can be read from any thread. Every operation also takes
//! the order as an explicit value so both layouts can be exercised on any host.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Native byte order of the machine that interprets the reordered bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostEndian {
    /// Least significant byte first (x86, most ARM targets)
    Little,
    /// Most significant byte first
    Big,
}

static HOST_ENDIAN: OnceLock<HostEndian> = OnceLock::new();

/// Byte order of the running process, computed on first use
pub fn host_endian() -> HostEndian {
    *HOST_ENDIAN.get_or_init(HostEndian::native)
}

impl HostEndian {
    /// Byte order this binary was compiled for
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }

    #[inline]
    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::Little)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl From<bool> for HostEndian {
    /// `true` means little-endian
    fn from(is_little_endian: bool) -> Self {
        if is_little_endian {
            Self::Little
        } else {
            Self::Big
        }
    }
}

impl fmt::Display for HostEndian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
