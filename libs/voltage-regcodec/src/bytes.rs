//! Register byte-stream processing
//!
//! Provides the decode pipeline for register-oriented field protocols:
//! registers → packed bytes → reordered bytes → typed values.
//!
//! # Design Principles
//!
//! - **Table-driven**: every (convention, host order) pair is an explicit index permutation
//! - **Non-mutating**: transforms return a fresh buffer, inputs are never modified
//! - **Host-explicit**: the host byte order is a parameter, cached once for the process

pub mod convention;
pub mod decode;
pub mod endian;
pub mod packer;
pub mod reorder;

pub use convention::{ConventionFamily, OrderingConvention};
pub use decode::*;
pub use endian::{host_endian, HostEndian};
pub use packer::pack_registers;
pub use reorder::{permutation, reorder_bytes, validate_len};
