#![forbid(unsafe_code)]

//! Matrix Kernel
//!
//! Row-major 2D grid container with a symmetric specialization.
//! Bounds and dimensions are validated on every access; no cell is
//! written when an operation fails.

/// Canonical fingerprint format. Part of every canonical hash.
pub const FORMAT_VERSION: u32 = 1;

pub mod error;
pub mod limits;
pub mod matrix;
pub mod cells;
pub mod symmetric;
pub mod invariants;
pub mod hashing;
