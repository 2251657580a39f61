//! `mb-matrix` - Dense integer matrix storage for matmul-bench.
//!
//! This crate provides:
//! - A row-major `Matrix` of `i32` whose row stride is padded to
//!   cache-line boundaries (optional)
//! - Entropy-based and seeded uniform fill in `[0, 99]`
//! - The `MatrixError` type shared across the workspace

pub mod error;
pub mod matrix;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, ALIGN_ELEMS, CACHE_LINE_BYTES};
