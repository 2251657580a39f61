//! `mb-cache` - Cache topology probe and block-size policy for matmul-bench.
//!
//! This crate provides:
//! - A `CacheTopology` value describing the host's L1 data cache, with a
//!   signed "-1 = unknown" convention
//! - A pure policy function deriving a cache-line-aligned tile edge
//!   length from that topology

pub mod policy;
pub mod topology;

// Re-export primary types at the crate root for convenience.
pub use policy::{block_size, FALLBACK_BLOCK, RESIDENT_MATRICES};
pub use topology::{CacheTopology, UNKNOWN};
