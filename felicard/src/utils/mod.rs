//! Small helpers shared across the crate.

/// Hex formatting and parsing.
pub mod hex;

pub use hex::*;
