// felicard/src/lib.rs

//! felicard
//!
//! FeliCa transit (Suica class) and e-money (Edy class) card reading over an
//! opaque transceiver: command framing, response parsing and record
//! decoding.
#![warn(missing_docs)]

/// Card sessions: profiles, readers and per-family wrappers.
pub mod card;
/// Protocol constants.
pub mod constants;
/// Error type and `Result` alias.
pub mod error;
/// Common imports.
pub mod prelude;
/// Command framing and response parsing.
pub mod protocol;
/// Record decoders.
pub mod records;
/// Reply builders for tests and demos.
pub mod test_support;
/// Transceiver abstraction and mock.
pub mod transport;
/// Identifier and block-list types.
pub mod types;
/// Hex helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
