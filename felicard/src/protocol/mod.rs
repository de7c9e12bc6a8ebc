// felicard/src/protocol/mod.rs

/// Command encoders.
pub mod commands;
/// Length prefix.
pub mod frame;
/// Bounds-checked field readers.
pub mod parser;
/// Response decoders.
pub mod responses;

pub use commands::*;
pub use frame::Frame;
pub use responses::*;
