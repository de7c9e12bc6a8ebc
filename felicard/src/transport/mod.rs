// felicard/src/transport/mod.rs

/// Replaying mock transceiver.
pub mod mock;
/// Transceiver traits.
pub mod traits;

pub use mock::MockTransceiver;
#[cfg(feature = "async")]
pub use traits::AsyncTransceiver;
pub use traits::Transceiver;
