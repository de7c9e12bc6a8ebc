// felicard/src/card/mod.rs

mod info;
pub use info::CardInfo;

/// E-money card wrapper.
pub mod emoney;
pub mod profile;
/// Generic profile-driven reader.
pub mod reader;
/// Transit card wrapper.
pub mod transit;

/// Async reader.
#[cfg(feature = "async")]
pub mod async_reader;

#[cfg(feature = "async")]
pub use async_reader::AsyncCardReader;
pub use emoney::EmoneyCard;
pub use profile::{EMONEY, Profile, RecordKind, ServiceEntry, TRANSIT};
pub use reader::CardReader;
pub use transit::TransitCard;
