// felicard/src/prelude.rs

#[cfg(feature = "async")]
pub use crate::card::AsyncCardReader;
pub use crate::card::{CardInfo, CardReader, EmoneyCard, Profile, RecordKind, TransitCard};
pub use crate::protocol::{Command, ReadWithoutEncryptionResponse, Response};
pub use crate::records::{PackedDateTime, UsageHistory};
#[cfg(feature = "async")]
pub use crate::transport::AsyncTransceiver;
pub use crate::transport::Transceiver;
pub use crate::{
    AccessMode, BlockData, BlockElement, BlockList, Error, Idm, Pmm, Result, ServiceCode,
    SystemCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
