// felicard/src/protocol/responses/mod.rs

/// Polling reply.
pub mod polling;
/// ReadWithoutEncryption reply.
pub mod read;

pub use polling::{PollingResponse, decode_polling};
pub use read::{ReadWithoutEncryptionResponse, decode_read};

use crate::constants::{CMD_POLLING, CMD_READ_WITHOUT_ENCRYPTION};

/// Parse the raw frame returned by a ReadWithoutEncryption exchange.
///
/// Fewer than 12 bytes is a malformed frame (`Error::InvalidLength`). A
/// card-side refusal is not an error here: it comes back as a response
/// whose `is_success()` is false and whose block data is empty.
pub fn parse_read_without_encryption_response(
    raw: &[u8],
) -> crate::Result<ReadWithoutEncryptionResponse> {
    decode_read(raw)
}

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    /// Reply to Polling.
    Polling(PollingResponse),
    /// Reply to ReadWithoutEncryption.
    ReadWithoutEncryption(ReadWithoutEncryptionResponse),
}

impl Response {
    /// Decode a raw response frame for the given command code.
    pub fn decode(expected_cmd: u8, raw: &[u8]) -> crate::Result<Self> {
        match expected_cmd {
            CMD_POLLING => decode_polling(raw).map(Self::Polling),
            CMD_READ_WITHOUT_ENCRYPTION => decode_read(raw).map(Self::ReadWithoutEncryption),
            other => Err(crate::Error::UnsupportedOperation(format!(
                "no decoder for command {:#04x}",
                other
            ))),
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::Polling(_) => CMD_POLLING + 1,
            Response::ReadWithoutEncryption(_) => CMD_READ_WITHOUT_ENCRYPTION + 1,
        }
    }
}
