// felicard/src/protocol/responses/read.rs

use crate::constants::{
    BLOCK_SIZE, CMD_READ_WITHOUT_ENCRYPTION, READ_RESPONSE_DATA_OFFSET, READ_RESPONSE_MIN_LEN,
};
use crate::protocol::parser;
use crate::types::{BlockData, Idm};
use crate::{Error, Result};

/// Parsed ReadWithoutEncryption reply.
///
/// `block_count` is only present when the card accepted the read. Without
/// it the reply is a bare error response and `block_data` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadWithoutEncryptionResponse {
    /// IDm echoed by the card.
    pub idm: Idm,
    /// ステータスフラグ1; zero on success.
    pub status_flag1: u8,
    /// ステータスフラグ2; error detail.
    pub status_flag2: u8,
    /// Block count, absent in a bare or error reply.
    pub block_count: Option<u8>,
    /// Concatenated block data.
    pub block_data: Vec<u8>,
}

impl ReadWithoutEncryptionResponse {
    /// Status flag 1 is zero and block data follows.
    pub fn is_success(&self) -> bool {
        self.status_flag1 == 0 && self.block_count.is_some()
    }

    /// Status flags as a card-reported error, if the read did not succeed.
    pub fn status_error(&self) -> Option<Error> {
        (!self.is_success()).then_some(Error::FelicaStatus {
            status1: self.status_flag1,
            status2: self.status_flag2,
        })
    }

    /// Block data, or `Error::FelicaStatus` when the card refused the read.
    pub fn into_block_data(self) -> Result<Vec<u8>> {
        match self.status_error() {
            Some(err) => Err(err),
            None => Ok(self.block_data),
        }
    }

    /// Returned blocks in card order.
    pub fn blocks(&self) -> Vec<BlockData> {
        self.block_data
            .chunks_exact(BLOCK_SIZE)
            .filter_map(|c| BlockData::try_from(c).ok())
            .collect()
    }
}

/// Decode a ReadWithoutEncryption response frame (response code = 0x07)
/// Layout: len(1) + response_code(1) + idm(8) + status1(1) + status2(1)
///         [+ block_count(1) + blocks(N*16) when status1 == 0]
pub fn decode_read(raw: &[u8]) -> Result<ReadWithoutEncryptionResponse> {
    parser::ensure_len(raw, READ_RESPONSE_MIN_LEN)?;
    parser::check_response_code(raw, CMD_READ_WITHOUT_ENCRYPTION + 1);

    let idm = parser::idm_at(raw, 2)?;
    let status_flag1 = parser::byte_at(raw, 10)?;
    let status_flag2 = parser::byte_at(raw, 11)?;

    let bare = ReadWithoutEncryptionResponse {
        idm,
        status_flag1,
        status_flag2,
        block_count: None,
        block_data: Vec::new(),
    };

    // Error replies may carry stale bytes after the status flags.
    if status_flag1 != 0 || raw.len() == READ_RESPONSE_MIN_LEN {
        return Ok(bare);
    }

    let block_count = parser::byte_at(raw, READ_RESPONSE_DATA_OFFSET - 1)?;
    let data_len = block_count as usize * BLOCK_SIZE;
    let block_data = parser::slice_at(raw, READ_RESPONSE_DATA_OFFSET, data_len)?.to_vec();

    Ok(ReadWithoutEncryptionResponse {
        block_count: Some(block_count),
        block_data,
        ..bare
    })
}
