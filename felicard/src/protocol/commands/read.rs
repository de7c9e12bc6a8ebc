// felicard/src/protocol/commands/read.rs

use crate::constants::{CMD_READ_WITHOUT_ENCRYPTION, MAX_BLOCK_LIST_LEN};
use crate::protocol::Frame;
use crate::types::{BlockList, Idm, ServiceCode};

/// Encode a ReadWithoutEncryption command frame (FeliCa command code 0x06)
/// for a single service.
/// Layout: len(1) + command_code(1) + idm(8) + service_count(1) = 1
///         + service_code(2, little-endian) + block_count(1) + block_list(n)
///
/// `block_list` is copied verbatim. A block list longer than a frame can
/// carry is a caller bug and panics; build a [`BlockList`] to have it
/// checked up front.
pub fn encode_read(idm: Idm, service: ServiceCode, block_count: u8, block_list: &[u8]) -> Vec<u8> {
    assert!(
        block_list.len() <= MAX_BLOCK_LIST_LEN,
        "block list of {} bytes exceeds {} bytes",
        block_list.len(),
        MAX_BLOCK_LIST_LEN
    );

    let mut buf = Vec::with_capacity(1 + 8 + 1 + 2 + 1 + block_list.len());
    buf.push(CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(0x01);
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(block_count);
    buf.extend_from_slice(block_list);
    Frame::wrap(&buf)
}

/// Typed front end for [`encode_read`].
pub fn read_frame(idm: Idm, service: ServiceCode, blocks: &BlockList) -> Vec<u8> {
    encode_read(idm, service, blocks.count(), blocks.as_bytes())
}
