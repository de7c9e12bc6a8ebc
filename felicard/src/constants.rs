// felicard/src/constants.rs
//! Common protocol constants used across the crate

/// Size of one FeliCa data block in bytes
pub const BLOCK_SIZE: usize = 16;

/// Length byte is a single octet that counts itself
pub const MAX_FRAME_LEN: usize = 255;

/// Polling command code
pub const CMD_POLLING: u8 = 0x00;
/// ReadWithoutEncryption command code
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// Polling request code asking the card to append its system code
pub const POLLING_REQUEST_SYSTEM_CODE: u8 = 0x01;

/// Polling time slot value allowing 16 response slots
pub const POLLING_TIME_SLOTS_16: u8 = 0x0f;

/// len(1) + code(1) + idm(8) + service count(1) + service code(2) + block count(1)
pub const READ_COMMAND_HEADER_LEN: usize = 14;

/// Largest block list that still fits in a single read command frame
pub const MAX_BLOCK_LIST_LEN: usize = MAX_FRAME_LEN - READ_COMMAND_HEADER_LEN;

/// len(1) + code(1) + idm(8) + status1(1) + status2(1); a bare error reply
pub const READ_RESPONSE_MIN_LEN: usize = 12;

/// Offset of the first block once the block count byte is present
pub const READ_RESPONSE_DATA_OFFSET: usize = 13;

/// Most blocks one read reply can carry under the one-byte length prefix
pub const MAX_BLOCKS_PER_READ: usize = (MAX_FRAME_LEN - READ_RESPONSE_DATA_OFFSET) / BLOCK_SIZE;
