// felicard/src/protocol/commands/polling.rs

use crate::constants::{CMD_POLLING, POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOTS_16};
use crate::protocol::Frame;
use crate::types::SystemCode;

/// Encode a Polling command frame (FeliCa command code 0x00)
/// Layout: len(1) + command_code(1) + system_code(2, big-endian) + request_code(1) + time_slot(1)
pub fn encode_polling(system_code: SystemCode, request_code: u8, time_slot: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 2 + 1 + 1);
    buf.push(CMD_POLLING);
    buf.extend_from_slice(&system_code.to_be_bytes());
    buf.push(request_code);
    buf.push(time_slot);
    Frame::wrap(&buf)
}

/// Polling frame used by the card profiles: request the system code, 16 slots.
pub fn polling_frame(system_code: SystemCode) -> Vec<u8> {
    encode_polling(system_code, POLLING_REQUEST_SYSTEM_CODE, POLLING_TIME_SLOTS_16)
}
