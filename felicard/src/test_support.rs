//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the reply frames a card would send so tests
//! across the crate, the tests/ directory and the demos share one source.
#![allow(dead_code)]

use crate::card::{CardReader, Profile};
use crate::transport::MockTransceiver;

/// Polling reply carrying `idm`, a fixed PMm and no system code.
#[doc(hidden)]
pub fn polling_reply(idm: [u8; 8]) -> Vec<u8> {
    let mut raw = vec![0x00, 0x01];
    raw.extend_from_slice(&idm);
    raw.extend_from_slice(&[0x01, 0x20, 0x22, 0x04, 0x27, 0x67, 0x77, 0xff]);
    raw[0] = raw.len() as u8;
    raw
}

/// Successful ReadWithoutEncryption reply returning `blocks` in order.
///
/// Panics when the blocks cannot fit in one frame (more than 15).
#[doc(hidden)]
pub fn read_reply(idm: [u8; 8], blocks: &[[u8; 16]]) -> Vec<u8> {
    let mut raw = vec![0x00, 0x07];
    raw.extend_from_slice(&idm);
    raw.extend_from_slice(&[0x00, 0x00, blocks.len() as u8]);
    for b in blocks {
        raw.extend_from_slice(b);
    }
    raw[0] = u8::try_from(raw.len()).expect("read reply longer than one frame");
    raw
}

/// Bare ReadWithoutEncryption error reply (12 bytes).
#[doc(hidden)]
pub fn read_error_reply(idm: [u8; 8], status1: u8, status2: u8) -> Vec<u8> {
    let mut raw = vec![0x0c, 0x07];
    raw.extend_from_slice(&idm);
    raw.extend_from_slice(&[status1, status2]);
    raw
}

/// Usage-history block with the given fields; byte 1 stays zero.
#[doc(hidden)]
pub fn usage_history_block(
    usage_type: u8,
    running_number: u16,
    days: u16,
    seconds: u32,
    used_amount: i32,
    balance: i32,
) -> [u8; 16] {
    let packed = crate::records::PackedDateTime::new(days, seconds);
    let mut b = [0u8; 16];
    b[0] = usage_type;
    b[2..4].copy_from_slice(&running_number.to_be_bytes());
    b[4..8].copy_from_slice(&packed.raw().to_be_bytes());
    b[8..12].copy_from_slice(&used_amount.to_be_bytes());
    b[12..16].copy_from_slice(&balance.to_be_bytes());
    b
}

/// Reader for `profile` backed by a mock replaying `responses` in order.
#[doc(hidden)]
pub fn replay_reader(
    profile: &'static Profile,
    responses: Vec<Vec<u8>>,
) -> CardReader<MockTransceiver> {
    CardReader::new(MockTransceiver::with_responses(responses), profile)
}
