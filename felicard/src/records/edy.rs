// felicard/src/records/edy.rs
//! E-money (Edy class) record decoders.
//!
//! Only the usage history has a structured decoder; attribute and balance
//! blocks are handed to callers as raw bytes.

use chrono::NaiveDateTime;

use crate::constants::BLOCK_SIZE;
use crate::protocol::parser;
use crate::records::timestamp::PackedDateTime;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One usage-history entry (service 0x170f).
///
/// Block layout, big-endian fields:
/// usage_type(1) + reserved(1) + running_number(2) + used_at(4, packed)
/// + used_amount(4) + balance(4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsageHistory {
    /// 利用区分
    pub usage_type: u8,
    /// 連番
    pub running_number: u16,
    /// When the transaction happened.
    pub used_at: NaiveDateTime,
    /// Amount of the transaction in card units, unscaled.
    pub used_amount: i32,
    /// Balance left on the card after the transaction.
    pub balance: i32,
    raw: [u8; BLOCK_SIZE],
}

impl UsageHistory {
    /// The block this entry was decoded from.
    pub fn raw(&self) -> &[u8; BLOCK_SIZE] {
        &self.raw
    }

    fn from_block(block: &[u8]) -> Result<Self> {
        let raw: [u8; BLOCK_SIZE] = parser::slice_at(block, 0, BLOCK_SIZE)?
            .try_into()
            .map_err(|_| Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: block.len(),
            })?;

        Ok(Self {
            usage_type: raw[0],
            running_number: parser::be_u16_at(&raw, 2)?,
            used_at: PackedDateTime::from_raw(parser::be_u32_at(&raw, 4)?).to_datetime(),
            used_amount: parser::be_i32_at(&raw, 8)?,
            balance: parser::be_i32_at(&raw, 12)?,
            raw,
        })
    }
}

/// Decode the first usage-history entry of a read.
///
/// An empty read (new or unused card) is `Ok(None)`, not an error. Fewer
/// than 16 bytes is a malformed block.
pub fn decode_usage_history(data: &[u8]) -> Result<Option<UsageHistory>> {
    if data.is_empty() {
        return Ok(None);
    }
    UsageHistory::from_block(data).map(Some)
}

/// Decode every complete block of a multi-block history read, in card order.
/// A trailing partial block is ignored.
pub fn decode_usage_histories(data: &[u8]) -> Result<Vec<UsageHistory>> {
    data.chunks_exact(BLOCK_SIZE)
        .map(UsageHistory::from_block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_block() -> [u8; 16] {
        let mut b = [0u8; 16];
        b[0] = 0x02;
        b[2..4].copy_from_slice(&1u16.to_be_bytes());
        b[4..8].copy_from_slice(&((100u32 << 17) + 3600).to_be_bytes());
        b[8..12].copy_from_slice(&400i32.to_be_bytes());
        b[12..16].copy_from_slice(&3000i32.to_be_bytes());
        b
    }

    #[test]
    fn decode_sample_entry() {
        let h = decode_usage_history(&sample_block()).unwrap().unwrap();
        assert_eq!(h.usage_type, 2);
        assert_eq!(h.running_number, 1);
        assert_eq!(
            h.used_at,
            NaiveDate::from_ymd_opt(2000, 4, 10)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
        assert_eq!(h.used_amount, 400);
        assert_eq!(h.balance, 3000);
        assert_eq!(h.raw(), &sample_block());
    }

    #[test]
    fn empty_read_is_absent() {
        assert_eq!(decode_usage_history(&[]).unwrap(), None);
    }

    #[test]
    fn reserved_byte_is_ignored() {
        let mut b = sample_block();
        b[1] = 0xff;
        let h = decode_usage_history(&b).unwrap().unwrap();
        assert_eq!(h.running_number, 1);
        assert_eq!(h.usage_type, 2);
    }

    #[test]
    fn negative_amounts_are_signed() {
        let mut b = sample_block();
        b[8..12].copy_from_slice(&(-150i32).to_be_bytes());
        let h = decode_usage_history(&b).unwrap().unwrap();
        assert_eq!(h.used_amount, -150);
    }

    #[test]
    fn short_block_is_malformed() {
        let err = decode_usage_history(&[0x02; 10]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn only_first_block_is_decoded() {
        let mut data = sample_block().to_vec();
        data.extend_from_slice(&[0xee; 16]);
        let h = decode_usage_history(&data).unwrap().unwrap();
        assert_eq!(h.balance, 3000);
    }

    #[test]
    fn multi_block_history_in_card_order() {
        let mut second = sample_block();
        second[3] = 0x02;
        let mut data = sample_block().to_vec();
        data.extend_from_slice(&second);
        data.extend_from_slice(&[0u8; 5]);

        let entries = decode_usage_histories(&data).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].running_number, 1);
        assert_eq!(entries[1].running_number, 2);
        assert!(decode_usage_histories(&[]).unwrap().is_empty());
    }
}
