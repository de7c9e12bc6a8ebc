// felicard/src/card/emoney.rs

use crate::card::profile::RecordKind;
use crate::card::CardReader;
use crate::records::{UsageHistory, decode_usage_histories, decode_usage_history};
use crate::transport::Transceiver;
use crate::types::Idm;
use crate::Result;

/// E-money card (Edy class, system code 0xfe00).
pub struct EmoneyCard<T> {
    reader: CardReader<T>,
}

impl<T: Transceiver> EmoneyCard<T> {
    /// Wrap a transceiver.
    pub fn new(transceiver: T) -> Self {
        Self {
            reader: CardReader::emoney(transceiver),
        }
    }

    /// Poll system 0xfe00.
    pub fn poll(&mut self) -> Result<Idm> {
        self.reader.poll()
    }

    /// 属性情報 (service 0x110b, blocks 0 and 1), raw.
    pub fn attribute(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::Attribute)
    }

    /// 残額情報 (service 0x1317, block 0), raw.
    pub fn balance(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::Balance)
    }

    /// 利用履歴 (service 0x170f): latest entry, `None` for an empty history.
    pub fn usage_history(&mut self, idm: &Idm) -> Result<Option<UsageHistory>> {
        let data = self.reader.read_record(idm, RecordKind::UsageHistory)?;
        decode_usage_history(&data)
    }

    /// Up to `count` most recent entries (the service keeps 6).
    pub fn usage_histories(&mut self, idm: &Idm, count: u8) -> Result<Vec<UsageHistory>> {
        let data = self
            .reader
            .read_record_blocks(idm, RecordKind::UsageHistory, count)?;
        decode_usage_histories(&data)
    }

    /// Generic reader.
    pub fn reader(&mut self) -> &mut CardReader<T> {
        &mut self.reader
    }

    /// Give back the transceiver.
    pub fn into_inner(self) -> T {
        self.reader.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{polling_reply, read_error_reply, read_reply, usage_history_block};
    use crate::transport::MockTransceiver;

    const IDM: [u8; 8] = [0x01, 0x2e, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];

    #[test]
    fn poll_then_usage_history() {
        let block = usage_history_block(0x02, 1, 100, 3600, 400, 3000);
        let mock = MockTransceiver::with_responses(vec![polling_reply(IDM), read_reply(IDM, &[block])]);
        let mut card = EmoneyCard::new(mock);

        let idm = card.poll().unwrap();
        let entry = card.usage_history(&idm).unwrap().unwrap();
        assert_eq!(entry.running_number, 1);
        assert_eq!(entry.balance, 3000);

        let sent = card.into_inner().sent;
        assert_eq!(&sent[1][11..], &[0x0f, 0x17, 0x01, 0x80, 0x00]);
    }

    #[test]
    fn refused_history_is_absent() {
        let mock = MockTransceiver::with_responses(vec![read_error_reply(IDM, 0xff, 0xa1)]);
        let mut card = EmoneyCard::new(mock);
        assert!(card.usage_history(&Idm::from_bytes(IDM)).unwrap().is_none());
    }

    #[test]
    fn balance_is_raw() {
        let block = [0x10, 0x27, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mock = MockTransceiver::with_responses(vec![read_reply(IDM, &[block])]);
        let mut card = EmoneyCard::new(mock);
        assert_eq!(card.balance(&Idm::from_bytes(IDM)).unwrap(), block.to_vec());
    }

    #[test]
    fn several_history_entries() {
        let blocks = [
            usage_history_block(0x20, 5, 7000, 120, 1200, 800),
            usage_history_block(0x02, 4, 6999, 86_000, 2000, 2000),
        ];
        let mock = MockTransceiver::with_responses(vec![read_reply(IDM, &blocks)]);
        let mut card = EmoneyCard::new(mock);

        let entries = card.usage_histories(&Idm::from_bytes(IDM), 2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].running_number, 5);
        assert_eq!(entries[1].used_amount, 2000);
        assert!(entries[0].used_at > entries[1].used_at);

        assert!(card.usage_histories(&Idm::from_bytes(IDM), 7).is_err());
    }
}
