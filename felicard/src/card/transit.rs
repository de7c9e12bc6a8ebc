// felicard/src/card/transit.rs

use crate::card::profile::RecordKind;
use crate::card::CardReader;
use crate::transport::Transceiver;
use crate::types::Idm;
use crate::Result;

/// Transit card (Suica class, system code 0x0003).
///
/// Records are returned as raw block bytes; each call reads the first block
/// of its service.
pub struct TransitCard<T> {
    reader: CardReader<T>,
}

impl<T: Transceiver> TransitCard<T> {
    /// Wrap a transceiver.
    pub fn new(transceiver: T) -> Self {
        Self {
            reader: CardReader::transit(transceiver),
        }
    }

    /// Poll system 0x0003.
    pub fn poll(&mut self) -> Result<Idm> {
        self.reader.poll()
    }

    /// 属性情報 (service 0x008b)
    pub fn attribute_info(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::Attribute)
    }

    /// 利用履歴 (service 0x090f, up to 20 blocks)
    pub fn usage_history(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::UsageHistory)
    }

    /// 改札入出場履歴 (service 0x108f, up to 3 blocks)
    pub fn gate_history(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::GateHistory)
    }

    /// SF入場駅記録 (service 0x10cb, 2 blocks)
    pub fn entry_station(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::EntryStation)
    }

    /// 料金 発券/改札記録 (service 0x184b)
    pub fn fee_record(&mut self, idm: &Idm) -> Result<Vec<u8>> {
        self.reader.read_record(idm, RecordKind::FeeRecord)
    }

    /// Generic reader, for block counts beyond the defaults.
    pub fn reader(&mut self) -> &mut CardReader<T> {
        &mut self.reader
    }

    /// Give back the transceiver.
    pub fn into_inner(self) -> T {
        self.reader.into_inner()
    }
}
