// felicard/src/card/async_reader.rs

use crate::card::profile::{EMONEY, Profile, RecordKind, TRANSIT};
use crate::card::reader::{record_chunks, record_data, record_request};
use crate::card::CardInfo;
use crate::protocol::{
    ReadWithoutEncryptionResponse, decode_polling, parse_read_without_encryption_response,
    polling_frame, read_frame,
};
use crate::transport::AsyncTransceiver;
use crate::types::{BlockList, Idm, ServiceCode};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Async variant of [`crate::card::CardReader`]. The transceiver exchange
/// is the only await point; framing and parsing are shared with the
/// blocking reader.
pub struct AsyncCardReader<T> {
    transceiver: T,
    profile: &'static Profile,
}

impl<T: AsyncTransceiver> AsyncCardReader<T> {
    /// Reader for any static profile.
    pub fn new(transceiver: T, profile: &'static Profile) -> Self {
        Self {
            transceiver,
            profile,
        }
    }

    /// Reader for transit cards.
    pub fn transit(transceiver: T) -> Self {
        Self::new(transceiver, &TRANSIT)
    }

    /// Reader for e-money cards.
    pub fn emoney(transceiver: T) -> Self {
        Self::new(transceiver, &EMONEY)
    }

    /// Profile in use.
    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    /// Give back the transceiver.
    pub fn into_inner(self) -> T {
        self.transceiver
    }

    async fn exchange(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        log::trace!("-> {}", bytes_to_hex_spaced(frame));
        let resp = self.transceiver.exchange(frame).await?;
        log::trace!("<- {}", bytes_to_hex_spaced(&resp));
        Ok(resp)
    }

    /// See [`crate::card::CardReader::poll_info`].
    pub async fn poll_info(&mut self) -> Result<CardInfo> {
        let system_code = self.profile.system_code;
        let raw = self.exchange(&polling_frame(system_code)).await?;
        let info = CardInfo::from_polling(decode_polling(&raw)?, system_code);
        log::debug!(
            "polled {} card: idm={} system={:#06x}",
            self.profile.name,
            info.idm.to_hex(),
            info.system_code.as_u16()
        );
        Ok(info)
    }

    /// Poll and return the IDm.
    pub async fn poll(&mut self) -> Result<Idm> {
        self.poll_info().await.map(|info| info.idm)
    }

    /// Card identifier from the transceiver.
    pub async fn uid(&mut self) -> Result<Vec<u8>> {
        self.transceiver.uid().await
    }

    /// One ReadWithoutEncryption exchange, status flags intact.
    pub async fn read_without_encryption(
        &mut self,
        idm: &Idm,
        service: ServiceCode,
        blocks: &BlockList,
    ) -> Result<ReadWithoutEncryptionResponse> {
        let raw = self.exchange(&read_frame(*idm, service, blocks)).await?;
        parse_read_without_encryption_response(&raw)
    }

    /// See [`crate::card::CardReader::read_record`].
    pub async fn read_record(&mut self, idm: &Idm, kind: RecordKind) -> Result<Vec<u8>> {
        let (service, blocks) = record_request(self.profile, kind)?;
        let resp = self.read_without_encryption(idm, service, &blocks).await?;
        Ok(record_data(kind, resp).unwrap_or_default())
    }

    /// See [`crate::card::CardReader::read_record_blocks`].
    pub async fn read_record_blocks(
        &mut self,
        idm: &Idm,
        kind: RecordKind,
        count: u8,
    ) -> Result<Vec<u8>> {
        let (service, chunks) = record_chunks(self.profile, kind, count)?;
        let mut data = Vec::new();
        for blocks in &chunks {
            let resp = self.read_without_encryption(idm, service, blocks).await?;
            match record_data(kind, resp) {
                Some(chunk) => data.extend_from_slice(&chunk),
                None => break,
            }
        }
        Ok(data)
    }
}
