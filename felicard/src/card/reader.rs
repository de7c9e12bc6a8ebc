// felicard/src/card/reader.rs

use crate::card::profile::{EMONEY, Profile, RecordKind, TRANSIT};
use crate::card::CardInfo;
use crate::constants::MAX_BLOCKS_PER_READ;
use crate::protocol::{
    ReadWithoutEncryptionResponse, decode_polling, parse_read_without_encryption_response,
    polling_frame, read_frame,
};
use crate::transport::Transceiver;
use crate::types::{BlockList, Idm, ServiceCode};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Service and default block list for reading `kind`.
pub(crate) fn record_request(profile: &Profile, kind: RecordKind) -> Result<(ServiceCode, BlockList)> {
    let entry = profile.service(kind)?;
    Ok((entry.service, entry.blocks()?))
}

/// Service and block lists for reading blocks `0..count` of `kind`, split so
/// that every reply fits in one frame.
pub(crate) fn record_chunks(
    profile: &Profile,
    kind: RecordKind,
    count: u8,
) -> Result<(ServiceCode, Vec<BlockList>)> {
    let entry = profile.service(kind)?;
    if count == 0 || count > entry.max_blocks {
        return Err(Error::InvalidParameter(format!(
            "{} holds 1..={} blocks, requested {}",
            kind, entry.max_blocks, count
        )));
    }

    let per_read = MAX_BLOCKS_PER_READ as u8;
    let chunks = (0..count)
        .step_by(usize::from(per_read))
        .map(|first| BlockList::sequential_from(u16::from(first), per_read.min(count - first)))
        .collect::<Result<Vec<_>>>()?;
    Ok((entry.service, chunks))
}

/// Block data of a record read, `None` when the card refused it.
pub(crate) fn record_data(kind: RecordKind, resp: ReadWithoutEncryptionResponse) -> Option<Vec<u8>> {
    match resp.into_block_data() {
        Ok(data) => {
            log::debug!("{}: {} bytes", kind, data.len());
            Some(data)
        }
        Err(err) => {
            log::warn!("{} read refused by card: {}", kind, err);
            None
        }
    }
}

/// Card session driven by a static [`Profile`] over a [`Transceiver`].
///
/// Each operation is one command/response exchange; the reader keeps no
/// state between calls besides the transceiver itself.
pub struct CardReader<T> {
    transceiver: T,
    profile: &'static Profile,
}

impl<T: Transceiver> CardReader<T> {
    /// Reader for any static profile.
    pub fn new(transceiver: T, profile: &'static Profile) -> Self {
        Self {
            transceiver,
            profile,
        }
    }

    /// Reader for transit cards (system code 0x0003).
    pub fn transit(transceiver: T) -> Self {
        Self::new(transceiver, &TRANSIT)
    }

    /// Reader for e-money cards (system code 0xfe00).
    pub fn emoney(transceiver: T) -> Self {
        Self::new(transceiver, &EMONEY)
    }

    /// Profile in use.
    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    /// Underlying transceiver.
    pub fn transceiver_mut(&mut self) -> &mut T {
        &mut self.transceiver
    }

    /// Give back the transceiver.
    pub fn into_inner(self) -> T {
        self.transceiver
    }

    fn exchange(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        log::trace!("-> {}", bytes_to_hex_spaced(frame));
        let resp = self.transceiver.exchange(frame)?;
        log::trace!("<- {}", bytes_to_hex_spaced(&resp));
        Ok(resp)
    }

    /// Poll the profile's system code and return the card identity.
    pub fn poll_info(&mut self) -> Result<CardInfo> {
        let system_code = self.profile.system_code;
        let raw = self.exchange(&polling_frame(system_code))?;
        let info = CardInfo::from_polling(decode_polling(&raw)?, system_code);
        log::debug!(
            "polled {} card: idm={} system={:#06x}",
            self.profile.name,
            info.idm.to_hex(),
            info.system_code.as_u16()
        );
        Ok(info)
    }

    /// Poll the profile's system code and return the card's IDm.
    pub fn poll(&mut self) -> Result<Idm> {
        self.poll_info().map(|info| info.idm)
    }

    /// Card identifier as reported by the transceiver.
    pub fn uid(&mut self) -> Result<Vec<u8>> {
        self.transceiver.uid()
    }

    /// Issue one ReadWithoutEncryption and return the parsed reply with its
    /// status flags intact.
    pub fn read_without_encryption(
        &mut self,
        idm: &Idm,
        service: ServiceCode,
        blocks: &BlockList,
    ) -> Result<ReadWithoutEncryptionResponse> {
        let raw = self.exchange(&read_frame(*idm, service, blocks))?;
        parse_read_without_encryption_response(&raw)
    }

    /// Read `kind` with the profile's default block list.
    ///
    /// Returns the raw block data, empty when the card refused the read.
    /// Malformed replies and transport failures are errors.
    pub fn read_record(&mut self, idm: &Idm, kind: RecordKind) -> Result<Vec<u8>> {
        let (service, blocks) = record_request(self.profile, kind)?;
        let resp = self.read_without_encryption(idm, service, &blocks)?;
        Ok(record_data(kind, resp).unwrap_or_default())
    }

    /// Read blocks `0..count` of `kind`. `count` must lie within the
    /// service's block capacity.
    ///
    /// Counts above what one reply frame holds are read with several
    /// commands and concatenated in block order. A refusal stops the read
    /// and keeps the blocks received before it.
    pub fn read_record_blocks(&mut self, idm: &Idm, kind: RecordKind, count: u8) -> Result<Vec<u8>> {
        let (service, chunks) = record_chunks(self.profile, kind, count)?;
        let mut data = Vec::new();
        for blocks in &chunks {
            let resp = self.read_without_encryption(idm, service, blocks)?;
            match record_data(kind, resp) {
                Some(chunk) => data.extend_from_slice(&chunk),
                None => break,
            }
        }
        Ok(data)
    }
}
