// felicard/src/protocol/responses/polling.rs

use crate::constants::CMD_POLLING;
use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Card identity returned by Polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingResponse {
    /// Card IDm.
    pub idm: Idm,
    /// PMm, when the reply carries one.
    pub pmm: Option<Pmm>,
    /// Present when polling with request code 0x01.
    pub system_code: Option<SystemCode>,
}

/// Decode a Polling response frame (response code = 0x01)
/// Layout: len(1) + response_code(1) + idm(8) [+ pmm(8) [+ system_code(2, big-endian)]]
///
/// Only the IDm is required; a frame too short to hold it is rejected
/// rather than yielding a partial identifier.
pub fn decode_polling(raw: &[u8]) -> Result<PollingResponse> {
    const MIN_LEN: usize = 1 + 1 + 8; // 10
    parser::ensure_len(raw, MIN_LEN)?;
    parser::check_response_code(raw, CMD_POLLING + 1);

    let idm = parser::idm_at(raw, 2)?;
    let pmm = parser::pmm_at(raw, 10).ok();
    let system_code = parser::be_u16_at(raw, 18).ok().map(SystemCode::new);

    Ok(PollingResponse {
        idm,
        pmm,
        system_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> Vec<u8> {
        let mut data = vec![0x14, 0x01];
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]); // idm
        data.extend_from_slice(&[9, 10, 11, 12, 13, 14, 15, 16]); // pmm
        data.extend_from_slice(&[0x00, 0x03]); // system code
        data
    }

    #[test]
    fn decode_polling_ok() {
        let resp = decode_polling(&full_response()).unwrap();
        assert_eq!(resp.idm.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(resp.pmm.unwrap().as_bytes(), &[9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(resp.system_code, Some(SystemCode::SUICA));
    }

    #[test]
    fn decode_polling_idm_only() {
        let data = &full_response()[..10];
        let resp = decode_polling(data).unwrap();
        assert_eq!(resp.idm.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(resp.pmm, None);
        assert_eq!(resp.system_code, None);
    }

    #[test]
    fn decode_polling_too_short() {
        match decode_polling(&[0x03, 0x01, 0xaa]) {
            Err(crate::Error::InvalidLength {
                expected: 10,
                actual: 3,
            }) => {}
            other => panic!("expected InvalidLength, got {:?}", other),
        }
        assert!(decode_polling(&[]).is_err());
    }
}
