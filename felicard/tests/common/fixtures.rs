// fixtures.rs — reply frames captured from cards (identifiers altered)

use felicard::types::Idm;

pub const TRANSIT_IDM_HEX: &str = "01 01 12 12 b5 13 9a 04";
pub const EMONEY_IDM_HEX: &str = "01 2e 44 55 66 77 88 99";

pub fn idm_from_hex(s: &str) -> Idm {
    let bytes = hex::decode(s.replace(' ', "")).unwrap();
    Idm::try_from(&bytes[..]).unwrap()
}

pub fn transit_idm() -> Idm {
    idm_from_hex(TRANSIT_IDM_HEX)
}

pub fn emoney_idm() -> Idm {
    idm_from_hex(EMONEY_IDM_HEX)
}

/// Transit polling reply with PMm and system code 0x0003.
pub fn transit_polling_reply() -> Vec<u8> {
    hex::decode("14010101 1212b513 9a04 0100 0f3d 4e17 9b40 0003".replace(' ', "")).unwrap()
}

/// E-money usage history block: type 0x20, #0x0148, amount 250, balance 4750.
pub fn emoney_history_block() -> [u8; 16] {
    let bytes = hex::decode("20000148 26a8b6b0 000000fa 0000128e".replace(' ', "")).unwrap();
    bytes.try_into().unwrap()
}

pub fn read_reply(idm: &Idm, blocks: &[[u8; 16]]) -> Vec<u8> {
    felicard::test_support::read_reply(*idm.as_bytes(), blocks)
}

pub fn read_error_reply(idm: &Idm, status1: u8, status2: u8) -> Vec<u8> {
    felicard::test_support::read_error_reply(*idm.as_bytes(), status1, status2)
}
