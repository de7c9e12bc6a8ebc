#[path = "../common/mod.rs"]
mod common;

use felicard::protocol::{Response, decode_polling, parse_read_without_encryption_response};
use felicard::types::SystemCode;

#[test]
fn captured_polling_reply() {
    let resp = decode_polling(&common::fixtures::transit_polling_reply()).unwrap();
    assert_eq!(resp.idm, common::fixtures::transit_idm());
    assert_eq!(resp.system_code, Some(SystemCode::SUICA));
    assert!(resp.pmm.is_some());
}

#[test]
fn polling_idm_at_offset_two() {
    let raw = [0x0a, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    match Response::decode(0x00, &raw).unwrap() {
        Response::Polling(p) => {
            assert_eq!(p.idm.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        }
        other => panic!("expected polling response, got {:?}", other),
    }
}

#[test]
fn read_reply_keeps_block_order() {
    let idm = common::fixtures::emoney_idm();
    let raw = common::fixtures::read_reply(&idm, &[[0x02; 16], [0x01; 16]]);

    let resp = parse_read_without_encryption_response(&raw).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.idm, idm);
    assert_eq!(resp.block_count, Some(2));
    assert_eq!(&resp.block_data[..16], &[0x02; 16]);
    assert_eq!(&resp.block_data[16..], &[0x01; 16]);
}

#[test]
fn card_error_is_distinct_from_malformed() {
    let idm = common::fixtures::emoney_idm();
    let refused = parse_read_without_encryption_response(&common::fixtures::read_error_reply(&idm, 0x01, 0xa6))
        .unwrap();
    let err = refused.into_block_data().unwrap_err();
    assert!(err.is_card_reported());
    assert!(!err.is_malformed());

    let truncated = parse_read_without_encryption_response(&[0x0b, 0x07, 0, 0, 0]).unwrap_err();
    assert!(truncated.is_malformed());
    assert!(!truncated.is_card_reported());
}
