#[path = "../common/mod.rs"]
mod common;

use felicard::card::{CardReader, RecordKind, TRANSIT, TransitCard};
use felicard::transport::MockTransceiver;

#[test]
fn poll_with_captured_reply() {
    let mock = MockTransceiver::with_responses(vec![common::fixtures::transit_polling_reply()]);
    let mut reader = CardReader::transit(mock);

    let info = reader.poll_info().unwrap();
    assert_eq!(info.idm, common::fixtures::transit_idm());
    assert_eq!(info.system_code, TRANSIT.system_code);
}

#[test]
fn transit_card_reads_history_and_skips_refused_record() {
    let idm = common::fixtures::transit_idm();
    let history = [0x16, 0x01, 0x00, 0x02, 0x1a, 0x8e, 0xe3, 0x3b, 0xe3, 0x40, 0x10, 0x27, 0x00, 0x00, 0x00, 0x3a];
    let mock = MockTransceiver::with_responses(vec![
        common::fixtures::transit_polling_reply(),
        common::fixtures::read_reply(&idm, &[history]),
        common::fixtures::read_error_reply(&idm, 0x01, 0xa6),
    ]);
    let mut card = TransitCard::new(mock);

    let polled = card.poll().unwrap();
    assert_eq!(polled, idm);
    assert_eq!(card.usage_history(&polled).unwrap(), history.to_vec());
    assert!(card.fee_record(&polled).unwrap().is_empty());
}

#[test]
fn transit_history_of_twenty_blocks_takes_two_reads() {
    let idm = common::fixtures::transit_idm();
    let first: Vec<[u8; 16]> = (0..15u8).map(|n| [n; 16]).collect();
    let second: Vec<[u8; 16]> = (15..20u8).map(|n| [n; 16]).collect();
    let mock = MockTransceiver::with_responses(vec![
        common::fixtures::read_reply(&idm, &first),
        common::fixtures::read_reply(&idm, &second),
    ]);
    let mut reader = CardReader::transit(mock);

    let data = reader
        .read_record_blocks(&idm, RecordKind::UsageHistory, 20)
        .unwrap();
    assert_eq!(data.len(), 20 * 16);
    for (n, block) in data.chunks(16).enumerate() {
        assert_eq!(block, &[n as u8; 16][..]);
    }

    let sent = reader.into_inner().sent;
    assert_eq!(sent.len(), 2);
    for frame in &sent {
        assert_eq!(frame[0] as usize, frame.len());
    }
    assert_eq!((sent[0][13], sent[0].len()), (15, 14 + 30));
    assert_eq!((sent[1][13], sent[1].len()), (5, 14 + 10));
    assert_eq!(&sent[1][14..16], &[0x80, 0x0f]);
}

#[test]
#[should_panic(expected = "longer than one frame")]
fn sixteen_blocks_do_not_fit_one_reply() {
    let idm = common::fixtures::transit_idm();
    common::fixtures::read_reply(&idm, &[[0u8; 16]; 16]);
}
