#[path = "../common/mod.rs"]
mod common;

use chrono::NaiveDate;
use felicard::card::EmoneyCard;
use felicard::test_support::polling_reply;
use felicard::transport::MockTransceiver;

#[test]
fn emoney_session_decodes_history() {
    let idm = common::fixtures::emoney_idm();
    let mock = MockTransceiver::with_responses(vec![
        polling_reply(*idm.as_bytes()),
        common::fixtures::read_reply(&idm, &[[0x11; 16], [0x12; 16]]),
        common::fixtures::read_reply(&idm, &[[0x8e, 0x12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]]),
        common::fixtures::read_reply(&idm, &[common::fixtures::emoney_history_block()]),
    ]);
    let mut card = EmoneyCard::new(mock);

    let polled = card.poll().unwrap();
    assert_eq!(card.attribute(&polled).unwrap().len(), 32);
    assert_eq!(card.balance(&polled).unwrap()[..2], [0x8e, 0x12]);

    let entry = card.usage_history(&polled).unwrap().expect("history entry");
    assert_eq!(entry.usage_type, 0x20);
    assert_eq!(entry.running_number, 0x0148);
    assert_eq!(
        entry.used_at,
        NaiveDate::from_ymd_opt(2013, 7, 19)
            .unwrap()
            .and_hms_opt(12, 59, 28)
            .unwrap()
    );
    assert_eq!(entry.used_amount, 250);
    assert_eq!(entry.balance, 4750);
}

#[test]
fn new_card_has_no_history() {
    let idm = common::fixtures::emoney_idm();
    let mock = MockTransceiver::with_responses(vec![common::fixtures::read_reply(&idm, &[])]);
    let mut card = EmoneyCard::new(mock);

    assert!(card.usage_history(&idm).unwrap().is_none());
}
