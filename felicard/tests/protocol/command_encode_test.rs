#[path = "../common/mod.rs"]
mod common;

use felicard::protocol::{Command, encode_read, polling_frame};
use felicard::types::{BlockList, ServiceCode, SystemCode};

#[test]
fn polling_frames_for_both_profiles() {
    assert_eq!(polling_frame(SystemCode::SUICA), vec![6, 0x00, 0x00, 0x03, 0x01, 0x0f]);
    assert_eq!(polling_frame(SystemCode::COMMON), vec![6, 0x00, 0xfe, 0x00, 0x01, 0x0f]);
}

#[test]
fn emoney_attribute_read_frame() {
    let idm = common::fixtures::emoney_idm();
    let frame = encode_read(idm, ServiceCode::new(0x110b), 0x02, &[0x80, 0x00, 0x80, 0x01]);

    assert_eq!(frame[0] as usize, frame.len());
    assert_eq!(frame[1], 0x06);
    assert_eq!(&frame[2..10], idm.as_bytes());
    assert_eq!(&frame[10..], &[0x01, 0x0b, 0x11, 0x02, 0x80, 0x00, 0x80, 0x01]);
}

#[test]
fn command_enum_matches_free_functions() {
    let idm = common::fixtures::transit_idm();
    let blocks = BlockList::sequential(1).unwrap();
    let cmd = Command::ReadWithoutEncryption {
        idm,
        service: ServiceCode::new(0x090f),
        blocks: blocks.clone(),
    };

    assert_eq!(cmd.command_code(), 0x06);
    assert_eq!(
        cmd.encode(),
        encode_read(idm, ServiceCode::new(0x090f), blocks.count(), blocks.as_bytes())
    );
}
