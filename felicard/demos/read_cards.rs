//! Replay a captured card session and print the decoded records.
//!
//! Usage:
//!   cargo run -p felicard --example read_cards -- [transit|emoney] [replies.txt]
//!
//! `replies.txt` holds one hex dump per line, in the order the card sent
//! them (polling reply first). Without a file a built-in session is used.
//! Set `RUST_LOG=trace` to see every frame exchanged.

use anyhow::{Context, bail};
use felicard::prelude::*;
use felicard::test_support::{polling_reply, read_reply, usage_history_block};
use felicard::transport::MockTransceiver;

const DEMO_IDM: [u8; 8] = [0x01, 0x2e, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99];

fn load_replies(path: &str) -> anyhow::Result<Vec<Vec<u8>>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| parse_hex(l).map_err(anyhow::Error::msg))
        .collect()
}

fn builtin_transit() -> Vec<Vec<u8>> {
    let mut replies = vec![polling_reply(DEMO_IDM)];
    for fill in 0xa0..0xa5u8 {
        replies.push(read_reply(DEMO_IDM, &[[fill; 16]]));
    }
    replies
}

fn builtin_emoney() -> Vec<Vec<u8>> {
    let mut balance = [0u8; 16];
    balance[..4].copy_from_slice(&4750u32.to_le_bytes());
    vec![
        polling_reply(DEMO_IDM),
        read_reply(DEMO_IDM, &[[0x11; 16], [0x12; 16]]),
        read_reply(DEMO_IDM, &[balance]),
        read_reply(DEMO_IDM, &[usage_history_block(0x20, 328, 4948, 46_768, 250, 4750)]),
    ]
}

fn run_transit(mock: MockTransceiver) -> anyhow::Result<()> {
    let mut card = TransitCard::new(mock);
    let idm = card.poll()?;
    println!("IDm: {}", idm.to_hex());
    println!("attribute:     {}", bytes_to_hex_spaced(&card.attribute_info(&idm)?));
    println!("usage history: {}", bytes_to_hex_spaced(&card.usage_history(&idm)?));
    println!("gate history:  {}", bytes_to_hex_spaced(&card.gate_history(&idm)?));
    println!("entry station: {}", bytes_to_hex_spaced(&card.entry_station(&idm)?));
    println!("fee record:    {}", bytes_to_hex_spaced(&card.fee_record(&idm)?));
    Ok(())
}

fn run_emoney(mock: MockTransceiver) -> anyhow::Result<()> {
    let mut card = EmoneyCard::new(mock);
    let idm = card.poll()?;
    println!("IDm: {}", idm.to_hex());
    println!("attribute: {}", bytes_to_hex_spaced(&card.attribute(&idm)?));
    println!("balance:   {}", bytes_to_hex_spaced(&card.balance(&idm)?));
    match card.usage_history(&idm)? {
        Some(h) => println!(
            "latest use: type={:#04x} #{} at {} amount={} balance={}",
            h.usage_type, h.running_number, h.used_at, h.used_amount, h.balance
        ),
        None => println!("no usage history"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "emoney".to_string());
    let file = args.next();

    let replies = match (&file, kind.as_str()) {
        (Some(path), _) => load_replies(path)?,
        (None, "transit") => builtin_transit(),
        (None, "emoney") => builtin_emoney(),
        (None, other) => bail!("unknown card kind '{}'", other),
    };
    let mock = MockTransceiver::with_responses(replies);

    match kind.as_str() {
        "transit" => run_transit(mock),
        "emoney" => run_emoney(mock),
        other => bail!("unknown card kind '{}'", other),
    }
}
