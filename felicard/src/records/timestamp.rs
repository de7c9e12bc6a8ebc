// felicard/src/records/timestamp.rs

use chrono::{Duration, NaiveDateTime, TimeZone, Utc};

/// Date-time packed into 32 bits: the high 15 bits count days since
/// 2000-01-01T00:00:00, the low 17 bits count seconds into that day.
///
/// The second field is not range-checked. Values past 86399 carry into the
/// following day(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedDateTime(u32);

impl PackedDateTime {
    const SECOND_BITS: u32 = 17;
    const SECOND_MASK: u32 = (1 << Self::SECOND_BITS) - 1;

    // Seconds between the Unix epoch and 2000-01-01T00:00:00
    const EPOCH_DELTA: i64 = 946_684_800;

    /// Wrap a packed value read from a card.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Pack a day count and second offset. Out-of-range inputs are masked to
    /// their field widths.
    pub const fn new(days: u16, seconds: u32) -> Self {
        let days = (days as u32) & 0x7fff;
        Self((days << Self::SECOND_BITS) | (seconds & Self::SECOND_MASK))
    }

    /// Packed value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Whole days since 2000-01-01.
    pub fn days(&self) -> u16 {
        (self.0 >> Self::SECOND_BITS) as u16
    }

    /// Seconds since midnight of `days()`.
    pub fn seconds(&self) -> u32 {
        self.0 & Self::SECOND_MASK
    }

    /// Calendar date-time (naive, card local time).
    pub fn to_datetime(&self) -> NaiveDateTime {
        let offset = i64::from(self.days()) * 86_400 + i64::from(self.seconds());
        (Utc.timestamp_nanos(0) + Duration::seconds(Self::EPOCH_DELTA + offset)).naive_utc()
    }
}

impl From<PackedDateTime> for NaiveDateTime {
    fn from(p: PackedDateTime) -> Self {
        p.to_datetime()
    }
}
