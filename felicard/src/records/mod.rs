// felicard/src/records/mod.rs

/// E-money usage history.
pub mod edy;
/// Packed date-time.
pub mod timestamp;

pub use edy::{UsageHistory, decode_usage_histories, decode_usage_history};
pub use timestamp::PackedDateTime;
