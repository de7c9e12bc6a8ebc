// felicard/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The transceiver could not deliver the command or its reply.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transceiver gave up waiting for a reply.
    #[error("operation timed out")]
    Timeout,

    /// A received frame is shorter than its layout requires.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes the layout needs.
        expected: usize,
        /// Bytes received.
        actual: usize,
    },

    /// The card answered but refused the request (status flag 1 non-zero).
    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus {
        /// Status flag 1.
        status1: u8,
        /// Status flag 2.
        status2: u8,
    },

    /// The caller passed an argument the protocol cannot express.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The profile or transceiver does not offer the operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// Failure raised by the transceiver rather than by this crate.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout)
    }

    /// The response frame could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::InvalidLength { .. })
    }

    /// The card reported an error status for the request.
    pub fn is_card_reported(&self) -> bool {
        matches!(self, Error::FelicaStatus { .. })
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
