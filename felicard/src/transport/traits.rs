// felicard/src/transport/traits.rs

use crate::{Error, Result};

/// Transceiver trait abstracts the card session away from protocol logic.
///
/// Implementations wrap whatever transparent-exchange primitive the reader
/// stack offers (PC/SC, a vendor SDK, a replay buffer in tests). One call
/// carries exactly one command frame and returns one response frame; the
/// card cannot process overlapping commands, hence `&mut self`.
pub trait Transceiver {
    /// Send one length-prefixed command frame and return the card's reply.
    ///
    /// Connection loss or reader timeouts must be reported as
    /// `Error::Transport` or `Error::Timeout`.
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Card identifier as reported by the reader itself (e.g. the PC/SC
    /// GET DATA UID). Readers without that facility keep the default.
    fn uid(&mut self) -> Result<Vec<u8>> {
        Err(Error::UnsupportedOperation(
            "transceiver does not expose a card uid".into(),
        ))
    }
}

impl<T: Transceiver + ?Sized> Transceiver for &mut T {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(command)
    }

    fn uid(&mut self) -> Result<Vec<u8>> {
        (**self).uid()
    }
}

impl<T: Transceiver + ?Sized> Transceiver for Box<T> {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(command)
    }

    fn uid(&mut self) -> Result<Vec<u8>> {
        (**self).uid()
    }
}

/// Async counterpart of [`Transceiver`] for reader stacks whose exchange
/// primitive is asynchronous.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncTransceiver: Send {
    /// See [`Transceiver::exchange`].
    async fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// See [`Transceiver::uid`].
    async fn uid(&mut self) -> Result<Vec<u8>> {
        Err(Error::UnsupportedOperation(
            "transceiver does not expose a card uid".into(),
        ))
    }
}
