// felicard/src/transport/mock.rs

use crate::transport::traits::Transceiver;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Mock transceiver for unit tests. It records sent frames and replays
/// queued responses in order.
#[derive(Debug, Default)]
pub struct MockTransceiver {
    /// Frames sent, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Replies still to hand out.
    pub responses: VecDeque<Vec<u8>>,
    /// Reported by `uid()`; `None` behaves like a reader without UID support.
    pub uid: Option<Vec<u8>>,
    /// Testing hook: number of upcoming exchanges that fail with a transport error
    pub failures: usize,
}

impl MockTransceiver {
    /// Empty mock; every exchange times out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock replaying `responses` in order.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set how many subsequent exchanges should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Queue one more reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Remove and return the last frame sent.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransceiver {
    fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());

        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Transport("simulated connection loss".into()));
        }

        self.responses.pop_front().ok_or(Error::Timeout)
    }

    fn uid(&mut self) -> Result<Vec<u8>> {
        self.uid
            .clone()
            .ok_or_else(|| Error::UnsupportedOperation("mock has no uid".into()))
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl crate::transport::traits::AsyncTransceiver for MockTransceiver {
    async fn exchange(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        Transceiver::exchange(self, command)
    }

    async fn uid(&mut self) -> Result<Vec<u8>> {
        Transceiver::uid(self)
    }
}
