// felicard/src/protocol/frame.rs

use crate::constants::MAX_FRAME_LEN;
use crate::{Error, Result};

/// Length-prefixed FeliCa frame as exchanged through a transparent
/// transceiver session.
/// Format: [Len(1)] [Code(1)] [Params(n)]
/// Len counts the whole frame including itself. Received frames are parsed
/// by offset and their length byte is not trusted.
pub struct Frame;

impl Frame {
    /// Prefix a command payload with its self-describing length byte.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        let total = payload.len() + 1;
        if total > MAX_FRAME_LEN {
            return Err(Error::InvalidParameter(format!(
                "frame of {} bytes exceeds {} bytes",
                total, MAX_FRAME_LEN
            )));
        }

        let mut out = Vec::with_capacity(total);
        out.push(total as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Infallible variant for command payloads whose size is bounded by
    /// construction. Panics if the payload cannot be described by one
    /// length byte.
    pub(crate) fn wrap(payload: &[u8]) -> Vec<u8> {
        assert!(
            payload.len() < MAX_FRAME_LEN,
            "command payload of {} bytes does not fit in a frame",
            payload.len()
        );
        let mut out = Vec::with_capacity(payload.len() + 1);
        out.push((payload.len() + 1) as u8);
        out.extend_from_slice(payload);
        out
    }
}
