// felicard/src/protocol/commands/mod.rs

/// Polling (0x00).
pub mod polling;
/// ReadWithoutEncryption (0x06).
pub mod read;

pub use polling::{encode_polling, polling_frame};
pub use read::{encode_read, read_frame};

use crate::constants::{CMD_POLLING, CMD_READ_WITHOUT_ENCRYPTION};
use crate::types::{BlockList, Idm, ServiceCode, SystemCode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// Find a card answering `system_code`.
    Polling {
        /// System to poll.
        system_code: SystemCode,
        /// Extra data requested in the reply.
        request_code: u8,
        /// Number of response slots minus one.
        time_slot: u8,
    },
    /// Read plain blocks from one service.
    ReadWithoutEncryption {
        /// Target card.
        idm: Idm,
        /// Service to read.
        service: ServiceCode,
        /// Blocks to read.
        blocks: BlockList,
    },
}

impl Command {
    /// FeliCa command code of this command.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Polling { .. } => CMD_POLLING,
            Self::ReadWithoutEncryption { .. } => CMD_READ_WITHOUT_ENCRYPTION,
        }
    }

    /// Encode the command into its length-prefixed frame.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => encode_polling(*system_code, *request_code, *time_slot),
            Self::ReadWithoutEncryption {
                idm,
                service,
                blocks,
            } => read_frame(*idm, *service, blocks),
        }
    }
}
