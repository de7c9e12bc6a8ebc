// felicard/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_SIZE, MAX_BLOCK_LIST_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap 8 raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Compact lowercase hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| {
            Error::InvalidParameter(format!("IDm must be 8 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap 8 raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| {
            Error::InvalidParameter(format!("PMm must be 8 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }
}

/// SystemCode (u16)
///
/// Polling carries the system code high byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard; any system answers.
    pub const ANY: Self = Self(0xffff);
    /// 共通領域 (e-money cards)
    pub const COMMON: Self = Self(0xfe00);
    /// 交通系 (transit cards)
    pub const SUICA: Self = Self(0x0003);

    /// Wrap a raw code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form, high byte first.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Parse the wire form.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// ServiceCode (u16)
///
/// Service codes travel low byte first inside command frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Wrap a raw code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form, low byte first.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    /// Wrap one block.
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Compact lowercase hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BLOCK_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: BLOCK_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Access mode bits of a block-list element.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Plain read/write access.
    Normal = 0b000,
    /// Cashback access to a purse service.
    PurseCashback = 0b001,
}

/// BlockElement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockElement {
    /// Index of the service in the command's service code list.
    pub service_index: u8,
    /// Access mode bits.
    pub access_mode: AccessMode,
    /// Block number within the service.
    pub block_number: u16,
}

impl BlockElement {
    /// Element for block `block_number` of the `service_index`-th service.
    pub fn new(service_index: u8, access_mode: AccessMode, block_number: u16) -> Self {
        Self {
            service_index,
            access_mode,
            block_number,
        }
    }

    /// Plain read of `block_number` in the first (only) listed service.
    pub fn read(block_number: u16) -> Self {
        Self::new(0, AccessMode::Normal, block_number)
    }

    /// FeliCa のブロックリスト要素をエンコードする
    ///
    /// Block numbers below 256 use the 2-byte form (length bit set), larger
    /// ones the 3-byte form with a little-endian block number.
    pub fn encode(&self) -> Vec<u8> {
        let head = ((self.access_mode as u8) << 4) | (self.service_index & 0x0f);
        match u8::try_from(self.block_number) {
            Ok(block) => vec![0x80 | head, block],
            Err(_) => {
                let [lo, hi] = self.block_number.to_le_bytes();
                vec![head, lo, hi]
            }
        }
    }
}

/// Encoded block list together with the block count sent ahead of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    count: u8,
    bytes: Vec<u8>,
}

impl BlockList {
    /// Build a list from typed elements; the block count is the element count.
    pub fn from_elements(elements: &[BlockElement]) -> crate::Result<Self> {
        let count = u8::try_from(elements.len()).map_err(|_| {
            Error::InvalidParameter(format!("too many block elements: {}", elements.len()))
        })?;
        let bytes: Vec<u8> = elements.iter().flat_map(|e| e.encode()).collect();
        Self::from_raw(count, &bytes)
    }

    /// Blocks `0..count` of the first listed service.
    pub fn sequential(count: u8) -> crate::Result<Self> {
        Self::sequential_from(0, count)
    }

    /// Blocks `first..first + count` of the first listed service.
    pub fn sequential_from(first: u16, count: u8) -> crate::Result<Self> {
        let end = first.checked_add(u16::from(count)).ok_or_else(|| {
            Error::InvalidParameter(format!("block range {}+{} overflows", first, count))
        })?;
        let elements: Vec<BlockElement> = (first..end).map(BlockElement::read).collect();
        Self::from_elements(&elements)
    }

    /// Wrap pre-encoded block-list bytes. The count is sent verbatim.
    pub fn from_raw(count: u8, bytes: &[u8]) -> crate::Result<Self> {
        if bytes.len() > MAX_BLOCK_LIST_LEN {
            return Err(Error::InvalidParameter(format!(
                "block list of {} bytes exceeds {} bytes",
                bytes.len(),
                MAX_BLOCK_LIST_LEN
            )));
        }
        Ok(Self {
            count,
            bytes: bytes.to_vec(),
        })
    }

    /// Block count sent ahead of the list.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Encoded list.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
