use crate::protocol::PollingResponse;
use crate::types::{Idm, Pmm, SystemCode};

/// Compact information describing a polled FeliCa card (IDm/PMm/SystemCode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    /// Card IDm.
    pub idm: Idm,
    /// PMm, when reported.
    pub pmm: Option<Pmm>,
    /// System the card answered for.
    pub system_code: SystemCode,
}

impl CardInfo {
    /// Combine a polling reply with the system code that was polled; the
    /// card's own answer wins when it sent one.
    pub fn from_polling(resp: PollingResponse, polled: SystemCode) -> Self {
        Self {
            idm: resp.idm,
            pmm: resp.pmm,
            system_code: resp.system_code.unwrap_or(polled),
        }
    }

    /// Card IDm.
    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// PMm, when reported.
    pub fn pmm(&self) -> Option<&Pmm> {
        self.pmm.as_ref()
    }

    /// System the card answered for.
    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }
}
