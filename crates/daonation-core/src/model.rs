//! Campaign Models
//!
//! Read-only snapshots of contract state. Records are rebuilt on every load
//! and never mutated by the front-end.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Contract-assigned campaign identity, never reused
pub type CampaignId = u64;

/// Amount in the chain's smallest unit (10^-18 ETH)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wei(pub u128);

impl Wei {
    pub const ZERO: Wei = Wei(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

/// Account address as reported by the wallet or the contract.
///
/// Wallets and contracts disagree on checksum casing, so equality and
/// hashing ignore ASCII case while the original spelling is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The all-zero address the contract returns for unset owners
    pub fn is_zero(&self) -> bool {
        let hex = self.0.trim_start_matches("0x").trim_start_matches("0X");
        !hex.is_empty() && hex.bytes().all(|b| b == b'0')
    }

    /// Shortened `0x1234...abcd` form for cards and tables
    pub fn short(&self) -> String {
        let s = self.0.as_str();
        if s.len() <= 10 || !s.is_char_boundary(6) || !s.is_char_boundary(s.len() - 4) {
            return s.to_string();
        }
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One on-chain campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: CampaignId,
    pub owner: Address,
    pub title: String,
    pub description: String,
    pub target: Wei,
    /// Unix seconds
    pub deadline: u64,
    pub funded_amount: Wei,
    pub number_of_backers: u64,
    pub is_active: bool,
    /// Terminal once true
    pub is_collected: bool,
}

impl CampaignRecord {
    pub fn is_owned_by(&self, account: &Address) -> bool {
        self.owner == *account
    }
}

/// What one address gave to one campaign. A missing record means zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub campaign_id: CampaignId,
    pub amount: Wei,
}

/// One row of a campaign's contribution history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub contributor: Address,
    pub amount: Wei,
}

/// Validated input for `createCampaign`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub description: String,
    pub target: Wei,
    pub duration_days: u64,
}

/// Validated input for `backCampaign`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonationRequest {
    pub campaign_id: CampaignId,
    pub value: Wei,
}

/// Confirmation signal for a write; nothing counts as done without one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxConfirmation {
    pub transaction_hash: String,
}
