//! Contract Configuration
//!
//! Where the campaign contract lives. Passed to the wallet bridge with every
//! call.

use serde::{Deserialize, Serialize};

use crate::model::Address;

/// Sepolia
pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x682103fE1dB26B93d411CED5994d5C759A1F5cdB";
pub const DEFAULT_EXPLORER_URL: &str = "https://sepolia.etherscan.io";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractConfig {
    pub chain_id: u64,
    pub address: String,
    pub explorer_url: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
        }
    }
}

impl ContractConfig {
    /// Block explorer page for an account
    pub fn explorer_address_url(&self, address: &Address) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    /// Block explorer page for a transaction
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}
