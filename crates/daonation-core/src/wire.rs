//! Bridge Wire Format
//!
//! Shapes returned by the wallet bridge. uint256 values cross the JS
//! boundary as decimal strings since they do not fit a JS number.

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};
use crate::model::{Address, CampaignId, CampaignRecord, Contribution, TxConfirmation, Wei};

/// `getCampaign` result tuple, keyed by the contract's output names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCampaign {
    pub owner: String,
    pub title: String,
    pub description: String,
    pub target: String,
    pub deadline: String,
    pub funded_amount: String,
    pub number_of_backers: String,
    pub is_active: bool,
    pub is_collected: bool,
}

impl WireCampaign {
    /// Normalize into a record. A zero owner marks a slot the contract never
    /// filled and yields `None`.
    pub fn into_record(self, id: CampaignId) -> GatewayResult<Option<CampaignRecord>> {
        let owner = Address::new(self.owner);
        if owner.as_str().is_empty() || owner.is_zero() {
            return Ok(None);
        }
        Ok(Some(CampaignRecord {
            id,
            owner,
            title: self.title,
            description: self.description,
            target: Wei(decode_uint("target", &self.target)?),
            deadline: decode_u64("deadline", &self.deadline)?,
            funded_amount: Wei(decode_uint("fundedAmount", &self.funded_amount)?),
            number_of_backers: decode_u64("numberOfBackers", &self.number_of_backers)?,
            is_active: self.is_active,
            is_collected: self.is_collected,
        }))
    }
}

/// `getAllContributions` result: two parallel sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireContributions {
    pub contributors: Vec<String>,
    pub amounts: Vec<String>,
}

impl WireContributions {
    pub fn into_contributions(self) -> GatewayResult<Vec<Contribution>> {
        if self.contributors.len() != self.amounts.len() {
            return Err(GatewayError::Decode {
                field: "contributions",
                value: format!(
                    "{} contributors for {} amounts",
                    self.contributors.len(),
                    self.amounts.len()
                ),
            });
        }
        self.contributors
            .into_iter()
            .zip(self.amounts)
            .map(|(contributor, amount)| {
                Ok(Contribution {
                    contributor: Address::new(contributor),
                    amount: Wei(decode_uint("amount", &amount)?),
                })
            })
            .collect()
    }
}

/// Confirmation returned by a write once the wallet reports it mined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReceipt {
    pub transaction_hash: String,
}

impl From<WireReceipt> for TxConfirmation {
    fn from(receipt: WireReceipt) -> Self {
        TxConfirmation { transaction_hash: receipt.transaction_hash }
    }
}

/// Decode a decimal uint256 string that must fit in u128
pub fn decode_uint(field: &'static str, value: &str) -> GatewayResult<u128> {
    value.trim().parse::<u128>().map_err(|_| GatewayError::Decode {
        field,
        value: value.to_string(),
    })
}

fn decode_u64(field: &'static str, value: &str) -> GatewayResult<u64> {
    value.trim().parse::<u64>().map_err(|_| GatewayError::Decode {
        field,
        value: value.to_string(),
    })
}

/// Decode the `TotalCampaigns` count. A count past u64 is malformed, not
/// clamped, so the list view fails instead of fanning out without bound.
pub fn decode_count(value: &str) -> GatewayResult<u64> {
    decode_u64("TotalCampaigns", value)
}

/// Decode a `uint256[]` id list
pub fn decode_ids(values: &[String]) -> GatewayResult<Vec<CampaignId>> {
    values.iter().map(|v| decode_u64("campaignId", v)).collect()
}
