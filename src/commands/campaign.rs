//! Campaign Read Commands
//!
//! Frontend bindings for the contract's view methods.

use serde::Serialize;

use daonation_core::{
    decode_count, decode_ids, decode_uint, Address, CampaignId, CampaignRecord, Contribution,
    ContractConfig, GatewayResult, WireCampaign, WireContributions, Wei,
};

use super::read;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
struct IdArgs {
    id: String,
}

#[derive(Serialize)]
struct AddressArgs<'a> {
    address: &'a str,
}

#[derive(Serialize)]
struct ContributionArgs<'a> {
    id: String,
    user: &'a str,
}

// ========================
// Commands
// ========================

pub async fn total_campaigns(config: &ContractConfig) -> GatewayResult<u64> {
    let count: String = read(config, "TotalCampaigns", &NoArgs {}).await?;
    decode_count(&count)
}

pub async fn get_campaign(config: &ContractConfig, id: CampaignId) -> GatewayResult<Option<CampaignRecord>> {
    let wire: Option<WireCampaign> = read(config, "getCampaign", &IdArgs { id: id.to_string() }).await?;
    match wire {
        Some(wire) => wire.into_record(id),
        None => Ok(None),
    }
}

pub async fn created_campaigns(config: &ContractConfig, owner: &Address) -> GatewayResult<Vec<CampaignId>> {
    let ids: Vec<String> =
        read(config, "getCreatedCampaigns", &AddressArgs { address: owner.as_str() }).await?;
    decode_ids(&ids)
}

pub async fn backed_campaigns(config: &ContractConfig, backer: &Address) -> GatewayResult<Vec<CampaignId>> {
    let ids: Vec<String> =
        read(config, "getBackedCampaigns", &AddressArgs { address: backer.as_str() }).await?;
    decode_ids(&ids)
}

pub async fn contribution(config: &ContractConfig, id: CampaignId, backer: &Address) -> GatewayResult<Wei> {
    let args = ContributionArgs { id: id.to_string(), user: backer.as_str() };
    let amount: Option<String> = read(config, "getContribution", &args).await?;
    match amount {
        Some(amount) => Ok(Wei(decode_uint("getContribution", &amount)?)),
        None => Ok(Wei::ZERO),
    }
}

pub async fn all_contributions(config: &ContractConfig, id: CampaignId) -> GatewayResult<Vec<Contribution>> {
    let wire: WireContributions = read(config, "getAllContributions", &IdArgs { id: id.to_string() }).await?;
    wire.into_contributions()
}
