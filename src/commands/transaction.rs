//! Transaction Commands
//!
//! Frontend bindings for the contract's state-changing methods. Each call
//! resolves only after the wallet confirms the transaction.

use serde::Serialize;

use daonation_core::{
    ContractConfig, CreateCampaignRequest, DonationRequest, GatewayResult, TxConfirmation, WireReceipt,
};

use super::write;

#[derive(Serialize)]
struct CreateCampaignArgs<'a> {
    title: &'a str,
    description: &'a str,
    target: String,
    duration: String,
}

#[derive(Serialize)]
struct BackCampaignArgs {
    id: String,
}

pub async fn create_campaign(config: &ContractConfig, request: &CreateCampaignRequest) -> GatewayResult<TxConfirmation> {
    let args = CreateCampaignArgs {
        title: &request.title,
        description: &request.description,
        target: request.target.0.to_string(),
        duration: request.duration_days.to_string(),
    };
    let receipt: WireReceipt = write(config, "createCampaign", &args, "0").await?;
    Ok(receipt.into())
}

pub async fn back_campaign(config: &ContractConfig, request: &DonationRequest) -> GatewayResult<TxConfirmation> {
    let args = BackCampaignArgs { id: request.campaign_id.to_string() };
    let receipt: WireReceipt = write(config, "backCampaign", &args, &request.value.0.to_string()).await?;
    Ok(receipt.into())
}
