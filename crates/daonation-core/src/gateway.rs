//! Contract Gateway
//!
//! The crowdfunding contract as the front-end sees it: a fixed set of async
//! reads and writes, each of which may be slow or fail.

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::model::{
    Address, CampaignId, CampaignRecord, Contribution, CreateCampaignRequest, DonationRequest,
    TxConfirmation, Wei,
};

/// Read and write surface of the campaign contract.
///
/// Futures are not `Send`: the browser implementation awaits JS promises on
/// the UI thread.
#[async_trait(?Send)]
pub trait ContractGateway {
    /// `TotalCampaigns()`
    async fn total_campaigns(&self) -> GatewayResult<u64>;

    /// `getCampaign(id)`; `None` when the contract returns an empty slot
    async fn get_campaign(&self, id: CampaignId) -> GatewayResult<Option<CampaignRecord>>;

    /// `getCreatedCampaigns(owner)`
    async fn created_campaigns(&self, owner: &Address) -> GatewayResult<Vec<CampaignId>>;

    /// `getBackedCampaigns(backer)`; one entry per donation, so ids repeat
    async fn backed_campaigns(&self, backer: &Address) -> GatewayResult<Vec<CampaignId>>;

    /// `getContribution(id, backer)`
    async fn contribution(&self, id: CampaignId, backer: &Address) -> GatewayResult<Wei>;

    /// `getAllContributions(id)`
    async fn all_contributions(&self, id: CampaignId) -> GatewayResult<Vec<Contribution>>;

    /// `createCampaign(title, description, target, duration)`
    async fn create_campaign(&self, request: &CreateCampaignRequest) -> GatewayResult<TxConfirmation>;

    /// `backCampaign(id)` with the donation attached as value
    async fn back_campaign(&self, request: &DonationRequest) -> GatewayResult<TxConfirmation>;
}
