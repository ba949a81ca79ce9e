//! Bridge-backed Contract Gateway

use async_trait::async_trait;

use daonation_core::{
    Address, CampaignId, CampaignRecord, Contribution, ContractConfig, ContractGateway,
    CreateCampaignRequest, DonationRequest, GatewayResult, TxConfirmation, Wei,
};

use super::{campaign, transaction};

/// The deployed contract, reached through the wallet bridge
#[derive(Debug, Clone)]
pub struct ContractClient {
    config: ContractConfig,
}

impl ContractClient {
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ContractGateway for ContractClient {
    async fn total_campaigns(&self) -> GatewayResult<u64> {
        campaign::total_campaigns(&self.config).await
    }

    async fn get_campaign(&self, id: CampaignId) -> GatewayResult<Option<CampaignRecord>> {
        campaign::get_campaign(&self.config, id).await
    }

    async fn created_campaigns(&self, owner: &Address) -> GatewayResult<Vec<CampaignId>> {
        campaign::created_campaigns(&self.config, owner).await
    }

    async fn backed_campaigns(&self, backer: &Address) -> GatewayResult<Vec<CampaignId>> {
        campaign::backed_campaigns(&self.config, backer).await
    }

    async fn contribution(&self, id: CampaignId, backer: &Address) -> GatewayResult<Wei> {
        campaign::contribution(&self.config, id, backer).await
    }

    async fn all_contributions(&self, id: CampaignId) -> GatewayResult<Vec<Contribution>> {
        campaign::all_contributions(&self.config, id).await
    }

    async fn create_campaign(&self, request: &CreateCampaignRequest) -> GatewayResult<TxConfirmation> {
        transaction::create_campaign(&self.config, request).await
    }

    async fn back_campaign(&self, request: &DonationRequest) -> GatewayResult<TxConfirmation> {
        transaction::back_campaign(&self.config, request).await
    }
}
