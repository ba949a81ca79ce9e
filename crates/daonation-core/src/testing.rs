//! Scripted in-memory gateway for tests.
//!
//! Records every call, and can delay or fail individual reads to exercise
//! completion order, partial failure and stale loads.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::ContractGateway;
use crate::model::{
    Address, CampaignId, CampaignRecord, Contribution, CreateCampaignRequest, DonationRequest,
    TxConfirmation, Wei,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Count,
    Detail(CampaignId),
    Created(Address),
    Backed(Address),
    Contribution(CampaignId, Address),
    History(CampaignId),
    Create(String),
    Back(CampaignId, Wei),
}

pub fn campaign(id: CampaignId, owner: &str) -> CampaignRecord {
    CampaignRecord {
        id,
        owner: Address::new(owner),
        title: format!("Campaign {}", id),
        description: format!("Description {}", id),
        target: Wei(1_000),
        deadline: 1_735_689_600,
        funded_amount: Wei(100 * id as u128),
        number_of_backers: id,
        is_active: true,
        is_collected: false,
    }
}

#[derive(Default)]
pub struct FakeGateway {
    campaigns: BTreeMap<CampaignId, CampaignRecord>,
    created: HashMap<Address, Vec<CampaignId>>,
    backed: HashMap<Address, Vec<CampaignId>>,
    contributions: HashMap<(CampaignId, Address), Wei>,
    history: HashMap<CampaignId, Vec<Contribution>>,
    failing_details: HashSet<CampaignId>,
    empty_details: HashSet<CampaignId>,
    failing_contributions: HashSet<CampaignId>,
    detail_delays: HashMap<CampaignId, Duration>,
    id_set_delays: HashMap<Address, Duration>,
    fail_count: bool,
    fail_id_sets: bool,
    reject_writes: bool,
    calls: RefCell<Vec<Call>>,
    completed_details: RefCell<Vec<CampaignId>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Campaigns `0..n`, each owned by a distinct address
    pub fn with_campaigns(n: u64) -> Self {
        (0..n).fold(Self::new(), |g, id| g.campaign(campaign(id, &format!("0xowner{}", id))))
    }

    pub fn campaign(mut self, record: CampaignRecord) -> Self {
        self.campaigns.insert(record.id, record);
        self
    }

    pub fn created(mut self, owner: &Address, ids: &[CampaignId]) -> Self {
        self.created.insert(owner.clone(), ids.to_vec());
        self
    }

    pub fn backed(mut self, backer: &Address, ids: &[CampaignId]) -> Self {
        self.backed.insert(backer.clone(), ids.to_vec());
        self
    }

    pub fn contribution(mut self, id: CampaignId, backer: &Address, amount: Wei) -> Self {
        self.contributions.insert((id, backer.clone()), amount);
        self
    }

    pub fn history(mut self, id: CampaignId, rows: Vec<Contribution>) -> Self {
        self.history.insert(id, rows);
        self
    }

    pub fn fail_detail(mut self, id: CampaignId) -> Self {
        self.failing_details.insert(id);
        self
    }

    pub fn empty_detail(mut self, id: CampaignId) -> Self {
        self.empty_details.insert(id);
        self
    }

    pub fn fail_contribution(mut self, id: CampaignId) -> Self {
        self.failing_contributions.insert(id);
        self
    }

    pub fn delay_detail(mut self, id: CampaignId, delay: Duration) -> Self {
        self.detail_delays.insert(id, delay);
        self
    }

    pub fn delay_id_set(mut self, address: &Address, delay: Duration) -> Self {
        self.id_set_delays.insert(address.clone(), delay);
        self
    }

    pub fn fail_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn fail_id_sets(mut self) -> Self {
        self.fail_id_sets = true;
        self
    }

    pub fn reject_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn detail_reads(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, Call::Detail(_))).count()
    }

    pub fn contribution_reads(&self) -> usize {
        self.calls.borrow().iter().filter(|c| matches!(c, Call::Contribution(..))).count()
    }

    pub fn detail_completion_order(&self) -> Vec<CampaignId> {
        self.completed_details.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn read_error(method: &'static str) -> GatewayError {
        GatewayError::Read { method, message: "execution reverted".to_string() }
    }

    async fn id_set(&self, map: &HashMap<Address, Vec<CampaignId>>, address: &Address, method: &'static str) -> GatewayResult<Vec<CampaignId>> {
        if let Some(delay) = self.id_set_delays.get(address) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_id_sets {
            return Err(Self::read_error(method));
        }
        Ok(map.get(address).cloned().unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl ContractGateway for FakeGateway {
    async fn total_campaigns(&self) -> GatewayResult<u64> {
        self.record(Call::Count);
        if self.fail_count {
            return Err(Self::read_error("TotalCampaigns"));
        }
        Ok(self.campaigns.len() as u64)
    }

    async fn get_campaign(&self, id: CampaignId) -> GatewayResult<Option<CampaignRecord>> {
        self.record(Call::Detail(id));
        if let Some(delay) = self.detail_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        self.completed_details.borrow_mut().push(id);
        if self.failing_details.contains(&id) {
            return Err(Self::read_error("getCampaign"));
        }
        if self.empty_details.contains(&id) {
            return Ok(None);
        }
        Ok(self.campaigns.get(&id).cloned())
    }

    async fn created_campaigns(&self, owner: &Address) -> GatewayResult<Vec<CampaignId>> {
        self.record(Call::Created(owner.clone()));
        self.id_set(&self.created, owner, "getCreatedCampaigns").await
    }

    async fn backed_campaigns(&self, backer: &Address) -> GatewayResult<Vec<CampaignId>> {
        self.record(Call::Backed(backer.clone()));
        self.id_set(&self.backed, backer, "getBackedCampaigns").await
    }

    async fn contribution(&self, id: CampaignId, backer: &Address) -> GatewayResult<Wei> {
        self.record(Call::Contribution(id, backer.clone()));
        if self.failing_contributions.contains(&id) {
            return Err(Self::read_error("getContribution"));
        }
        Ok(self.contributions.get(&(id, backer.clone())).copied().unwrap_or_default())
    }

    async fn all_contributions(&self, id: CampaignId) -> GatewayResult<Vec<Contribution>> {
        self.record(Call::History(id));
        Ok(self.history.get(&id).cloned().unwrap_or_default())
    }

    async fn create_campaign(&self, request: &CreateCampaignRequest) -> GatewayResult<TxConfirmation> {
        self.record(Call::Create(request.title.clone()));
        if self.reject_writes {
            return Err(GatewayError::Rejected("user rejected the request".to_string()));
        }
        Ok(TxConfirmation { transaction_hash: "0xcreate".to_string() })
    }

    async fn back_campaign(&self, request: &DonationRequest) -> GatewayResult<TxConfirmation> {
        self.record(Call::Back(request.campaign_id, request.value));
        if self.reject_writes {
            return Err(GatewayError::Rejected("user rejected the request".to_string()));
        }
        Ok(TxConfirmation { transaction_hash: "0xback".to_string() })
    }
}
