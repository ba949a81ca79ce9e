//! Campaign Aggregator
//!
//! Assembles campaign lists from one count or id-set read followed by
//! independent per-id detail reads. Per-id failures drop that campaign only;
//! the count and id-set reads are required.

use std::collections::HashSet;

use futures::future::join_all;
use log::{debug, warn};

use crate::error::AggregateError;
use crate::gateway::ContractGateway;
use crate::model::{Address, CampaignId, CampaignRecord};

/// Which campaigns a list shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    CreatedBy(Address),
    BackedBy(Address),
}

/// Keep the first occurrence of every id, in order
pub fn dedup_ids(ids: impl IntoIterator<Item = CampaignId>) -> Vec<CampaignId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

pub struct CampaignAggregator<'g, G: ?Sized> {
    gateway: &'g G,
}

impl<'g, G: ContractGateway + ?Sized> CampaignAggregator<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, scope: &Scope) -> Result<Vec<CampaignRecord>, AggregateError> {
        match scope {
            Scope::All => self.list_all().await,
            Scope::CreatedBy(owner) => self.list_created(owner).await,
            Scope::BackedBy(backer) => self.list_backed(backer).await,
        }
    }

    /// Every campaign, ascending by id
    pub async fn list_all(&self) -> Result<Vec<CampaignRecord>, AggregateError> {
        let total = self.gateway.total_campaigns().await.map_err(AggregateError::Count)?;
        debug!("listing {} campaigns", total);
        let ids: Vec<CampaignId> = (0..total).collect();
        Ok(self.fetch_details(&ids).await)
    }

    /// Campaigns created by `owner`, in the contract's order
    pub async fn list_created(&self, owner: &Address) -> Result<Vec<CampaignRecord>, AggregateError> {
        let ids = self
            .gateway
            .created_campaigns(owner)
            .await
            .map_err(|source| AggregateError::IdSet { address: owner.clone(), source })?;
        Ok(self.fetch_details(&dedup_ids(ids)).await)
    }

    /// Campaigns backed by `backer`, once each regardless of donation count
    pub async fn list_backed(&self, backer: &Address) -> Result<Vec<CampaignRecord>, AggregateError> {
        let ids = self.backed_ids(backer).await?;
        Ok(self.fetch_details(&ids).await)
    }

    /// Deduplicated backed ids for `backer`
    pub async fn backed_ids(&self, backer: &Address) -> Result<Vec<CampaignId>, AggregateError> {
        self.gateway
            .backed_campaigns(backer)
            .await
            .map(dedup_ids)
            .map_err(|source| AggregateError::IdSet { address: backer.clone(), source })
    }

    /// Concurrent detail reads, reassembled in `ids` order
    pub async fn fetch_details(&self, ids: &[CampaignId]) -> Vec<CampaignRecord> {
        join_all(ids.iter().map(|&id| self.fetch_one(id)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Single detail read with the soft-failure policy applied
    pub async fn fetch_one(&self, id: CampaignId) -> Option<CampaignRecord> {
        match self.gateway.get_campaign(id).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                warn!("campaign {} returned an empty record, skipping", id);
                None
            }
            Err(e) => {
                warn!("failed to load campaign {}: {}", id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::testing::{campaign, Call, FakeGateway};
    use std::time::Duration;

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        assert_eq!(dedup_ids([3, 7, 3, 9]), vec![3, 7, 9]);
        assert_eq!(dedup_ids([5, 5, 5]), vec![5]);
        assert!(dedup_ids(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn test_list_all_issues_one_read_per_id() {
        for n in [0u64, 1, 5] {
            let gateway = FakeGateway::with_campaigns(n);
            let list = CampaignAggregator::new(&gateway).list(&Scope::All).await.unwrap();

            assert_eq!(gateway.calls().first(), Some(&Call::Count));
            assert_eq!(gateway.detail_reads(), n as usize);
            assert_eq!(list.len(), n as usize);
            assert!(list.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[tokio::test]
    async fn test_list_all_order_ignores_completion_order() {
        let gateway = FakeGateway::with_campaigns(4)
            .delay_detail(0, Duration::from_millis(40))
            .delay_detail(1, Duration::from_millis(25))
            .delay_detail(2, Duration::from_millis(10));

        let list = CampaignAggregator::new(&gateway).list_all().await.unwrap();

        assert_eq!(gateway.detail_completion_order(), vec![3, 2, 1, 0]);
        let ids: Vec<_> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failed_detail_read_is_omitted() {
        let gateway = FakeGateway::with_campaigns(4).fail_detail(1).empty_detail(2);

        let list = CampaignAggregator::new(&gateway).list_all().await.unwrap();

        let ids: Vec<_> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 3]);
        assert_eq!(gateway.detail_reads(), 4);
    }

    #[tokio::test]
    async fn test_count_failure_is_hard_error() {
        let gateway = FakeGateway::with_campaigns(3).fail_count();

        let result = CampaignAggregator::new(&gateway).list_all().await;

        assert!(matches!(result, Err(AggregateError::Count(GatewayError::Read { .. }))));
        assert_eq!(gateway.detail_reads(), 0);
    }

    #[tokio::test]
    async fn test_backed_duplicates_collapse() {
        let alice = addr("0xa11ce");
        let gateway = FakeGateway::with_campaigns(10).backed(&alice, &[3, 7, 3, 9]);

        let list = CampaignAggregator::new(&gateway).list_backed(&alice).await.unwrap();

        let ids: Vec<_> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7, 9]);
        assert_eq!(gateway.detail_reads(), 3);
    }

    #[tokio::test]
    async fn test_scoped_empty_short_circuits() {
        let bob = addr("0xb0b");
        let gateway = FakeGateway::with_campaigns(3);

        let created = CampaignAggregator::new(&gateway).list_created(&bob).await.unwrap();

        assert!(created.is_empty());
        assert_eq!(gateway.calls(), vec![Call::Created(bob)]);
    }

    #[tokio::test]
    async fn test_created_keeps_contract_order() {
        let carol = addr("0xCAROL");
        let gateway = FakeGateway::with_campaigns(6).created(&carol, &[5, 1, 4]);

        let list = CampaignAggregator::new(&gateway)
            .list(&Scope::CreatedBy(addr("0xcarol")))
            .await
            .unwrap();

        let ids: Vec<_> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 1, 4]);
    }

    #[tokio::test]
    async fn test_id_set_failure_is_hard_error() {
        let dave = addr("0xdave");
        let gateway = FakeGateway::with_campaigns(2).fail_id_sets();

        let result = CampaignAggregator::new(&gateway).list_backed(&dave).await;

        match result {
            Err(AggregateError::IdSet { address, .. }) => assert_eq!(address, dave),
            other => panic!("expected id-set failure, got {:?}", other),
        }
        assert_eq!(gateway.detail_reads(), 0);
    }

    #[tokio::test]
    async fn test_fetch_one_returns_record() {
        let gateway = FakeGateway::new().campaign(campaign(2, "0xowner"));
        let record = CampaignAggregator::new(&gateway).fetch_one(2).await;
        assert_eq!(record.map(|c| c.id), Some(2));
    }
}
