//! Donation Aggregator
//!
//! Joins what an address gave to each campaign it backed with the campaign
//! records themselves, and reads a campaign's full contribution history.

use futures::future::join_all;
use log::{debug, warn};

use crate::aggregate::{dedup_ids, CampaignAggregator};
use crate::error::{AggregateError, GatewayResult};
use crate::gateway::ContractGateway;
use crate::model::{Address, CampaignId, CampaignRecord, Contribution, DonationRecord, Wei};

/// A backed campaign together with the viewer's contribution to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackedCampaign {
    pub campaign: CampaignRecord,
    pub donation: DonationRecord,
}

pub struct DonationAggregator<'g, G: ?Sized> {
    gateway: &'g G,
    campaigns: CampaignAggregator<'g, G>,
}

impl<'g, G: ContractGateway + ?Sized> DonationAggregator<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self {
            gateway,
            campaigns: CampaignAggregator::new(gateway),
        }
    }

    /// One record per distinct id in `backed_ids`, in first-occurrence order.
    /// Failed reads count as zero.
    pub async fn donations(&self, backer: &Address, backed_ids: &[CampaignId]) -> Vec<DonationRecord> {
        let ids = dedup_ids(backed_ids.iter().copied());
        join_all(ids.iter().map(|&id| self.contribution(id, backer))).await
    }

    /// Backed campaigns joined with the viewer's contribution. Campaigns whose
    /// detail read fails are left out; the id-set read is required.
    pub async fn load_backed(&self, backer: &Address) -> Result<Vec<BackedCampaign>, AggregateError> {
        let ids = self.campaigns.backed_ids(backer).await?;
        if ids.is_empty() {
            debug!("{} has not backed any campaign", backer);
            return Ok(Vec::new());
        }

        let joined = join_all(ids.iter().map(|&id| async move {
            let (campaign, donation) =
                futures::join!(self.campaigns.fetch_one(id), self.contribution(id, backer));
            campaign.map(|campaign| BackedCampaign { campaign, donation })
        }))
        .await;

        Ok(joined.into_iter().flatten().collect())
    }

    /// Every contributor and amount for one campaign, in contract order
    pub async fn contribution_history(&self, id: CampaignId) -> GatewayResult<Vec<Contribution>> {
        self.gateway.all_contributions(id).await
    }

    async fn contribution(&self, id: CampaignId, backer: &Address) -> DonationRecord {
        let amount = match self.gateway.contribution(id, backer).await {
            Ok(amount) => amount,
            Err(e) => {
                warn!("failed to load contribution of {} to campaign {}: {}", backer, id, e);
                Wei::ZERO
            }
        };
        DonationRecord { campaign_id: id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeGateway};

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    #[tokio::test]
    async fn test_no_backed_ids_issues_no_further_reads() {
        let erin = addr("0xe41n");
        let gateway = FakeGateway::with_campaigns(5);

        let backed = DonationAggregator::new(&gateway).load_backed(&erin).await.unwrap();

        assert!(backed.is_empty());
        assert_eq!(gateway.calls(), vec![Call::Backed(erin)]);
    }

    #[tokio::test]
    async fn test_donations_align_with_deduplicated_ids() {
        let frank = addr("0xf4a4c");
        let gateway = FakeGateway::with_campaigns(10)
            .contribution(3, &frank, Wei(30))
            .contribution(9, &frank, Wei(90));

        let records = DonationAggregator::new(&gateway)
            .donations(&frank, &[3, 7, 3, 9])
            .await;

        assert_eq!(
            records,
            vec![
                DonationRecord { campaign_id: 3, amount: Wei(30) },
                DonationRecord { campaign_id: 7, amount: Wei::ZERO },
                DonationRecord { campaign_id: 9, amount: Wei(90) },
            ]
        );
        assert_eq!(gateway.contribution_reads(), 3);
    }

    #[tokio::test]
    async fn test_load_backed_joins_campaigns_and_amounts() {
        let gina = addr("0x61na");
        let gateway = FakeGateway::with_campaigns(10)
            .backed(&gina, &[3, 7, 3, 9])
            .contribution(3, &gina, Wei(5))
            .contribution(7, &gina, Wei(6))
            .contribution(9, &gina, Wei(7))
            .fail_contribution(9);

        let backed = DonationAggregator::new(&gateway).load_backed(&gina).await.unwrap();

        let rows: Vec<_> = backed.iter().map(|b| (b.campaign.id, b.donation.amount)).collect();
        assert_eq!(rows, vec![(3, Wei(5)), (7, Wei(6)), (9, Wei::ZERO)]);
        assert_eq!(gateway.detail_reads(), 3);
        assert_eq!(gateway.contribution_reads(), 3);
    }

    #[tokio::test]
    async fn test_load_backed_skips_failed_campaign() {
        let hank = addr("0x4a4c");
        let gateway = FakeGateway::with_campaigns(4)
            .backed(&hank, &[0, 1, 2])
            .fail_detail(1);

        let backed = DonationAggregator::new(&gateway).load_backed(&hank).await.unwrap();

        let ids: Vec<_> = backed.iter().map(|b| b.campaign.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_contribution_history_passthrough() {
        let gateway = FakeGateway::with_campaigns(1).history(
            0,
            vec![
                Contribution { contributor: addr("0xaa"), amount: Wei(1) },
                Contribution { contributor: addr("0xbb"), amount: Wei(2) },
            ],
        );

        let rows = DonationAggregator::new(&gateway).contribution_history(0).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].contributor, addr("0xAA"));
    }
}
