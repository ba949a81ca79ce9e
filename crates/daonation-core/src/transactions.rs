//! Transaction Submission
//!
//! Validate, then hand the prepared call to the wallet. Input that fails
//! validation is never sent; a rejected write leaves the caller's form state
//! untouched so the user can retry.

use log::{info, warn};

use crate::error::SubmitError;
use crate::gateway::ContractGateway;
use crate::model::{Address, CampaignRecord, TxConfirmation};
use crate::validate::{donation_guard, validate_donation, CreateCampaignForm};

pub async fn submit_campaign<G: ContractGateway + ?Sized>(
    gateway: &G,
    form: &CreateCampaignForm,
) -> Result<TxConfirmation, SubmitError> {
    let request = form.validate()?;
    match gateway.create_campaign(&request).await {
        Ok(confirmation) => {
            info!("campaign {:?} created in {}", request.title, confirmation.transaction_hash);
            Ok(confirmation)
        }
        Err(e) => {
            warn!("create campaign failed: {}", e);
            Err(SubmitError::Rejected(e))
        }
    }
}

pub async fn submit_donation<G: ContractGateway + ?Sized>(
    gateway: &G,
    campaign: &CampaignRecord,
    account: Option<&Address>,
    amount: &str,
) -> Result<TxConfirmation, SubmitError> {
    let guard = donation_guard(campaign, account);
    if !guard.is_allowed() {
        return Err(SubmitError::Blocked(guard));
    }
    let request = validate_donation(campaign.id, amount)?;
    match gateway.back_campaign(&request).await {
        Ok(confirmation) => {
            info!("donated {} to campaign {} in {}", request.value, campaign.id, confirmation.transaction_hash);
            Ok(confirmation)
        }
        Err(e) => {
            warn!("donation to campaign {} failed: {}", campaign.id, e);
            Err(SubmitError::Rejected(e))
        }
    }
}
