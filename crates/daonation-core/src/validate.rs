//! Form Validation
//!
//! Turns raw form text into contract-ready requests. Nothing that fails here
//! is sent to the wallet.

use crate::error::ValidationError;
use crate::model::{Address, CampaignId, CampaignRecord, CreateCampaignRequest, DonationRequest};
use crate::units::parse_ether;

/// Raw create-campaign form fields as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCampaignForm {
    pub title: String,
    pub description: String,
    /// ETH
    pub target: String,
    /// Whole days
    pub duration_days: String,
}

impl CreateCampaignForm {
    /// All fields filled in; enables the submit button
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.description, &self.target, &self.duration_days]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    pub fn validate(&self) -> Result<CreateCampaignRequest, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let target = parse_ether(&self.target)?;
        if target.is_zero() {
            return Err(ValidationError::NonPositiveAmount);
        }

        let duration_days = self
            .duration_days
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| ValidationError::InvalidDuration(self.duration_days.clone()))?;

        Ok(CreateCampaignRequest {
            title: title.to_string(),
            description: description.to_string(),
            target,
            duration_days,
        })
    }
}

/// Validate a donation amount typed in ETH
pub fn validate_donation(campaign_id: CampaignId, amount: &str) -> Result<DonationRequest, ValidationError> {
    let value = parse_ether(amount)?;
    if value.is_zero() {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(DonationRequest { campaign_id, value })
}

/// Whether the donate form should accept input for a campaign.
///
/// A UX guard only: the contract enforces the same rules on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationGuard {
    Allowed,
    ConnectWallet,
    Ended,
    Collected,
    OwnCampaign,
}

impl DonationGuard {
    pub fn is_allowed(&self) -> bool {
        matches!(self, DonationGuard::Allowed)
    }

    pub fn message(&self) -> &'static str {
        match self {
            DonationGuard::Allowed => "",
            DonationGuard::ConnectWallet => "Connect your wallet to donate.",
            DonationGuard::Ended => "This campaign has ended.",
            DonationGuard::Collected => "The funds of this campaign have been collected.",
            DonationGuard::OwnCampaign => "You cannot donate to your own campaign.",
        }
    }
}

pub fn donation_guard(campaign: &CampaignRecord, account: Option<&Address>) -> DonationGuard {
    if campaign.is_collected {
        return DonationGuard::Collected;
    }
    if !campaign.is_active {
        return DonationGuard::Ended;
    }
    match account {
        None => DonationGuard::ConnectWallet,
        Some(a) if campaign.is_owned_by(a) => DonationGuard::OwnCampaign,
        Some(_) => DonationGuard::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::model::Wei;
    use crate::testing::campaign;

    fn form(title: &str, description: &str, target: &str, days: &str) -> CreateCampaignForm {
        CreateCampaignForm {
            title: title.to_string(),
            description: description.to_string(),
            target: target.to_string(),
            duration_days: days.to_string(),
        }
    }

    #[test]
    fn test_valid_create_form() {
        let request = form("  Wells ", "Clean water", "0.5", "30").validate().unwrap();
        assert_eq!(request.title, "Wells");
        assert_eq!(request.target, Wei(500_000_000_000_000_000));
        assert_eq!(request.duration_days, 30);
    }

    #[test]
    fn test_create_form_rejections() {
        assert_eq!(form(" ", "d", "1", "1").validate(), Err(ValidationError::EmptyTitle));
        assert_eq!(form("t", "", "1", "1").validate(), Err(ValidationError::EmptyDescription));
        assert_eq!(form("t", "d", "0", "1").validate(), Err(ValidationError::NonPositiveAmount));
        assert_eq!(
            form("t", "d", "ten", "1").validate(),
            Err(ValidationError::InvalidAmount(UnitError::Malformed("ten".to_string())))
        );
        assert_eq!(
            form("t", "d", "1", "0").validate(),
            Err(ValidationError::InvalidDuration("0".to_string()))
        );
        assert_eq!(
            form("t", "d", "1", "1.5").validate(),
            Err(ValidationError::InvalidDuration("1.5".to_string()))
        );
    }

    #[test]
    fn test_form_completeness() {
        assert!(!CreateCampaignForm::default().is_complete());
        assert!(form("t", "d", "1", "2").is_complete());
        assert!(!form("t", "d", "1", " ").is_complete());
    }

    #[test]
    fn test_donation_amounts() {
        assert_eq!(
            validate_donation(4, "0.01"),
            Ok(DonationRequest { campaign_id: 4, value: Wei(10_000_000_000_000_000) })
        );
        assert_eq!(validate_donation(4, "0"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(validate_donation(4, "0.000"), Err(ValidationError::NonPositiveAmount));
        assert!(matches!(validate_donation(4, "-2"), Err(ValidationError::InvalidAmount(_))));
        assert!(matches!(validate_donation(4, ""), Err(ValidationError::InvalidAmount(UnitError::Empty))));
    }

    #[test]
    fn test_donation_guards() {
        let owner = Address::new("0xOwner");
        let backer = Address::new("0xbacker");
        let mut c = campaign(1, "0xowner");

        assert_eq!(donation_guard(&c, None), DonationGuard::ConnectWallet);
        assert_eq!(donation_guard(&c, Some(&owner)), DonationGuard::OwnCampaign);
        assert!(donation_guard(&c, Some(&backer)).is_allowed());

        c.is_active = false;
        assert_eq!(donation_guard(&c, Some(&backer)), DonationGuard::Ended);

        c.is_collected = true;
        assert_eq!(donation_guard(&c, Some(&backer)), DonationGuard::Collected);
    }
}
