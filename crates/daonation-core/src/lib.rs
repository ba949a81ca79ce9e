//! Daonation Core
//!
//! Everything the crowdfunding front-end computes on its own:
//! - model: campaign and donation records read from the contract
//! - gateway: the async contract interface the UI binds to its wallet bridge
//! - aggregate / donations: fan-out reads assembled into stable lists
//! - selection: active account context and stale-pass discarding
//! - validate / transactions: form checks before anything reaches the wallet
//! - progress, units, display: pure helpers for the views

mod error;
mod model;
mod units;
mod progress;
mod gateway;
mod wire;
mod aggregate;
mod donations;
mod selection;
mod transactions;
mod validate;
mod display;
mod config;

#[cfg(test)]
mod testing;

pub use error::{AggregateError, GatewayError, GatewayResult, SubmitError, UnitError, ValidationError};
pub use model::{
    Address, CampaignId, CampaignRecord, Contribution, CreateCampaignRequest, DonationRecord,
    DonationRequest, TxConfirmation, Wei,
};
pub use units::{format_ether, format_ether_fixed, parse_ether, ETHER_DECIMALS};
pub use progress::Progress;
pub use gateway::ContractGateway;
pub use wire::{decode_count, decode_ids, decode_uint, WireCampaign, WireContributions, WireReceipt};
pub use aggregate::{dedup_ids, CampaignAggregator, Scope};
pub use donations::{BackedCampaign, DonationAggregator};
pub use selection::{AccountSelection, PassTicket, PassTracker};
pub use transactions::{submit_campaign, submit_donation};
pub use validate::{donation_guard, validate_donation, CreateCampaignForm, DonationGuard};
pub use display::{format_deadline, CampaignStatus, TimeLeft};
pub use config::ContractConfig;
