//! UI Components
//!
//! Leptos components for the campaign pages.

mod nav_bar;
mod status_badge;
mod progress_bar;
mod countdown;
mod campaign_card;
mod campaign_list;
mod donated_campaigns;
mod dashboard;
mod campaign_details;
mod donation_form;
mod donation_history;
mod create_campaign;
mod notice_modal;

pub use nav_bar::{ConnectButton, NavBar};
pub use status_badge::StatusBadge;
pub use progress_bar::ProgressBar;
pub use countdown::Countdown;
pub use campaign_card::CampaignCard;
pub use campaign_list::{AllCampaigns, CreatedCampaigns};
pub use donated_campaigns::DonatedCampaigns;
pub use dashboard::Dashboard;
pub use campaign_details::CampaignDetails;
pub use donation_form::DonationForm;
pub use donation_history::DonationHistory;
pub use create_campaign::CreateCampaign;
pub use notice_modal::NoticeModal;
