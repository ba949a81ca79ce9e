//! Frontend Models
//!
//! View-side state around the core records.

use daonation_core::{CampaignId, CampaignRecord, Wei};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Create,
    Dashboard,
    Campaign(CampaignId),
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Created,
    Backed,
}

/// Display state of one load; replaced as a whole when a load commits
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

/// A campaign card's data: the record and, on the donations tab, what the
/// viewer gave
pub type CardEntry = (CampaignRecord, Option<Wei>);

/// Result notification for a submitted transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub success: bool,
    /// Explorer link to the confirmed transaction
    pub tx_url: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>, tx_url: Option<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: true,
            tx_url,
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            success: false,
            tx_url: None,
        }
    }
}

impl<T> LoadState<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(msg) => LoadState::Failed(msg),
            LoadState::Ready(value) => LoadState::Ready(f(value)),
        }
    }
}
