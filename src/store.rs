//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each list is
//! replaced as a whole when its load commits.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use daonation_core::{BackedCampaign, CampaignRecord};

use crate::models::{LoadState, Notice};

/// Successful notices close themselves after this long
const NOTICE_DISMISS_MS: u32 = 3_000;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every campaign, for the home page
    pub all_campaigns: LoadState<Vec<CampaignRecord>>,
    /// Campaigns created by the active account
    pub created_campaigns: LoadState<Vec<CampaignRecord>>,
    /// Campaigns the active account donated to, with amounts
    pub backed_campaigns: LoadState<Vec<BackedCampaign>>,
    /// Transaction result popup
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice; successes close on their own, failures wait for the user
pub fn store_show_notice(store: &AppStore, notice: Notice) {
    let auto_dismiss = notice.success;
    *store.notice().write() = Some(notice.clone());

    if auto_dismiss {
        let store = *store;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            if store.notice().get().as_ref() == Some(&notice) {
                store_dismiss_notice(&store);
            }
        });
    }
}

pub fn store_dismiss_notice(store: &AppStore) {
    *store.notice().write() = None;
}
