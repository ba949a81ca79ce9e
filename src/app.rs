//! Daonation Frontend App
//!
//! Main application component: navigation bar, the current page, and the
//! transaction notice overlay.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;

use daonation_core::AccountSelection;

use crate::commands::{self, ContractClient};
use crate::components::{AllCampaigns, CampaignDetails, CreateCampaign, Dashboard, NavBar, NoticeModal};
use crate::config::load_config;
use crate::context::AppContext;
use crate::models::Page;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let client = ContractClient::new(load_config());
    let initial_account = commands::active_account();

    // State
    let (account, set_account) = signal(initial_account.clone());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (page, set_page) = signal(Page::Home);

    let ctx = AppContext::new(
        client,
        AccountSelection::new(initial_account),
        (account, set_account),
        (reload_trigger, set_reload_trigger),
        (page, set_page),
    );

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    // Follow wallet switches and disconnects
    if let Err(e) = commands::watch_account(move |address| ctx.set_account(address)) {
        warn!("account changes will not be tracked: {}", e);
    }

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <AllCampaigns /> }.into_any(),
                    Page::Create => view! { <CreateCampaign /> }.into_any(),
                    Page::Dashboard => view! { <Dashboard /> }.into_any(),
                    Page::Campaign(id) => view! { <CampaignDetails id=id /> }.into_any(),
                }}
            </main>

            <NoticeModal />
        </div>
    }
}
