//! Campaign List Components
//!
//! The home page list of every campaign and the dashboard list of the
//! account's own campaigns. Only the latest load of each list is committed,
//! and the account's list also drops loads issued for a previous account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use daonation_core::{CampaignAggregator, CampaignRecord, PassTracker, Scope};

use crate::components::CampaignCard;
use crate::context::AppContext;
use crate::models::{CardEntry, LoadState};
use crate::store::{use_app_store, AppStateStoreFields};

/// Render a list load as status text or a grid of cards
pub fn campaign_grid(state: LoadState<Vec<CardEntry>>, empty_text: &'static str) -> AnyView {
    match state {
        LoadState::Loading => view! { <p class="list-status">"Loading campaigns..."</p> }.into_any(),
        LoadState::Failed(msg) => view! { <p class="list-status error">{msg}</p> }.into_any(),
        LoadState::Ready(entries) if entries.is_empty() => {
            view! { <p class="list-status">{empty_text}</p> }.into_any()
        }
        LoadState::Ready(entries) => view! {
            <div class="campaign-grid">
                {entries
                    .into_iter()
                    .map(|(campaign, donation)| view! { <CampaignCard campaign=campaign donation=donation /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn without_donations(list: Vec<CampaignRecord>) -> Vec<CardEntry> {
    list.into_iter().map(|c| (c, None)).collect()
}

/// Every campaign on the contract
#[component]
pub fn AllCampaigns() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    // Same list for every account, so a wallet switch must not discard it
    let tracker = PassTracker::unscoped();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let tracker = tracker.clone();
        let ticket = tracker.begin();
        let client = ctx.client();
        spawn_local(async move {
            let state = match CampaignAggregator::new(&client).list(&Scope::All).await {
                Ok(list) => LoadState::Ready(list),
                Err(e) => {
                    error!("campaign list failed: {}", e);
                    LoadState::Failed(format!("Failed to load campaigns: {}", e))
                }
            };
            tracker.commit(&ticket, state, |state| *store.all_campaigns().write() = state);
        });
    });

    let count = move || match store.all_campaigns().get() {
        LoadState::Ready(list) => format!("{} campaigns", list.len()),
        _ => String::new(),
    };

    view! {
        <section class="campaign-list">
            <h1>"All Campaigns"</h1>
            <p class="item-count">{count}</p>
            {move || campaign_grid(store.all_campaigns().get().map(without_donations), "No campaigns yet.")}
        </section>
    }
}

/// Campaigns created by the active account
#[component]
pub fn CreatedCampaigns() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let tracker = ctx.tracker();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let account = ctx.account.get();
        let tracker = tracker.clone();
        let ticket = tracker.begin();
        // Never show the previous account's list while the new one loads
        *store.created_campaigns().write() = LoadState::Loading;

        let Some(owner) = account else {
            tracker.commit(&ticket, LoadState::Ready(Vec::new()), |state| *store.created_campaigns().write() = state);
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let state = match CampaignAggregator::new(&client).list(&Scope::CreatedBy(owner)).await {
                Ok(list) => LoadState::Ready(list),
                Err(e) => {
                    error!("created campaigns failed: {}", e);
                    LoadState::Failed("Failed to load your campaigns. Please try again.".to_string())
                }
            };
            tracker.commit(&ticket, state, |state| *store.created_campaigns().write() = state);
        });
    });

    view! {
        <section class="campaign-list">
            {move || campaign_grid(
                store.created_campaigns().get().map(without_donations),
                "You have not created any campaigns yet.",
            )}
        </section>
    }
}
