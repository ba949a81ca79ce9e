//! Donated Campaigns Component
//!
//! Campaigns the active account backed, each once, with the amount given.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use daonation_core::DonationAggregator;

use crate::components::campaign_list::campaign_grid;
use crate::context::AppContext;
use crate::models::LoadState;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DonatedCampaigns() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let tracker = ctx.tracker();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let account = ctx.account.get();
        let tracker = tracker.clone();
        let ticket = tracker.begin();
        *store.backed_campaigns().write() = LoadState::Loading;

        let Some(backer) = account else {
            tracker.commit(&ticket, LoadState::Ready(Vec::new()), |state| *store.backed_campaigns().write() = state);
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let state = match DonationAggregator::new(&client).load_backed(&backer).await {
                Ok(backed) => LoadState::Ready(backed),
                Err(e) => {
                    error!("donated campaigns failed: {}", e);
                    LoadState::Failed("Failed to load data. Please try again.".to_string())
                }
            };
            tracker.commit(&ticket, state, |state| *store.backed_campaigns().write() = state);
        });
    });

    view! {
        <section class="campaign-list">
            {move || campaign_grid(
                store.backed_campaigns().get().map(|backed| {
                    backed.into_iter().map(|b| (b.campaign, Some(b.donation.amount))).collect()
                }),
                "No donation records found.",
            )}
        </section>
    }
}
