//! Donation History Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use daonation_core::{format_ether_fixed, CampaignId, Contribution, DonationAggregator, PassTracker};

use crate::context::AppContext;
use crate::models::LoadState;

#[component]
pub fn DonationHistory(campaign_id: CampaignId, refresh: ReadSignal<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(LoadState::<Vec<Contribution>>::Loading);
    let tracker = PassTracker::unscoped();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = refresh.get();
        let tracker = tracker.clone();
        let ticket = tracker.begin();
        let client = ctx.client();
        spawn_local(async move {
            let state = match DonationAggregator::new(&client).contribution_history(campaign_id).await {
                Ok(rows) => LoadState::Ready(rows),
                Err(e) => {
                    error!("donation history for {} failed: {}", campaign_id, e);
                    LoadState::Failed("Failed to load donation history.".to_string())
                }
            };
            tracker.commit(&ticket, state, |state| set_state.set(state));
        });
    });

    view! {
        <section class="donation-history">
            <h2>"Donation History"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <p class="list-status">"Loading donations..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="list-status error">{msg}</p> }.into_any(),
                LoadState::Ready(rows) if rows.is_empty() => {
                    view! { <p class="list-status">"No donations yet. Be the first to donate!"</p> }.into_any()
                }
                LoadState::Ready(rows) => view! {
                    <table class="history-table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Donor"</th>
                                <th>"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .enumerate()
                                .map(|(i, row)| view! {
                                    <tr>
                                        <td>{i + 1}</td>
                                        <td title=row.contributor.to_string()>{row.contributor.short()}</td>
                                        <td>{format_ether_fixed(row.amount, 6)} " ETH"</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
