//! Campaign Details Component
//!
//! Full view of one campaign with the donate form and donation history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use daonation_core::{
    format_deadline, CampaignId, CampaignRecord, CampaignStatus, ContractGateway, PassTracker,
};

use crate::components::{Countdown, DonationForm, DonationHistory, ProgressBar, StatusBadge};
use crate::context::AppContext;
use crate::models::{LoadState, Page};

#[component]
pub fn CampaignDetails(id: CampaignId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(LoadState::<CampaignRecord>::Loading);
    // Bumped after a donation so the totals and history are read again
    let (refresh, set_refresh) = signal(0u32);
    let tracker = PassTracker::unscoped();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let _ = refresh.get();
        let tracker = tracker.clone();
        let ticket = tracker.begin();
        let client = ctx.client();
        spawn_local(async move {
            let state = match client.get_campaign(id).await {
                Ok(Some(campaign)) => LoadState::Ready(campaign),
                Ok(None) => LoadState::Failed(format!("Campaign #{} not found.", id)),
                Err(e) => {
                    error!("campaign {} failed to load: {}", id, e);
                    LoadState::Failed("Failed to load campaign. Please try again.".to_string())
                }
            };
            tracker.commit(&ticket, state, |state| set_state.set(state));
        });
    });

    let on_donated = Callback::new(move |_: ()| set_refresh.update(|n| *n += 1));

    view! {
        <section class="campaign-details">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Home)>"Back to campaigns"</button>

            {move || match state.get() {
                LoadState::Loading => view! { <p class="list-status">"Loading campaign..."</p> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="list-status error">{msg}</p> }.into_any(),
                LoadState::Ready(campaign) => {
                    let owner_url = ctx.config().explorer_address_url(&campaign.owner);
                    let status = CampaignStatus::of(&campaign);
                    view! {
                        <div class="details-layout">
                            <div class="details-main">
                                <div class="details-header">
                                    <h1>{campaign.title.clone()}</h1>
                                    <StatusBadge status=status collected=campaign.is_collected />
                                </div>
                                <p class="details-description">{campaign.description.clone()}</p>
                                <ProgressBar target=campaign.target funded=campaign.funded_amount />
                                <dl class="details-meta">
                                    <dt>"Owner"</dt>
                                    <dd>
                                        <a href=owner_url target="_blank" rel="noopener noreferrer">
                                            {campaign.owner.to_string()}
                                        </a>
                                    </dd>
                                    <dt>"Backers"</dt>
                                    <dd>{campaign.number_of_backers}</dd>
                                    <dt>"Deadline"</dt>
                                    <dd>
                                        {format_deadline(campaign.deadline)}
                                        " (" <Countdown deadline=campaign.deadline /> ")"
                                    </dd>
                                </dl>
                            </div>
                            <DonationForm campaign=campaign.clone() on_donated=on_donated />
                        </div>
                    }.into_any()
                }
            }}

            <DonationHistory campaign_id=id refresh=refresh />
        </section>
    }
}
