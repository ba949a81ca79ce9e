//! Campaign Card Component
//!
//! Summary of one campaign in a list; opens the detail page on click.

use leptos::prelude::*;

use daonation_core::{format_deadline, format_ether, CampaignRecord, CampaignStatus, Wei};

use crate::components::{ProgressBar, StatusBadge};
use crate::context::AppContext;
use crate::models::Page;

#[component]
pub fn CampaignCard(
    campaign: CampaignRecord,
    /// What the viewer gave, shown on the donations tab
    donation: Option<Wei>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = campaign.id;
    let status = CampaignStatus::of(&campaign);

    view! {
        <div class="campaign-card" on:click=move |_| ctx.navigate(Page::Campaign(id))>
            <div class="campaign-card-header">
                <h3 class="campaign-title">{campaign.title.clone()}</h3>
                <StatusBadge status=status collected=campaign.is_collected />
            </div>
            <p class="campaign-description">{campaign.description.clone()}</p>

            <ProgressBar target=campaign.target funded=campaign.funded_amount />

            <div class="campaign-meta">
                <span class="meta-owner" title=campaign.owner.to_string()>"Owner: " {campaign.owner.short()}</span>
                <span class="meta-backers">{campaign.number_of_backers} " backers"</span>
                <span class="meta-deadline">"Deadline: " {format_deadline(campaign.deadline)}</span>
                {donation.map(|amount| view! {
                    <span class="meta-donation">"Your donation: " {format_ether(amount)} " ETH"</span>
                })}
            </div>
        </div>
    }
}
