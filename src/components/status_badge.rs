//! Status Badge Component

use leptos::prelude::*;

use daonation_core::CampaignStatus;

/// Ongoing/Ended badge, plus a Collected badge once funds are withdrawn
#[component]
pub fn StatusBadge(status: CampaignStatus, collected: bool) -> impl IntoView {
    view! {
        <span class="status-badges">
            <span class=status.css_class()>{status.label()}</span>
            {collected.then(|| view! { <span class="status-badge collected">"Collected"</span> })}
        </span>
    }
}
