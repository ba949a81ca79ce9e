//! Dashboard Component
//!
//! The connected account's created and donated campaigns.

use leptos::prelude::*;

use crate::components::{ConnectButton, CreatedCampaigns, DonatedCampaigns};
use crate::context::AppContext;
use crate::models::{DashboardTab, Page};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (tab, set_tab) = signal(DashboardTab::Created);
    // Only connect/disconnect rebuilds the page; account switches are
    // handled by the lists themselves
    let connected = Memo::new(move |_| ctx.account.get().is_some());

    let tab_class = move |target: DashboardTab| {
        move || if tab.get() == target { "dashboard-tab active" } else { "dashboard-tab" }
    };

    view! {
        <section class="dashboard">
            {move || if !connected.get() {
                view! {
                    <div class="dashboard-empty">
                        <p>"You need to connect your wallet to view your dashboard."</p>
                        <ConnectButton />
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="dashboard-header">
                        <h1>"Dashboard"</h1>
                        <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Create)>
                            "Create Campaign"
                        </button>
                    </div>

                    <nav class="dashboard-tabs">
                        <button
                            class=tab_class(DashboardTab::Created)
                            on:click=move |_| set_tab.set(DashboardTab::Created)
                        >
                            "Created Campaigns"
                        </button>
                        <button
                            class=tab_class(DashboardTab::Backed)
                            on:click=move |_| set_tab.set(DashboardTab::Backed)
                        >
                            "Donated Campaigns"
                        </button>
                    </nav>

                    {move || match tab.get() {
                        DashboardTab::Created => view! { <CreatedCampaigns /> }.into_any(),
                        DashboardTab::Backed => view! { <DonatedCampaigns /> }.into_any(),
                    }}
                }.into_any()
            }}
        </section>
    }
}
