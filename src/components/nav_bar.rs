//! Navigation Bar Component
//!
//! Brand, page links and the connected account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::commands;
use crate::context::AppContext;
use crate::models::Page;

/// Opens the wallet's connect prompt
#[component]
pub fn ConnectButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (connecting, set_connecting) = signal(false);

    let connect = move |_| {
        set_connecting.set(true);
        spawn_local(async move {
            match commands::connect_wallet().await {
                Ok(account) => ctx.set_account(account),
                Err(e) => warn!("wallet connection failed: {}", e),
            }
            set_connecting.set(false);
        });
    };

    view! {
        <button class="connect-btn" disabled=move || connecting.get() on:click=connect>
            {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
        </button>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let link_class = move |target: Page| {
        move || if ctx.page.get() == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <nav class="nav-bar">
            <button class="nav-brand" on:click=move |_| ctx.navigate(Page::Home)>
                "Daonation"
            </button>

            <div class="nav-links">
                <button class=link_class(Page::Home) on:click=move |_| ctx.navigate(Page::Home)>
                    "Campaigns"
                </button>
                <button class=link_class(Page::Create) on:click=move |_| ctx.navigate(Page::Create)>
                    "Create"
                </button>
                <button class=link_class(Page::Dashboard) on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "Dashboard"
                </button>
            </div>

            <div class="nav-account">
                {move || match ctx.account.get() {
                    Some(address) => view! {
                        <span class="account-badge" title=address.to_string()>{address.short()}</span>
                    }.into_any(),
                    None => view! { <ConnectButton /> }.into_any(),
                }}
            </div>
        </nav>
    }
}
