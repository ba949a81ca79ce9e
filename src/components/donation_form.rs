//! Donation Form Component
//!
//! Amount input and donate button, disabled with a reason when the campaign
//! or account cannot donate.

use leptos::prelude::*;
use leptos::task::spawn_local;

use daonation_core::{donation_guard, submit_donation, CampaignRecord, DonationGuard, SubmitError};

use crate::components::ConnectButton;
use crate::context::AppContext;
use crate::models::Notice;
use crate::store::{store_show_notice, use_app_store};

#[component]
pub fn DonationForm(
    campaign: CampaignRecord,
    /// Called after a confirmed donation
    on_donated: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let campaign = StoredValue::new(campaign);

    let (amount, set_amount) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let guard = move || campaign.with_value(|c| donation_guard(c, ctx.account.get().as_ref()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let account = ctx.account.get_untracked();
        let value = amount.get_untracked();
        let campaign = campaign.get_value();
        let client = ctx.client();
        let config = ctx.config();

        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match submit_donation(&client, &campaign, account.as_ref(), &value).await {
                Ok(tx) => {
                    set_amount.set(String::new());
                    store_show_notice(
                        &store,
                        Notice::success(
                            "Donation Successful!",
                            format!("You donated {} ETH to \"{}\".", value.trim(), campaign.title),
                            Some(config.explorer_tx_url(&tx.transaction_hash)),
                        ),
                    );
                    on_donated.run(());
                }
                Err(SubmitError::Rejected(e)) => {
                    store_show_notice(&store, Notice::failure("Donation Failed", e.to_string()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <aside class="donation-form">
            <h2>"Support this campaign"</h2>
            {move || match guard() {
                DonationGuard::Allowed => view! {
                    <form on:submit=submit>
                        <label for="donation-amount">"Amount (ETH)"</label>
                        <input
                            id="donation-amount"
                            type="number"
                            min="0"
                            step="0.001"
                            placeholder="0.01"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <button
                            type="submit"
                            class="primary-btn"
                            disabled=move || busy.get() || amount.get().trim().is_empty()
                        >
                            {move || if busy.get() { "Processing..." } else { "Donate" }}
                        </button>
                    </form>
                }.into_any(),
                DonationGuard::ConnectWallet => view! {
                    <p class="donation-blocked">{DonationGuard::ConnectWallet.message()}</p>
                    <ConnectButton />
                }.into_any(),
                blocked => view! { <p class="donation-blocked">{blocked.message()}</p> }.into_any(),
            }}
        </aside>
    }
}
