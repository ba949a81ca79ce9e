//! Create Campaign Component
//!
//! Four-field form. Input that fails validation is shown inline and never
//! sent; a rejected transaction keeps the input for another try.

use leptos::prelude::*;
use leptos::task::spawn_local;

use daonation_core::{submit_campaign, CreateCampaignForm, SubmitError};

use crate::context::AppContext;
use crate::models::{Notice, Page};
use crate::store::{store_show_notice, use_app_store};

#[component]
pub fn CreateCampaign() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (target, set_target) = signal(String::new());
    let (duration, set_duration) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let form = move || CreateCampaignForm {
        title: title.get(),
        description: description.get(),
        target: target.get(),
        duration_days: duration.get(),
    };
    let can_submit = move || !busy.get() && form().is_complete();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if ctx.account.get_untracked().is_none() {
            set_error.set(Some("Please connect your wallet first.".to_string()));
            return;
        }
        let input = form();
        let client = ctx.client();
        let config = ctx.config();

        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match submit_campaign(&client, &input).await {
                Ok(tx) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_target.set(String::new());
                    set_duration.set(String::new());
                    store_show_notice(
                        &store,
                        Notice::success(
                            "Campaign Created!",
                            format!("\"{}\" is now accepting donations.", input.title.trim()),
                            Some(config.explorer_tx_url(&tx.transaction_hash)),
                        ),
                    );
                    ctx.reload();
                }
                Err(SubmitError::Rejected(e)) => {
                    store_show_notice(&store, Notice::failure("Campaign Creation Failed", e.to_string()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="create-campaign">
            <h1>"Create New Campaign"</h1>
            <form class="campaign-form" on:submit=submit>
                <label for="campaign-title">"Campaign Title"</label>
                <input
                    id="campaign-title"
                    type="text"
                    placeholder="Enter campaign title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label for="campaign-description">"Description"</label>
                <textarea
                    id="campaign-description"
                    rows="4"
                    placeholder="Describe what the funds are for"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <div class="form-row">
                    <div class="form-field">
                        <label for="campaign-target">"Target Amount (ETH)"</label>
                        <input
                            id="campaign-target"
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="1.0"
                            prop:value=move || target.get()
                            on:input=move |ev| set_target.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label for="campaign-duration">"Duration (days)"</label>
                        <input
                            id="campaign-duration"
                            type="number"
                            min="1"
                            step="1"
                            placeholder="30"
                            prop:value=move || duration.get()
                            on:input=move |ev| set_duration.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="form-actions">
                    <button type="button" class="secondary-btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn" disabled=move || !can_submit()>
                        {move || if busy.get() { "Creating Campaign..." } else { "Create Campaign" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
