//! Notice Modal Component
//!
//! Transaction result popup driven by the store's notice field.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeModal() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.notice().get().map(|notice| {
            let title_class = if notice.success { "modal-title success" } else { "modal-title failure" };
            view! {
                <div class="modal-backdrop" on:click=move |_| store_dismiss_notice(&store)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <h3 class=title_class>{notice.title}</h3>
                        <p class="modal-message">{notice.message}</p>
                        {notice.tx_url.map(|url| view! {
                            <a class="modal-link" href=url target="_blank" rel="noopener noreferrer">
                                "View on explorer"
                            </a>
                        })}
                        <button class="modal-close" on:click=move |_| store_dismiss_notice(&store)>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
