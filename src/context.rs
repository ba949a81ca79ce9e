//! Application Context
//!
//! Shared state provided via Leptos Context API. The active account lives
//! here explicitly, so every load can be keyed to it.

use leptos::prelude::*;

use daonation_core::{AccountSelection, Address, ContractConfig, PassTracker};

use crate::commands::ContractClient;
use crate::models::Page;

/// App-wide signals and services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<ContractClient>,
    selection: StoredValue<AccountSelection>,
    /// Connected wallet account - read
    pub account: ReadSignal<Option<Address>>,
    /// Connected wallet account - write
    set_account: WriteSignal<Option<Address>>,
    /// Trigger to reload contract data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload contract data - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current screen - read
    pub page: ReadSignal<Page>,
    /// Current screen - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        client: ContractClient,
        selection: AccountSelection,
        account: (ReadSignal<Option<Address>>, WriteSignal<Option<Address>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            client: StoredValue::new(client),
            selection: StoredValue::new(selection),
            account: account.0,
            set_account: account.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            page: page.0,
            set_page: page.1,
        }
    }

    pub fn client(&self) -> ContractClient {
        self.client.get_value()
    }

    pub fn config(&self) -> ContractConfig {
        self.client.with_value(|c| c.config().clone())
    }

    /// Pass sequence for one view's loads
    pub fn tracker(&self) -> PassTracker {
        self.selection.with_value(|s| s.tracker())
    }

    /// Switch the active account. The selection is updated before the signal
    /// so loads triggered by the signal see the new account.
    pub fn set_account(&self, address: Option<Address>) {
        let changed = self.selection.with_value(|s| s.select(address.clone()));
        if changed {
            self.set_account.set(address);
        }
    }

    /// Trigger a reload of contract data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}
