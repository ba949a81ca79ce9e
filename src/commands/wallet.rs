//! Wallet Account Commands
//!
//! Connection itself is the wallet SDK's job; these only ask it which
//! account is active and listen for switches.

use log::warn;
use wasm_bindgen::prelude::*;

use daonation_core::Address;

use super::{bridge_active_account, bridge_connect, bridge_on_account_change, js_message};

fn to_address(value: JsValue) -> Option<Address> {
    value.as_string().filter(|s| !s.trim().is_empty()).map(Address::new)
}

/// Account currently connected, if any
pub fn active_account() -> Option<Address> {
    match bridge_active_account() {
        Ok(value) => to_address(value),
        Err(e) => {
            warn!("wallet bridge not ready: {}", js_message(&e));
            None
        }
    }
}

/// Open the wallet's connect prompt
pub async fn connect_wallet() -> Result<Option<Address>, String> {
    bridge_connect().await.map(to_address).map_err(|e| js_message(&e))
}

/// Call `on_change` on every account switch or disconnect
pub fn watch_account(mut on_change: impl FnMut(Option<Address>) + 'static) -> Result<(), String> {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| on_change(to_address(value)));
    bridge_on_account_change(&callback).map_err(|e| js_message(&e))?;
    // Lives as long as the page
    callback.forget();
    Ok(())
}
