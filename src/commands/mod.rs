//! Wallet Bridge Wrappers
//!
//! Frontend bindings to the contract and wallet, organized by concern.
//! The bridge (`window.__DAONATION__`) wraps the wallet SDK; everything it
//! returns is decoded here into core types.

mod campaign;
mod transaction;
mod wallet;
mod client;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use daonation_core::{ContractConfig, GatewayError, GatewayResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__DAONATION__"], js_name = read)]
    async fn bridge_read(config: JsValue, method: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__DAONATION__"], js_name = write)]
    async fn bridge_write(config: JsValue, method: &str, args: JsValue, value: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__DAONATION__"], js_name = connect)]
    async fn bridge_connect() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__DAONATION__"], js_name = activeAccount)]
    fn bridge_active_account() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__DAONATION__"], js_name = onAccountChange)]
    fn bridge_on_account_change(callback: &Closure<dyn FnMut(JsValue)>) -> Result<(), JsValue>;
}

// Reads and writes are reached through ContractClient
pub use wallet::*;
pub use client::ContractClient;

/// Best-effort text of a thrown JS value
fn js_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn to_js<T: Serialize>(value: &T) -> GatewayResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| GatewayError::Unavailable(format!("Serialization error: {}", e)))
}

/// One contract read through the bridge
async fn read<A: Serialize, T: DeserializeOwned>(
    config: &ContractConfig,
    method: &'static str,
    args: &A,
) -> GatewayResult<T> {
    let result = bridge_read(to_js(config)?, method, to_js(args)?)
        .await
        .map_err(|e| GatewayError::Read { method, message: js_message(&e) })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| GatewayError::Decode {
        field: method,
        value: e.to_string(),
    })
}

/// One contract write; resolves once the wallet reports the transaction
async fn write<A: Serialize, T: DeserializeOwned>(
    config: &ContractConfig,
    method: &'static str,
    args: &A,
    value: &str,
) -> GatewayResult<T> {
    let result = bridge_write(to_js(config)?, method, to_js(args)?, value)
        .await
        .map_err(|e| GatewayError::Rejected(js_message(&e)))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| GatewayError::Decode {
        field: method,
        value: e.to_string(),
    })
}
