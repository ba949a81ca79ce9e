//! Runtime Configuration
//!
//! The hosting page may set `window.DAONATION_CONFIG` to point the app at
//! another deployment; anything missing falls back to the Sepolia defaults.

use log::{info, warn};
use wasm_bindgen::JsValue;

use daonation_core::ContractConfig;

const CONFIG_GLOBAL: &str = "DAONATION_CONFIG";

pub fn load_config() -> ContractConfig {
    let Some(window) = web_sys::window() else {
        return ContractConfig::default();
    };

    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return ContractConfig::default(),
    };

    match serde_wasm_bindgen::from_value::<ContractConfig>(raw) {
        Ok(config) => {
            info!("using contract {} on chain {}", config.address, config.chain_id);
            config
        }
        Err(e) => {
            warn!("ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            ContractConfig::default()
        }
    }
}
