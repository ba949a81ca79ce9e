//! Daonation Frontend Entry Point

mod models;
mod commands;
mod config;
mod context;
mod store;
mod components;
mod app;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init_logger(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
