//! Todo Client Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod models;
mod state;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, errors) = AppConfig::from_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("failed to init logging: {}", e).into());
    }
    for error in errors {
        log::warn!("{}; using the default", error);
    }
    log::info!("Starting todo client against {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
