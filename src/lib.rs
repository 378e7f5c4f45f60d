//! Leptos client-side portfolio: landing page and graph view.

use leptos::prelude::*;
use leptos_meta::*;
use log::info;

// Modules
pub mod components;
pub mod config;
pub mod data;
pub mod pages;

// Browser tests live in tests/web.rs.
#[cfg(test)]
use wasm_bindgen_test as _;

use crate::config::{AppConfig, provide_config};
use crate::data::provide_portfolio_store;
use crate::pages::home::Home;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &AppConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
}

/// Root component: provides configuration and the portfolio store, then
/// renders the landing/graph switch.
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = config.unwrap_or_else(AppConfig::from_build_env);
	provide_portfolio_store(config.portfolio_url.clone());
	provide_config(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		<Title text="Portfolio" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Home />
	}
}
