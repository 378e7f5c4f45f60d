use leptos::mount::mount_to_body;
use leptos::prelude::*;
use portfolio_graph::config::AppConfig;
use portfolio_graph::{App, init_logging};

fn main() {
	let config = AppConfig::from_build_env();
	init_logging(&config);
	mount_to_body(move || view! { <App config=config.clone() /> })
}
