use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::components::flip_card::FlipCard;
use crate::components::reveal::Reveal;
use crate::config::use_config;
use crate::data::{PersonalCard, fallback_cards, fetch_json};

/// "Get to know me" grid. Cards come from the main document when it has
/// any; otherwise from the standalone cards file, then the built-in set.
#[component]
pub fn GetToKnowMe(cards: Vec<PersonalCard>) -> impl IntoView {
	let loaded = RwSignal::new((!cards.is_empty()).then_some(cards));

	if loaded.get_untracked().is_none() {
		let url = use_config().cards_url;
		spawn_local(async move {
			let cards = match fetch_json::<Vec<PersonalCard>>(&url).await {
				Ok(cards) if !cards.is_empty() => {
					info!("Loaded {} personal cards from {url}", cards.len());
					cards
				}
				Ok(_) => {
					warn!("{url} has no cards, using built-in set");
					fallback_cards()
				}
				Err(err) => {
					warn!("Failed to load personal cards from {url}: {err}");
					fallback_cards()
				}
			};
			loaded.set(Some(cards));
		});
	}

	view! {
		<Reveal id="get-to-know-me" class="get-to-know-me">
			<h2>"Get to Know Me"</h2>
			{move || match loaded.get() {
				None => view! { <div class="spinner"></div> }.into_any(),
				Some(cards) => view! {
					<div class="card-grid">
						{cards.into_iter().map(|card| view! { <FlipCard card=card /> }).collect_view()}
					</div>
				}
					.into_any(),
			}}
		</Reveal>
	}
}
