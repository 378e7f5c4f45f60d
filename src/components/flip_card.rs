use leptos::prelude::*;

use crate::data::PersonalCard;

/// Which face of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
	flipped: bool,
}

impl FlipState {
	pub fn toggle(&mut self) {
		self.flipped = !self.flipped;
	}

	pub fn is_flipped(&self) -> bool {
		self.flipped
	}
}

/// Two-faced card; a click turns it over.
#[component]
pub fn FlipCard(card: PersonalCard) -> impl IntoView {
	let state = RwSignal::new(FlipState::default());
	let PersonalCard { front, back, color, .. } = card;

	view! {
		<div
			class="flip-card"
			class:flipped=move || state.get().is_flipped()
			on:click=move |_| state.update(FlipState::toggle)
		>
			<div class="flip-card-inner">
				<div class="flip-card-face flip-card-front" style:background-color=color.clone()>
					<span class="flip-card-icon">{front.icon}</span>
					<h3>{front.title}</h3>
					<p class="flip-card-subtitle">{front.subtitle}</p>
				</div>
				<div class="flip-card-face flip-card-back" style:border-color=color>
					<h3>{back.title}</h3>
					<p>{back.description}</p>
					<ul>
						{back.details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
					</ul>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_face_up_and_toggles() {
		let mut state = FlipState::default();
		assert!(!state.is_flipped());
		state.toggle();
		assert!(state.is_flipped());
		state.toggle();
		assert!(!state.is_flipped());
	}
}
