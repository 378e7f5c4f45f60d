use leptos::prelude::*;

use crate::components::image_modal::ImageModal;
use crate::components::reveal::Reveal;
use crate::data::Experiment;

/// Horizontal strip of prototype screenshots; a click opens the preview.
#[component]
pub fn Experiments(experiments: Vec<Experiment>) -> impl IntoView {
	let selected = RwSignal::new(None::<Experiment>);
	let count = experiments.len();

	view! {
		<Reveal id="experiments" class="experiments">
			<h2>"Experiments"</h2>
			<p class="experiments-note">{format!("{count} prototypes before this one.")}</p>
			<div class="experiments-carousel">
				{experiments
					.into_iter()
					.map(|exp| {
						let preview = exp.clone();
						view! {
							<button class="experiment" on:click=move |_| selected.set(Some(preview.clone()))>
								<img src=exp.image alt=exp.caption.clone() loading="lazy" />
								<span class="experiment-caption">{exp.caption}</span>
							</button>
						}
					})
					.collect_view()}
			</div>
			<ImageModal selected=selected />
		</Reveal>
	}
}
