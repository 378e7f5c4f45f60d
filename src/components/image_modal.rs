use leptos::prelude::*;

use crate::data::Experiment;

/// Full-screen preview of an experiment image. Clicking the backdrop or the
/// close button clears `selected`.
#[component]
pub fn ImageModal(selected: RwSignal<Option<Experiment>>) -> impl IntoView {
	let close = move |_: leptos::ev::MouseEvent| selected.set(None);

	view! {
		<Show when=move || selected.with(Option::is_some)>
			<div class="image-modal" on:click=close>
				{move || {
					selected
						.get()
						.map(|exp| {
							view! {
								<figure class="image-modal-content" on:click=|ev| ev.stop_propagation()>
									<img src=exp.image alt=exp.caption.clone() />
									<figcaption>{exp.caption}</figcaption>
									<button class="image-modal-close" on:click=close aria-label="Close">
										"×"
									</button>
								</figure>
							}
						})
				}}
			</div>
		</Show>
	}
}
