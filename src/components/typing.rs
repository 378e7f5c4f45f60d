use std::time::Duration;

use leptos::prelude::*;
use log::warn;

/// The first `count` characters of `text`.
pub fn visible_prefix(text: &str, count: usize) -> &str {
	match text.char_indices().nth(count) {
		Some((end, _)) => &text[..end],
		None => text,
	}
}

/// Whether the caret should stop blinking.
pub fn is_done(shown: usize, total: usize) -> bool {
	shown >= total
}

/// Types `text` out one character per `step`, with a blinking caret.
#[component]
pub fn TypingText(
	#[prop(into)] text: String,
	#[prop(default = Duration::from_millis(60))] step: Duration,
) -> impl IntoView {
	let total = text.chars().count();
	let shown = RwSignal::new(0usize);

	match set_interval_with_handle(
		move || {
			if shown.get_untracked() < total {
				shown.update(|n| *n += 1);
			}
		},
		step,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => {
			warn!("Typing animation disabled: {err:?}");
			shown.set(total);
		}
	}

	let done = move || is_done(shown.get(), total);

	view! {
		<span class="typing">
			{move || visible_prefix(&text, shown.get()).to_string()}
			<span class="typing-caret" class:done=done>
				"|"
			</span>
		</span>
	}
}
