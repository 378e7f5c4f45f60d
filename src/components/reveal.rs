use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the section that must be on screen before it reveals.
const THRESHOLD: f64 = 0.15;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Section wrapper that fades and slides its children in the first time it
/// scrolls into view. `revealed` is set at that moment and never cleared.
#[component]
pub fn Reveal(
	#[prop(optional, into)] id: Option<String>,
	#[prop(optional, into)] class: String,
	#[prop(optional)] revealed: Option<RwSignal<bool>>,
	children: Children,
) -> impl IntoView {
	let revealed = revealed.unwrap_or_else(|| RwSignal::new(false));
	let node_ref = NodeRef::<leptos::html::Section>::new();
	let handle = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		if handle.with_value(Option::is_some) {
			return;
		}
		let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					revealed.set(true);
					observer.unobserve(&entry.target());
				}
			}
		});
		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(THRESHOLD));
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => {
				observer.observe(&el);
				handle.set_value(Some((observer, callback)));
			}
			Err(err) => {
				warn!("IntersectionObserver unavailable, showing section at once: {err:?}");
				revealed.set(true);
			}
		}
	});

	on_cleanup(move || {
		if let Some(Some((observer, _callback))) = handle.try_update_value(Option::take) {
			observer.disconnect();
		}
	});

	view! {
		<section
			node_ref=node_ref
			id=id
			class=format!("reveal {class}")
			class:visible=move || revealed.get()
		>
			{children()}
		</section>
	}
}
