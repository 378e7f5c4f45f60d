use leptos::prelude::*;
use log::{error, info};

use crate::components::force_graph::{
	CENTER_COLOR, ForceGraphCanvas, Group, HOBBY_COLOR, HoverInfo, SKILL_COLOR, build_graph,
};
use crate::data::use_portfolio;

const LEGEND: [(Group, &str); 5] = [
	(Group::Center, CENTER_COLOR),
	(Group::Skills, SKILL_COLOR),
	(Group::Projects, "#5b9a6e"),
	(Group::Hobbies, HOBBY_COLOR),
	(Group::Contact, "#6f7d96"),
];

#[derive(Clone, Debug, PartialEq)]
enum Status {
	Loading,
	Failed(String),
	Ready,
}

fn reload_page() {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(err) = window.location().reload() {
		error!("Reload failed: {err:?}");
	}
}

#[component]
fn InfoPanel(hover: RwSignal<Option<HoverInfo>>) -> impl IntoView {
	view! {
		<div class="graph-info-panel">
			{move || match hover.get() {
				Some(info) => view! {
					<span class="graph-info-swatch" style:background-color=info.color></span>
					<strong>{info.name}</strong>
					<span class="graph-info-group">{info.group.label()}</span>
				}
					.into_any(),
				None => view! { <span class="graph-info-empty">"Hover a node"</span> }.into_any(),
			}}
		</div>
	}
}

/// Hover shown by the info panel. Owned by the graph page, so it goes away
/// when the page unmounts.
pub fn hover_slot() -> RwSignal<Option<HoverInfo>> {
	RwSignal::new(None)
}

/// The portfolio as a force-directed graph, with overlays.
#[component]
pub fn GraphPage(on_back: Callback<()>) -> impl IntoView {
	let store = use_portfolio();
	let hover = hover_slot();
	let status = Memo::new(move |_| {
		if store.loading() {
			Status::Loading
		} else if let Some(err) = store.error() {
			Status::Failed(err.to_string())
		} else {
			Status::Ready
		}
	});
	let graph = Signal::derive(move || store.with_data(build_graph).unwrap_or_default());
	let title = move || store.with_data(|d| d.personal.name.clone()).unwrap_or_default();
	let on_hover = Callback::new(move |info: Option<HoverInfo>| hover.set(info));
	info!("Graph view mounted");

	view! {
		<div class="graph-page">
			{move || match status.get() {
				Status::Loading => view! {
					<div class="graph-status">
						<div class="spinner"></div>
						<p>"Loading graph..."</p>
					</div>
				}
					.into_any(),
				Status::Failed(msg) => view! {
					<div class="graph-status graph-error">
						<p>"Failed to load"</p>
						<p class="graph-error-detail">{msg}</p>
						<button on:click=move |_| reload_page()>"Reload"</button>
					</div>
				}
					.into_any(),
				Status::Ready => view! {
					<ForceGraphCanvas data=graph on_hover=on_hover fullscreen=true />
				}
					.into_any(),
			}}
			<button class="graph-back" on:click=move |_| on_back.run(())>
				"← Back to Portfolio"
			</button>
			<div class="graph-watermark">{title}</div>
			<InfoPanel hover=hover />
			<ul class="graph-legend">
				{LEGEND
					.iter()
					.map(|(group, color)| {
						view! {
							<li>
								<span class="graph-legend-dot" style:background-color=*color></span>
								{group.label()}
							</li>
						}
					})
					.collect_view()}
			</ul>
			<p class="graph-hint">"Drag nodes • Zoom with scroll"</p>
		</div>
	}
}
