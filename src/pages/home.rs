use leptos::prelude::*;
use log::debug;

use crate::config::use_config;
use crate::pages::graph::GraphPage;
use crate::pages::landing::LandingPage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	#[default]
	Landing,
	Graph,
}

impl ViewMode {
	pub fn other(self) -> Self {
		match self {
			ViewMode::Landing => ViewMode::Graph,
			ViewMode::Graph => ViewMode::Landing,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Idle,
	/// The current view is fading out; the swap happens when this ends.
	Exiting,
	/// The new view is mounted and fading in.
	Entering,
}

/// Landing/graph toggle with a two-step cross-fade. The old view fully
/// exits before the new one mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeSwitch {
	mode: ViewMode,
	phase: Phase,
}

impl ModeSwitch {
	pub fn mode(&self) -> ViewMode {
		self.mode
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_transitioning(&self) -> bool {
		self.phase != Phase::Idle
	}

	/// Start leaving the current mode. Ignored while a transition runs.
	pub fn request_toggle(&mut self) -> bool {
		if self.is_transitioning() {
			return false;
		}
		self.phase = Phase::Exiting;
		true
	}

	pub fn finish_exit(&mut self) {
		if self.phase == Phase::Exiting {
			self.mode = self.mode.other();
			self.phase = Phase::Entering;
		}
	}

	pub fn finish_enter(&mut self) {
		if self.phase == Phase::Entering {
			self.phase = Phase::Idle;
		}
	}
}

/// App body: either the landing page or the graph view, never both.
#[component]
pub fn Home() -> impl IntoView {
	let transition = use_config().transition;
	let switch = RwSignal::new(ModeSwitch::default());
	let mode = Memo::new(move |_| switch.get().mode());

	let toggle = Callback::new(move |_: ()| {
		let started = switch.try_update(ModeSwitch::request_toggle).unwrap_or(false);
		if !started {
			debug!("Mode toggle ignored during transition");
			return;
		}
		set_timeout(
			move || {
				switch.update(ModeSwitch::finish_exit);
				debug!("Switched to {:?}", switch.get_untracked().mode());
				set_timeout(move || switch.update(ModeSwitch::finish_enter), transition);
			},
			transition,
		);
	});

	let fade_class = move || match switch.get().phase() {
		Phase::Idle => "mode-view",
		Phase::Exiting => "mode-view fade-out",
		Phase::Entering => "mode-view fade-in",
	};

	view! {
		<div class=fade_class style=format!("--mode-transition: {}ms", transition.as_millis())>
			{move || match mode.get() {
				ViewMode::Landing => view! { <LandingPage on_graph=toggle /> }.into_any(),
				ViewMode::Graph => view! { <GraphPage on_back=toggle /> }.into_any(),
			}}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;
	use crate::components::force_graph::{ForceGraphState, Group, HoverInfo, build_graph};
	use crate::data::fallback_portfolio;
	use crate::pages::graph::hover_slot;

	fn run_transition(switch: &mut ModeSwitch) {
		assert!(switch.request_toggle());
		switch.finish_exit();
		switch.finish_enter();
	}

	#[test]
	fn toggle_swaps_only_after_exit() {
		let mut switch = ModeSwitch::default();
		assert!(switch.request_toggle());
		assert_eq!(switch.mode(), ViewMode::Landing);
		assert_eq!(switch.phase(), Phase::Exiting);
		switch.finish_exit();
		assert_eq!(switch.mode(), ViewMode::Graph);
		assert_eq!(switch.phase(), Phase::Entering);
		switch.finish_enter();
		assert!(!switch.is_transitioning());
	}

	#[test]
	fn toggles_during_transition_are_ignored() {
		let mut switch = ModeSwitch::default();
		assert!(switch.request_toggle());
		assert!(!switch.request_toggle());
		switch.finish_exit();
		assert!(!switch.request_toggle());
		switch.finish_enter();
		assert_eq!(switch.mode(), ViewMode::Graph);
	}

	#[test]
	fn double_toggle_returns_to_start() {
		let mut switch = ModeSwitch::default();
		run_transition(&mut switch);
		run_transition(&mut switch);
		assert_eq!(switch, ModeSwitch::default());
	}

	#[test]
	fn stray_completions_do_nothing() {
		let mut switch = ModeSwitch::default();
		switch.finish_exit();
		switch.finish_enter();
		assert_eq!(switch, ModeSwitch::default());
	}

	#[test]
	fn double_toggle_leaves_no_hover_behind() {
		let root = Owner::new();
		root.set();
		let graph = build_graph(&fallback_portfolio());
		let mut switch = ModeSwitch::default();

		run_transition(&mut switch);
		assert_eq!(switch.mode(), ViewMode::Graph);
		let graph_view = root.child();
		let hover = graph_view.with(hover_slot);
		hover.set(Some(HoverInfo {
			name: "React".into(),
			group: Group::Skills,
			color: "#9d8cc2".into(),
		}));
		let mut canvas = ForceGraphState::new(&graph, 800.0, 600.0);
		let react = canvas.index_of("react").unwrap();
		assert!(canvas.set_hover(Some(react)));
		assert!(canvas.hover_info().is_some());

		run_transition(&mut switch);
		graph_view.cleanup();
		drop(canvas);
		assert_eq!(switch.mode(), ViewMode::Landing);
		assert_eq!(hover.try_get_untracked(), None);

		run_transition(&mut switch);
		let remount = root.child();
		let hover = remount.with(hover_slot);
		let canvas = ForceGraphState::new(&graph, 800.0, 600.0);
		assert_eq!(hover.get_untracked(), None);
		assert_eq!(canvas.hover_info(), None);
		assert!(canvas.hover.node.is_none());
	}
}
