use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::render;
use super::state::ForceGraphState;
use super::types::{GraphData, HoverInfo};

/// Longest frame step fed to the camera and hover easing, in seconds.
const MAX_FRAME_DT: f64 = 0.05;

/// Frame timing for the animation loop. Stops for good once the owning
/// view has been unmounted.
pub struct FrameClock {
	alive: Arc<AtomicBool>,
	last: Option<f64>,
}

impl FrameClock {
	pub fn new(alive: Arc<AtomicBool>) -> Self {
		Self { alive, last: None }
	}

	/// Seconds since the previous frame, or `None` once the loop must end.
	pub fn advance(&mut self, now: f64) -> Option<f64> {
		if !self.alive.load(Ordering::Relaxed) {
			return None;
		}
		let dt = self
			.last
			.replace(now)
			.map(|prev| ((now - prev) / 1000.0).clamp(0.0, MAX_FRAME_DT))
			.unwrap_or(0.016);
		Some(dt)
	}
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas running the force layout for `data`, with drag, pan, zoom and hover.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	/// Called whenever the node under the pointer changes.
	#[prop(optional, into)]
	on_hover: Option<Callback<Option<HoverInfo>>>,
	#[prop(default = true)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cursor = RwSignal::new("grab");
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, alive_init) = (state.clone(), animate.clone(), alive.clone());

	let notify_hover = move |hover: Option<HoverInfo>| {
		if let Some(cb) = on_hover {
			cb.run(hover);
		}
	};

	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(s) = state_init.borrow_mut().as_mut() {
			s.set_data(&graph);
			return;
		}

		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window; graph view disabled");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			let parent = canvas.parent_element();
			(
				width.unwrap_or_else(|| parent.as_ref().map(|p| p.client_width() as f64).unwrap_or(800.0)),
				height.unwrap_or_else(|| parent.as_ref().map(|p| p.client_height() as f64).unwrap_or(600.0)),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("Canvas context is not 2d");
					return;
				}
			},
			_ => {
				error!("Canvas 2d context unavailable");
				return;
			}
		};
		*state_init.borrow_mut() = Some(ForceGraphState::new(&graph, w, h));
		info!(
			"Graph view started: {} nodes, {} links, {w}x{h}",
			graph.nodes.len(),
			graph.links.len()
		);

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let mut clock = FrameClock::new(alive_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			let Some(dt) = clock.advance(now) else {
				state_anim.borrow_mut().take();
				// Still running inside this closure; release it on the next turn.
				let finished = animate_inner.borrow_mut().take();
				set_timeout(move || drop(finished), Duration::ZERO);
				return;
			};
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.frame(dt);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_resize = state.clone();
	let resize_handle = fullscreen.then(|| {
		window_event_listener(leptos::ev::resize, move |_| {
			let (Some(canvas), Some((nw, nh))) = (
				canvas_ref.get_untracked(),
				web_sys::window().as_ref().and_then(window_size),
			) else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			canvas.set_width(nw as u32);
			canvas.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		})
	});

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		if let Some(handle) = resize_handle {
			handle.remove();
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.begin_drag(idx, x, y);
			} else {
				s.begin_pan(x, y);
			}
			cursor.set("grabbing");
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let mut changed = None;
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.is_dragging() {
				s.drag_to(x, y);
			} else if s.pan.active {
				s.pan_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				if s.set_hover(hovered) {
					changed = Some(s.hover_info());
				}
				cursor.set(if hovered.is_some() { "pointer" } else { "grab" });
			}
		}
		if let Some(hover) = changed {
			notify_hover(hover);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
			s.end_pan();
		}
		cursor.set("grab");
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.clear_interaction();
		}
		cursor.set("grab");
		notify_hover(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block;"
			style:cursor=move || cursor.get()
		/>
	}
}
