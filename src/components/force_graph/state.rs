use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::forces::{Body, ForceConfig, Simulation, Spring, seed_position};
use super::scale::{self, Bounds, CameraTween, ViewTransform};
use super::types::{GraphData, Group, HoverInfo, LinkKind};
use crate::data::ProjectStatus;

/// Extra hit radius around a node, in screen pixels.
pub const HIT_SLOP: f64 = 4.0;
const FIT_PADDING: f64 = 40.0;
const FIT_DURATION: f64 = 0.4;
const DRAG_ALPHA: f64 = 0.3;
const RESIZE_ALPHA: f64 = 0.5;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub name: String,
	pub group: Group,
	pub color: String,
	pub size: f64,
	pub status: Option<ProjectStatus>,
	seeded: bool,
	vx: f64,
	vy: f64,
}

/// Whether a node has a usable position yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
	Unpositioned,
	Positioned { x: f64, y: f64 },
}

impl Placement {
	fn of(info: &NodeInfo, x: f32, y: f32) -> Placement {
		let (x, y) = (x as f64, y as f64);
		if info.seeded && x.is_finite() && y.is_finite() && info.size.is_finite() {
			Placement::Positioned { x, y }
		} else {
			Placement::Unpositioned
		}
	}
}

#[derive(Clone, Debug)]
pub struct LinkRecord {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub color: String,
	pub kind: LinkKind,
	distance: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	/// Eases to 1 while something is hovered, back to 0 afterwards.
	pub highlight_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub links: Vec<LinkRecord>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	sim: Simulation,
	ids: HashMap<String, DefaultNodeIdx>,
	camera: Option<CameraTween>,
	fit_pending: bool,
}

fn arena() -> ForceGraph<NodeInfo, ()> {
	// Positions are integrated by `forces::Simulation`; the arena's own
	// solver is never stepped.
	ForceGraph::new(SimulationParameters {
		force_charge: 0.0,
		force_spring: 0.0,
		force_max: 0.0,
		node_speed: 0.0,
		damping_factor: 0.0,
	})
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		Self::with_config(data, width, height, ForceConfig::default())
	}

	pub fn with_config(data: &GraphData, width: f64, height: f64, config: ForceConfig) -> Self {
		let mut state = Self {
			graph: arena(),
			links: Vec::new(),
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			sim: Simulation::new(config),
			ids: HashMap::new(),
			camera: None,
			fit_pending: true,
		};
		state.populate(data, &HashMap::new());
		state
	}

	pub fn center_point(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	fn populate(&mut self, data: &GraphData, previous: &HashMap<String, (f32, f32)>) {
		let (cx, cy) = self.center_point();
		let mut graph = arena();
		let mut ids = HashMap::new();

		for node in &data.nodes {
			let is_center = node.group == Group::Center;
			let kept = previous.get(&node.id).copied();
			let (x, y) = match (is_center, kept) {
				(true, _) => (cx as f32, cy as f32),
				(false, Some(pos)) => pos,
				(false, None) => (cx as f32, cy as f32),
			};
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: node.size as f32,
				is_anchor: is_center,
				user_data: NodeInfo {
					id: node.id.clone(),
					name: node.name.clone(),
					group: node.group,
					color: node.color.clone(),
					size: node.size,
					status: node.status,
					seeded: is_center || kept.is_some(),
					vx: 0.0,
					vy: 0.0,
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		let mut links = Vec::with_capacity(data.links.len());
		for link in &data.links {
			let (Some(&src), Some(&tgt)) = (ids.get(&link.source), ids.get(&link.target)) else {
				continue;
			};
			let target_group = data
				.nodes
				.iter()
				.find(|n| n.id == link.target)
				.map(|n| n.group)
				.unwrap_or(Group::Contact);
			graph.add_edge(src, tgt, EdgeData::default());
			links.push(LinkRecord {
				source: src,
				target: tgt,
				color: link.color.clone(),
				kind: link.kind,
				distance: self.sim.config.link_distance(target_group),
			});
		}

		self.graph = graph;
		self.ids = ids;
		self.links = links;
	}

	/// Swap in new graph data, keeping the position of every node whose id
	/// survives, then re-run the layout.
	pub fn set_data(&mut self, data: &GraphData) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			if let Placement::Positioned { .. } = Placement::of(&node.data.user_data, node.x(), node.y()) {
				previous.insert(node.data.user_data.id.clone(), (node.x(), node.y()));
			}
		});
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
		self.populate(data, &previous);
		self.sim.reheat(1.0);
		self.fit_pending = true;
		debug!("Graph rebuilt with {} nodes, {} links", self.ids.len(), self.links.len());
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	pub fn is_settled(&self) -> bool {
		self.sim.is_settled()
	}

	pub fn placement(&self, idx: DefaultNodeIdx) -> Placement {
		let mut found = Placement::Unpositioned;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Placement::of(&node.data.user_data, node.x(), node.y());
			}
		});
		found
	}

	pub fn is_pinned(&self, idx: DefaultNodeIdx) -> bool {
		let mut pinned = false;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pinned = node.data.is_anchor;
			}
		});
		pinned
	}

	/// Call `f` for every node that can be drawn.
	pub fn visit_positioned(&self, mut f: impl FnMut(DefaultNodeIdx, &NodeInfo, f64, f64)) {
		self.graph.visit_nodes(|node| {
			if let Placement::Positioned { x, y } = Placement::of(&node.data.user_data, node.x(), node.y()) {
				f(node.index(), &node.data.user_data, x, y);
			}
		});
	}

	/// Drawn radius of a node at the current zoom.
	pub fn radius(&self, info: &NodeInfo) -> f64 {
		info.size * scale::node_scale(self.transform.k)
	}

	/// Advance one simulation tick. Returns whether the layout is still moving.
	pub fn tick(&mut self) -> bool {
		let center = self.center_point();
		let mut seed = 1;
		self.graph.visit_nodes_mut(|node| {
			if !node.data.user_data.seeded {
				let (x, y) = seed_position(seed, center.0, center.1);
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.user_data.seeded = true;
				seed += 1;
			}
		});

		let config = &self.sim.config;
		let mut slots = HashMap::new();
		let mut bodies = Vec::with_capacity(self.ids.len());
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			let (x, y) = (node.x() as f64, node.y() as f64);
			let pin = if info.group == Group::Center {
				Some(center)
			} else if node.data.is_anchor {
				Some((x, y))
			} else {
				None
			};
			slots.insert(node.index(), bodies.len());
			bodies.push(Body {
				x,
				y,
				vx: info.vx,
				vy: info.vy,
				radius: info.size,
				ring: config.ring(info.group),
				pin,
			});
		});
		let springs: Vec<Spring> = self
			.links
			.iter()
			.filter_map(|l| {
				Some(Spring {
					source: *slots.get(&l.source)?,
					target: *slots.get(&l.target)?,
					distance: l.distance,
				})
			})
			.collect();

		let running = self.sim.step(&mut bodies, &springs, center);

		self.graph.visit_nodes_mut(|node| {
			if let Some(&slot) = slots.get(&node.index()) {
				let body = &bodies[slot];
				node.data.x = body.x as f32;
				node.data.y = body.y as f32;
				node.data.user_data.vx = body.vx;
				node.data.user_data.vy = body.vy;
			}
		});

		if !running {
			debug!("Graph layout settled");
			if self.fit_pending {
				self.zoom_to_fit();
			}
		}
		running
	}

	/// Per-frame update: simulation, hover easing, camera animation.
	pub fn frame(&mut self, dt: f64) {
		if !self.sim.is_settled() {
			self.tick();
		}

		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * (dt * 8.0).min(1.0);
		if target == 0.0 && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
		}

		if let Some(tween) = self.camera.as_mut() {
			self.transform = tween.advance(dt);
			if tween.is_done() {
				self.camera = None;
			}
		}
	}

	/// Animate the camera so every positioned node is in view.
	pub fn zoom_to_fit(&mut self) {
		self.fit_pending = false;
		let mut discs = Vec::with_capacity(self.ids.len());
		self.visit_positioned(|_, info, x, y| discs.push((x, y, info.size)));
		let Some(bounds) = Bounds::around(discs) else {
			return;
		};
		let target = scale::fit_transform(bounds, self.width, self.height, FIT_PADDING);
		self.camera = Some(CameraTween::new(self.transform, target, FIT_DURATION));
	}

	pub fn is_animating_camera(&self) -> bool {
		self.camera.is_some()
	}

	/// New viewport size. The center stays pinned to the middle and the
	/// other nodes move with it, so the relative layout is kept.
	pub fn resize(&mut self, width: f64, height: f64) {
		let (dx, dy) = ((width - self.width) / 2.0, (height - self.height) / 2.0);
		self.width = width;
		self.height = height;
		let (cx, cy) = self.center_point();
		self.graph.visit_nodes_mut(|node| {
			if node.data.user_data.group == Group::Center {
				node.data.x = cx as f32;
				node.data.y = cy as f32;
			} else {
				node.data.x += dx as f32;
				node.data.y += dy as f32;
			}
		});
		if self.drag.node.is_some() {
			self.drag.node_start_x += dx;
			self.drag.node_start_y += dy;
		}
		self.sim.reheat(RESIZE_ALPHA);
		self.fit_pending = true;
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		let slop = HIT_SLOP / self.transform.k;
		let mut best: Option<(DefaultNodeIdx, f64)> = None;
		self.visit_positioned(|idx, info, x, y| {
			let d = ((x - gx).powi(2) + (y - gy).powi(2)).sqrt();
			if d <= self.radius(info) + slop && best.is_none_or(|(_, bd)| d < bd) {
				best = Some((idx, d));
			}
		});
		best.map(|(idx, _)| idx)
	}

	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		let mut start = None;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				start = Some((node.x() as f64, node.y() as f64));
				node.data.is_anchor = true;
			}
		});
		let Some((nx, ny)) = start else {
			return;
		};
		self.drag = DragState {
			node: Some(idx),
			start_x: sx,
			start_y: sy,
			node_start_x: nx,
			node_start_y: ny,
		};
		self.camera = None;
	}

	/// Move the dragged node under the pointer. The center node is grabbed
	/// like any other but snaps straight back to the middle.
	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node else {
			return;
		};
		let k = self.transform.k;
		let (nx, ny) = (
			self.drag.node_start_x + (sx - self.drag.start_x) / k,
			self.drag.node_start_y + (sy - self.drag.start_y) / k,
		);
		let (cx, cy) = self.center_point();
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				let (x, y) = if node.data.user_data.group == Group::Center {
					(cx, cy)
				} else {
					(nx, ny)
				};
				node.data.x = x as f32;
				node.data.y = y as f32;
				node.data.is_anchor = true;
				node.data.user_data.seeded = true;
			}
		});
		self.sim.reheat(DRAG_ALPHA);
	}

	/// Release the dragged node; everything but the center becomes free.
	pub fn end_drag(&mut self) {
		let Some(idx) = self.drag.node.take() else {
			return;
		};
		let (cx, cy) = self.center_point();
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				let is_center = node.data.user_data.group == Group::Center;
				node.data.is_anchor = is_center;
				if is_center {
					node.data.x = cx as f32;
					node.data.y = cy as f32;
				}
			}
		});
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node.is_some()
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
		self.camera = None;
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	pub fn zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.camera = None;
		self.transform.zoom_at(sx, sy, factor);
	}

	/// Record the hovered node. Returns whether it changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		true
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn touches_hovered(&self, link: &LinkRecord) -> bool {
		self.hover
			.node
			.is_some_and(|h| link.source == h || link.target == h)
	}

	pub fn hover_info(&self) -> Option<HoverInfo> {
		let idx = self.hover.node?;
		let mut info = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				let data = &node.data.user_data;
				info = Some(HoverInfo {
					name: data.name.clone(),
					group: data.group,
					color: data.color.clone(),
				});
			}
		});
		info
	}

	/// Drop pointer state, e.g. when the pointer leaves the canvas.
	pub fn clear_interaction(&mut self) {
		self.end_drag();
		self.end_pan();
		self.set_hover(None);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::construct::build_graph;
	use crate::components::force_graph::types::CENTER_ID;
	use crate::data::fallback_portfolio;

	fn state() -> ForceGraphState {
		ForceGraphState::new(&build_graph(&fallback_portfolio()), 800.0, 600.0)
	}

	fn position(s: &ForceGraphState, id: &str) -> (f64, f64) {
		match s.placement(s.index_of(id).unwrap()) {
			Placement::Positioned { x, y } => (x, y),
			Placement::Unpositioned => panic!("{id} is not positioned"),
		}
	}

	fn settle(s: &mut ForceGraphState) {
		for _ in 0..500 {
			s.frame(0.016);
		}
	}

	#[test]
	fn only_center_is_positioned_before_first_tick() {
		let mut s = state();
		assert_eq!(position(&s, CENTER_ID), (400.0, 300.0));
		assert_eq!(s.placement(s.index_of("react").unwrap()), Placement::Unpositioned);
		let mut drawable = 0;
		s.visit_positioned(|_, _, _, _| drawable += 1);
		assert_eq!(drawable, 1);

		s.tick();
		let mut drawable = 0;
		s.visit_positioned(|_, _, _, _| drawable += 1);
		assert_eq!(drawable, s.node_count());
	}

	#[test]
	fn layout_settles_and_fits_camera() {
		let mut s = state();
		s.tick();
		assert!(!s.is_settled());
		settle(&mut s);
		assert!(s.is_settled());
		assert!(!s.is_animating_camera());
		assert_ne!(s.transform, ViewTransform::default());
		assert_eq!(position(&s, CENTER_ID), (400.0, 300.0));
	}

	#[test]
	fn satellites_spread_away_from_center() {
		let mut s = state();
		settle(&mut s);
		let (cx, cy) = position(&s, CENTER_ID);
		let (x, y) = position(&s, "github");
		assert!(((x - cx).powi(2) + (y - cy).powi(2)).sqrt() > 50.0);
	}

	#[test]
	fn center_stays_centered_after_drag_and_resize() {
		let mut s = state();
		settle(&mut s);
		let center = s.index_of(CENTER_ID).unwrap();
		s.begin_drag(center, 400.0, 300.0);
		s.drag_to(10.0, 20.0);
		assert_eq!(position(&s, CENTER_ID), (400.0, 300.0));
		s.end_drag();
		assert_eq!(position(&s, CENTER_ID), (400.0, 300.0));
		assert!(s.is_pinned(center));

		s.resize(1024.0, 768.0);
		assert_eq!(position(&s, CENTER_ID), (512.0, 384.0));
		settle(&mut s);
		assert_eq!(position(&s, CENTER_ID), (512.0, 384.0));
	}

	#[test]
	fn resize_keeps_relative_layout() {
		let mut s = state();
		settle(&mut s);
		let before = position(&s, "python");
		s.resize(1000.0, 800.0);
		let after = position(&s, "python");
		assert!((after.0 - before.0 - 100.0).abs() < 1e-3);
		assert!((after.1 - before.1 - 100.0).abs() < 1e-3);
	}

	#[test]
	fn dragged_node_is_pinned_then_released() {
		let mut s = state();
		settle(&mut s);
		let react = s.index_of("react").unwrap();
		let start = position(&s, "react");
		s.begin_drag(react, 0.0, 0.0);
		assert!(s.is_dragging());
		s.drag_to(30.0, -40.0);
		let k = s.transform.k;
		let moved = position(&s, "react");
		assert!((moved.0 - (start.0 + 30.0 / k)).abs() < 1e-3);
		assert!((moved.1 - (start.1 - 40.0 / k)).abs() < 1e-3);
		assert!(s.is_pinned(react));

		s.tick();
		let held = position(&s, "react");
		assert!((held.0 - moved.0).abs() < 1e-3);

		s.end_drag();
		assert!(!s.is_pinned(react));
		assert!(!s.is_dragging());
	}

	#[test]
	fn hover_highlights_touching_links() {
		let mut s = state();
		settle(&mut s);
		let python = s.index_of("python").unwrap();
		assert!(s.set_hover(Some(python)));
		assert!(!s.set_hover(Some(python)));
		let touching = s.links.iter().filter(|l| s.touches_hovered(l)).count();
		assert_eq!(touching, 1);
		let info = s.hover_info().unwrap();
		assert_eq!(info.name, "Python");
		assert_eq!(info.group, Group::Skills);

		s.clear_interaction();
		assert!(s.hover_info().is_none());
	}

	#[test]
	fn hit_test_finds_nodes_under_pointer() {
		let mut s = state();
		settle(&mut s);
		let k = s.transform.k;
		let (x, y) = position(&s, CENTER_ID);
		let (sx, sy) = (x * k + s.transform.x, y * k + s.transform.y);
		assert_eq!(s.node_at_position(sx, sy), s.index_of(CENTER_ID));
		assert_eq!(s.node_at_position(-10_000.0, -10_000.0), None);
	}

	#[test]
	fn set_data_keeps_surviving_positions() {
		let mut s = state();
		settle(&mut s);
		let before = position(&s, "python");
		let mut data = fallback_portfolio();
		data.hobbies.clear();
		s.set_data(&build_graph(&data));
		assert_eq!(position(&s, "python").0 as f32, before.0 as f32);
		assert!(s.index_of("gaming").is_none());
		assert!(!s.is_settled());
		assert!(s.hover.node.is_none());
	}
}
