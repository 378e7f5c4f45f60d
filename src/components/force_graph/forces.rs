//! Layout forces: tiered links, bounded many-body repulsion, collision and
//! radial rings, integrated with velocity decay under a cooling `alpha`.

use std::f64::consts::PI;

use super::types::Group;

/// Tuning for [`Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub struct ForceConfig {
	/// Rest length of a link, indexed by the target's [`Group::tier`].
	pub link_distance: [f64; 5],
	pub link_strength: f64,
	/// Negative values repel.
	pub charge_strength: f64,
	pub charge_distance_min: f64,
	pub charge_distance_max: f64,
	pub collide_padding: f64,
	pub collide_strength: f64,
	/// Ring radius per tier; the center has none.
	pub radial_radius: [f64; 5],
	pub radial_strength: f64,
	pub velocity_decay: f64,
	pub alpha_min: f64,
	/// Ticks until a reheated simulation is considered settled.
	pub cooldown_ticks: u32,
}

impl Default for ForceConfig {
	fn default() -> Self {
		Self {
			link_distance: [0.0, 90.0, 140.0, 180.0, 210.0],
			link_strength: 0.3,
			charge_strength: -300.0,
			charge_distance_min: 10.0,
			charge_distance_max: 450.0,
			collide_padding: 6.0,
			collide_strength: 0.7,
			radial_radius: [0.0, 100.0, 160.0, 210.0, 250.0],
			radial_strength: 0.08,
			velocity_decay: 0.4,
			alpha_min: 0.001,
			cooldown_ticks: 100,
		}
	}
}

impl ForceConfig {
	pub fn link_distance(&self, target: Group) -> f64 {
		self.link_distance[target.tier()]
	}

	pub fn ring(&self, group: Group) -> f64 {
		self.radial_radius[group.tier()]
	}

	/// Per-tick decay bringing alpha from 1 to `alpha_min` in `cooldown_ticks`.
	fn alpha_decay(&self) -> f64 {
		1.0 - self.alpha_min.powf(1.0 / self.cooldown_ticks.max(1) as f64)
	}
}

/// A node as the solver sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	/// Target distance from the center for the radial force.
	pub ring: f64,
	/// Fixed position, overriding integration.
	pub pin: Option<(f64, f64)>,
}

#[cfg(test)]
impl Body {
	pub fn free(x: f64, y: f64, radius: f64, ring: f64) -> Self {
		Self {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius,
			ring,
			pin: None,
		}
	}
}

/// Link between two bodies, by slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub source: usize,
	pub target: usize,
	pub distance: f64,
}

/// Seed position `i` on a phyllotaxis spiral around `(cx, cy)`.
pub fn seed_position(i: usize, cx: f64, cy: f64) -> (f64, f64) {
	let radius = 10.0 * (0.5 + i as f64).sqrt();
	let angle = i as f64 * PI * (3.0 - 5f64.sqrt());
	(cx + radius * angle.cos(), cy + radius * angle.sin())
}

// Deterministic nudge for coincident bodies.
fn jiggle(i: usize) -> f64 {
	((i as f64 * 12.9898).sin() * 43758.5453).fract() * 1e-6 + 1e-6
}

pub struct Simulation {
	pub config: ForceConfig,
	alpha: f64,
	ticks: u32,
}

impl Simulation {
	pub fn new(config: ForceConfig) -> Self {
		Self {
			config,
			alpha: 1.0,
			ticks: 0,
		}
	}

	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	pub fn is_settled(&self) -> bool {
		self.ticks >= self.config.cooldown_ticks || self.alpha < self.config.alpha_min
	}

	/// Restart cooling from `alpha` (never lowering a hotter simulation).
	pub fn reheat(&mut self, alpha: f64) {
		self.alpha = self.alpha.max(alpha);
		self.ticks = 0;
	}

	/// Advance one tick. Returns whether the simulation is still running.
	pub fn step(&mut self, bodies: &mut [Body], springs: &[Spring], center: (f64, f64)) -> bool {
		if self.is_settled() {
			return false;
		}
		self.alpha += -self.alpha * self.config.alpha_decay();
		self.ticks += 1;

		self.apply_links(bodies, springs);
		self.apply_charge(bodies);
		self.apply_collide(bodies);
		self.apply_radial(bodies, center);

		let keep = 1.0 - self.config.velocity_decay;
		for body in bodies.iter_mut() {
			match body.pin {
				Some((px, py)) => {
					body.x = px;
					body.y = py;
					body.vx = 0.0;
					body.vy = 0.0;
				}
				None => {
					body.vx *= keep;
					body.vy *= keep;
					body.x += body.vx;
					body.y += body.vy;
				}
			}
		}
		!self.is_settled()
	}

	fn apply_links(&self, bodies: &mut [Body], springs: &[Spring]) {
		let mut degree = vec![0usize; bodies.len()];
		for s in springs {
			degree[s.source] += 1;
			degree[s.target] += 1;
		}
		for (i, s) in springs.iter().enumerate() {
			let (src, tgt) = (&bodies[s.source], &bodies[s.target]);
			let mut dx = tgt.x + tgt.vx - src.x - src.vx;
			let mut dy = tgt.y + tgt.vy - src.y - src.vy;
			if dx == 0.0 && dy == 0.0 {
				dx = jiggle(i);
				dy = jiggle(i + 1);
			}
			let len = (dx * dx + dy * dy).sqrt();
			let k = (len - s.distance) / len * self.alpha * self.config.link_strength;
			let (fx, fy) = (dx * k, dy * k);
			// Lower-degree endpoints move more.
			let bias = degree[s.source] as f64 / (degree[s.source] + degree[s.target]) as f64;
			bodies[s.target].vx -= fx * bias;
			bodies[s.target].vy -= fy * bias;
			bodies[s.source].vx += fx * (1.0 - bias);
			bodies[s.source].vy += fy * (1.0 - bias);
		}
	}

	fn apply_charge(&self, bodies: &mut [Body]) {
		let (min2, max2) = (
			self.config.charge_distance_min.powi(2),
			self.config.charge_distance_max.powi(2),
		);
		let strength = self.config.charge_strength * self.alpha;
		let n = bodies.len();
		let mut dv = vec![(0.0, 0.0); n];
		for i in 0..n {
			for j in 0..n {
				if i == j {
					continue;
				}
				let (mut dx, mut dy) = (bodies[j].x - bodies[i].x, bodies[j].y - bodies[i].y);
				let mut l = dx * dx + dy * dy;
				if l >= max2 {
					continue;
				}
				if l == 0.0 {
					dx = jiggle(i + j);
					dy = jiggle(i * 31 + j);
					l = dx * dx + dy * dy;
				}
				if l < min2 {
					l = (min2 * l).sqrt();
				}
				dv[i].0 += dx * strength / l;
				dv[i].1 += dy * strength / l;
			}
		}
		for (body, (dx, dy)) in bodies.iter_mut().zip(dv) {
			body.vx += dx;
			body.vy += dy;
		}
	}

	fn apply_collide(&self, bodies: &mut [Body]) {
		let padding = self.config.collide_padding;
		let n = bodies.len();
		for i in 0..n {
			for j in (i + 1)..n {
				let ri = bodies[i].radius + padding;
				let rj = bodies[j].radius + padding;
				let r = ri + rj;
				let mut dx = bodies[i].x + bodies[i].vx - bodies[j].x - bodies[j].vx;
				let mut dy = bodies[i].y + bodies[i].vy - bodies[j].y - bodies[j].vy;
				let mut l = dx * dx + dy * dy;
				if l >= r * r {
					continue;
				}
				if l == 0.0 {
					dx = jiggle(i + j);
					dy = jiggle(i * 17 + j);
					l = dx * dx + dy * dy;
				}
				let len = l.sqrt();
				let k = (r - len) / len * self.config.collide_strength;
				let (fx, fy) = (dx * k, dy * k);
				// Smaller bodies give way to larger ones.
				let share = (rj * rj) / (ri * ri + rj * rj);
				bodies[i].vx += fx * share;
				bodies[i].vy += fy * share;
				bodies[j].vx -= fx * (1.0 - share);
				bodies[j].vy -= fy * (1.0 - share);
			}
		}
	}

	fn apply_radial(&self, bodies: &mut [Body], (cx, cy): (f64, f64)) {
		let strength = self.config.radial_strength * self.alpha;
		for body in bodies.iter_mut().filter(|b| b.pin.is_none() && b.ring > 0.0) {
			let (dx, dy) = (body.x - cx, body.y - cy);
			let r = (dx * dx + dy * dy).sqrt();
			if r == 0.0 {
				continue;
			}
			let k = (body.ring - r) * strength / r;
			body.vx += dx * k;
			body.vy += dy * k;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dist(a: &Body, b: &Body) -> f64 {
		((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
	}

	fn quiet() -> ForceConfig {
		ForceConfig {
			link_strength: 0.0,
			charge_strength: 0.0,
			collide_strength: 0.0,
			radial_strength: 0.0,
			..ForceConfig::default()
		}
	}

	#[test]
	fn settles_after_cooldown_ticks() {
		let mut sim = Simulation::new(ForceConfig::default());
		let mut bodies = vec![Body::free(0.0, 0.0, 5.0, 100.0), Body::free(10.0, 0.0, 5.0, 100.0)];
		let mut ticks = 0;
		while sim.step(&mut bodies, &[], (0.0, 0.0)) {
			ticks += 1;
			assert!(ticks < 1000);
		}
		assert!(sim.is_settled());
		assert_eq!(ticks + 1, ForceConfig::default().cooldown_ticks);
		assert!(!sim.step(&mut bodies, &[], (0.0, 0.0)));

		sim.reheat(0.3);
		assert!(!sim.is_settled());
	}

	#[test]
	fn alpha_cools_to_minimum() {
		let config = ForceConfig::default();
		let mut sim = Simulation::new(config.clone());
		let mut bodies = vec![];
		while sim.step(&mut bodies, &[], (0.0, 0.0)) {}
		assert!((sim.alpha() - config.alpha_min).abs() < 1e-6);
	}

	#[test]
	fn charge_pushes_bodies_apart() {
		let config = ForceConfig {
			charge_strength: -300.0,
			..quiet()
		};
		let mut sim = Simulation::new(config);
		let mut bodies = vec![Body::free(0.0, 0.0, 1.0, 0.0), Body::free(20.0, 0.0, 1.0, 0.0)];
		sim.step(&mut bodies, &[], (0.0, 0.0));
		assert!(dist(&bodies[0], &bodies[1]) > 20.0);
	}

	#[test]
	fn charge_ignores_bodies_beyond_max_distance() {
		let config = ForceConfig {
			charge_strength: -300.0,
			charge_distance_max: 100.0,
			..quiet()
		};
		let mut sim = Simulation::new(config);
		let mut bodies = vec![Body::free(0.0, 0.0, 1.0, 0.0), Body::free(500.0, 0.0, 1.0, 0.0)];
		sim.step(&mut bodies, &[], (0.0, 0.0));
		assert_eq!(bodies[0].x, 0.0);
		assert_eq!(bodies[1].x, 500.0);
	}

	#[test]
	fn link_pulls_toward_rest_length() {
		let config = ForceConfig {
			link_strength: 1.0,
			..quiet()
		};
		let mut sim = Simulation::new(config);
		let mut bodies = vec![Body::free(0.0, 0.0, 1.0, 0.0), Body::free(300.0, 0.0, 1.0, 0.0)];
		let springs = [Spring {
			source: 0,
			target: 1,
			distance: 100.0,
		}];
		sim.step(&mut bodies, &springs, (0.0, 0.0));
		let d = dist(&bodies[0], &bodies[1]);
		assert!(d < 300.0 && d >= 100.0);
	}

	#[test]
	fn collide_separates_overlapping_bodies() {
		let config = ForceConfig {
			collide_strength: 1.0,
			collide_padding: 0.0,
			..quiet()
		};
		let mut sim = Simulation::new(config);
		let mut bodies = vec![Body::free(0.0, 0.0, 10.0, 0.0), Body::free(5.0, 0.0, 10.0, 0.0)];
		sim.step(&mut bodies, &[], (0.0, 0.0));
		assert!(dist(&bodies[0], &bodies[1]) > 5.0);
	}

	#[test]
	fn radial_moves_toward_ring() {
		let config = ForceConfig {
			radial_strength: 0.5,
			..quiet()
		};
		let mut sim = Simulation::new(config);
		let mut bodies = vec![Body::free(10.0, 0.0, 1.0, 100.0)];
		sim.step(&mut bodies, &[], (0.0, 0.0));
		assert!(bodies[0].x > 10.0);
		assert_eq!(bodies[0].y, 0.0);
	}

	#[test]
	fn pinned_bodies_stay_put() {
		let mut sim = Simulation::new(ForceConfig::default());
		let mut pinned = Body::free(3.0, 4.0, 20.0, 0.0);
		pinned.pin = Some((50.0, 60.0));
		let mut bodies = vec![pinned, Body::free(52.0, 61.0, 5.0, 100.0)];
		let springs = [Spring {
			source: 0,
			target: 1,
			distance: 90.0,
		}];
		for _ in 0..20 {
			sim.step(&mut bodies, &springs, (50.0, 60.0));
		}
		assert_eq!((bodies[0].x, bodies[0].y), (50.0, 60.0));
		assert!(dist(&bodies[0], &bodies[1]) > 10.0);
	}

	#[test]
	fn tiers_grow_outwards() {
		let config = ForceConfig::default();
		let groups = [Group::Skills, Group::Projects, Group::Hobbies, Group::Contact];
		for pair in groups.windows(2) {
			assert!(config.link_distance(pair[0]) < config.link_distance(pair[1]));
			assert!(config.ring(pair[0]) < config.ring(pair[1]));
		}
	}

	#[test]
	fn seed_positions_are_distinct() {
		let a = seed_position(0, 100.0, 100.0);
		let b = seed_position(1, 100.0, 100.0);
		assert_ne!(a, b);
	}
}
