//! Camera helpers: zoom-dependent sizing and zoom-to-fit.

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Zoom by `factor` keeping the graph point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
		self.k = new_k;
	}

	fn lerp(&self, to: &ViewTransform, t: f64) -> ViewTransform {
		ViewTransform {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Multiplier for node radii at zoom `k`: nodes shrink less than the graph
/// when zooming out, so they stay legible.
pub fn node_scale(k: f64) -> f64 {
	(1.0 / k.max(MIN_ZOOM)).sqrt().clamp(0.75, 2.0)
}

/// Label font size in graph units.
pub fn font_size(k: f64) -> f64 {
	(12.0 / k.max(MIN_ZOOM)).max(3.0)
}

/// Axis-aligned box around node discs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn around<I: IntoIterator<Item = (f64, f64, f64)>>(discs: I) -> Option<Bounds> {
		discs.into_iter().fold(None, |acc, (x, y, r)| {
			let b = Bounds {
				min_x: x - r,
				min_y: y - r,
				max_x: x + r,
				max_y: y + r,
			};
			Some(match acc {
				None => b,
				Some(a) => Bounds {
					min_x: a.min_x.min(b.min_x),
					min_y: a.min_y.min(b.min_y),
					max_x: a.max_x.max(b.max_x),
					max_y: a.max_y.max(b.max_y),
				},
			})
		})
	}
}

/// Transform that frames `bounds` in a `width` x `height` viewport, leaving
/// `padding` pixels on each side.
pub fn fit_transform(bounds: Bounds, width: f64, height: f64, padding: f64) -> ViewTransform {
	let bw = (bounds.max_x - bounds.min_x).max(1.0);
	let bh = (bounds.max_y - bounds.min_y).max(1.0);
	let aw = (width - 2.0 * padding).max(1.0);
	let ah = (height - 2.0 * padding).max(1.0);
	let k = (aw / bw).min(ah / bh).clamp(MIN_ZOOM, MAX_ZOOM);
	let (cx, cy) = (
		(bounds.min_x + bounds.max_x) / 2.0,
		(bounds.min_y + bounds.max_y) / 2.0,
	);
	ViewTransform {
		x: width / 2.0 - cx * k,
		y: height / 2.0 - cy * k,
		k,
	}
}

/// Eased camera move between two transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraTween {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
	duration: f64,
}

impl CameraTween {
	pub fn new(from: ViewTransform, to: ViewTransform, duration: f64) -> Self {
		Self {
			from,
			to,
			elapsed: 0.0,
			duration: duration.max(f64::EPSILON),
		}
	}

	/// Advance by `dt` seconds and return the current transform.
	pub fn advance(&mut self, dt: f64) -> ViewTransform {
		self.elapsed = (self.elapsed + dt).min(self.duration);
		self.from.lerp(&self.to, ease_out_cubic(self.elapsed / self.duration))
	}

	pub fn is_done(&self) -> bool {
		self.elapsed >= self.duration
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fit_centers_bounds_in_viewport() {
		let bounds = Bounds {
			min_x: 0.0,
			min_y: 0.0,
			max_x: 200.0,
			max_y: 100.0,
		};
		let t = fit_transform(bounds, 800.0, 600.0, 50.0);
		assert_eq!(t.k, 3.5);
		let (gx, gy) = t.screen_to_graph(400.0, 300.0);
		assert!((gx - 100.0).abs() < 1e-9);
		assert!((gy - 50.0).abs() < 1e-9);
	}

	#[test]
	fn fit_respects_zoom_limits() {
		let huge = Bounds {
			min_x: -1e6,
			min_y: -1e6,
			max_x: 1e6,
			max_y: 1e6,
		};
		assert_eq!(fit_transform(huge, 800.0, 600.0, 40.0).k, MIN_ZOOM);
	}

	#[test]
	fn bounds_cover_every_disc() {
		let b = Bounds::around([(0.0, 0.0, 5.0), (100.0, -20.0, 10.0)]).unwrap();
		assert_eq!(
			b,
			Bounds {
				min_x: -5.0,
				min_y: -30.0,
				max_x: 110.0,
				max_y: 5.0
			}
		);
		assert!(Bounds::around(std::iter::empty()).is_none());
	}

	#[test]
	fn zoom_keeps_pointer_anchor() {
		let mut t = ViewTransform::default();
		let before = t.screen_to_graph(120.0, 80.0);
		t.zoom_at(120.0, 80.0, 1.1);
		let after = t.screen_to_graph(120.0, 80.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn node_scale_shrinks_as_zoom_grows() {
		assert!(node_scale(0.5) > node_scale(1.0));
		assert!(node_scale(1.0) > node_scale(1.5));
		assert_eq!(node_scale(1.0), 1.0);
		assert_eq!(font_size(100.0), 3.0);
	}

	#[test]
	fn tween_reaches_target() {
		let to = ViewTransform { x: 10.0, y: -10.0, k: 2.0 };
		let mut tween = CameraTween::new(ViewTransform::default(), to, 0.4);
		let mid = tween.advance(0.2);
		assert!(mid.k > 1.0 && mid.k < 2.0);
		assert!(!tween.is_done());
		assert_eq!(tween.advance(1.0), to);
		assert!(tween.is_done());
	}
}
