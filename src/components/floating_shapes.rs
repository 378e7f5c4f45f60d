use leptos::prelude::*;

const SHAPE_COUNT: usize = 12;
const KINDS: [&str; 3] = ["circle", "square", "triangle"];
const PALETTE: [&str; 4] = ["#7a458c", "#9d8cc2", "#6f7d96", "#c8ccd4"];

/// One decorative shape; all lengths in viewport percent or seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
	pub kind: &'static str,
	pub color: &'static str,
	pub left: f64,
	pub top: f64,
	pub size: f64,
	pub duration: f64,
	pub delay: f64,
}

impl Shape {
	/// Build a shape from five uniform samples in `[0, 1)`.
	pub fn from_samples(i: usize, s: [f64; 5]) -> Self {
		Shape {
			kind: KINDS[i % KINDS.len()],
			color: PALETTE[i % PALETTE.len()],
			left: s[0] * 100.0,
			top: s[1] * 100.0,
			size: 20.0 + s[2] * 60.0,
			duration: 12.0 + s[3] * 18.0,
			delay: -s[4] * 20.0,
		}
	}

	fn style(&self) -> String {
		format!(
			"left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; --shape-color: {}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
			self.left, self.top, self.size, self.size, self.color, self.duration, self.delay
		)
	}
}

/// Slowly drifting background shapes. Purely cosmetic.
#[component]
pub fn FloatingShapes() -> impl IntoView {
	let shapes: Vec<Shape> = (0..SHAPE_COUNT)
		.map(|i| Shape::from_samples(i, std::array::from_fn(|_| js_sys::Math::random())))
		.collect();

	view! {
		<div class="floating-shapes" aria-hidden="true">
			{shapes
				.into_iter()
				.map(|s| view! { <div class=format!("floating-shape {}", s.kind) style=s.style()></div> })
				.collect_view()}
		</div>
	}
}
