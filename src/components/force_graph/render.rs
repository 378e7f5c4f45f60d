use std::collections::HashMap;
use std::f64::consts::PI;

use log::warn;
use web_sys::CanvasRenderingContext2d;

use super::scale;
use super::state::{ForceGraphState, NodeInfo};
use super::types::Group;
use crate::data::ProjectStatus;

const LABEL_SHADOW: &str = "rgba(20, 12, 28, 0.55)";
const LABEL_COLOR: &str = "#fdfaf3";

/// Color of the status dot drawn on project nodes.
pub fn status_dot_color(status: ProjectStatus) -> &'static str {
	match status {
		ProjectStatus::Completed => "#22c55e",
		ProjectStatus::InProgress => "#f59e0b",
		_ => "#3b82f6",
	}
}

/// `#rrggbb` part of a `#rrggbbaa` color; other formats pass through.
pub fn opaque(color: &str) -> &str {
	if color.len() == 9 && color.is_ascii() && color.starts_with('#') {
		&color[..7]
	} else {
		color
	}
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = scale::ease_out_cubic(state.hover.highlight_t);
	let mut positions = HashMap::new();
	state.visit_positioned(|idx, _, x, y| {
		positions.insert(idx, (x, y));
	});

	for link in &state.links {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&link.source), positions.get(&link.target))
		else {
			continue;
		};
		let (color, width) = if state.touches_hovered(link) {
			(opaque(&link.color), (2.0 + 1.5 * t) / k)
		} else {
			(link.color.as_str(), 2.0 / k)
		};
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = scale::ease_out_cubic(state.hover.highlight_t);
	let font = scale::font_size(k);
	ctx.set_font(&format!("{font}px Inter, sans-serif"));
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");

	state.visit_positioned(|idx, info, x, y| {
		let radius = state.radius(info);
		let hovered = state.is_hovered(idx);
		draw_disc(ctx, info, x, y, radius, hovered);

		if hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 3.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.9 * t));
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		if let Some(status) = info.status {
			draw_status_dot(ctx, status, x, y, radius, k);
		}

		let label_y = y + radius + 4.0 / k;
		ctx.set_fill_style_str(LABEL_SHADOW);
		let _ = ctx.fill_text(&info.name, x + 1.0 / k, label_y + 1.0 / k);
		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&info.name, x, label_y);
	});
}

fn draw_disc(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, radius: f64, hovered: bool) {
	let glow = match (info.group == Group::Center, hovered) {
		(_, true) => 25.0,
		(true, false) => 15.0,
		_ => 0.0,
	};
	if glow > 0.0 {
		ctx.set_shadow_color(opaque(&info.color));
		ctx.set_shadow_blur(glow);
	}

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	// Light source up and to the left.
	match ctx.create_radial_gradient(
		x - radius * 0.35,
		y - radius * 0.35,
		radius * 0.1,
		x,
		y,
		radius,
	) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.85)");
			let _ = gradient.add_color_stop(0.35, &info.color);
			let _ = gradient.add_color_stop(1.0, &info.color);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(err) => {
			warn!("Radial gradient failed for {}: {err:?}", info.id);
			ctx.set_fill_style_str(&info.color);
		}
	}
	ctx.fill();

	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("transparent");
}

fn draw_status_dot(ctx: &CanvasRenderingContext2d, status: ProjectStatus, x: f64, y: f64, radius: f64, k: f64) {
	let color = status_dot_color(status);
	let (dx, dy) = (x + radius * 0.7, y - radius * 0.7);
	ctx.set_shadow_color(color);
	ctx.set_shadow_blur(8.0);
	ctx.begin_path();
	let _ = ctx.arc(dx, dy, (radius * 0.28).max(3.0 / k), 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();
	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_color("transparent");
}
