use web_sys::CanvasRenderingContext2d;

use super::geometry::hex_vertices;
use super::state::HexNetworkState;
use super::types::ViewState;
use crate::components::Point;
use crate::theme::Theme;

pub fn render<C>(state: &HexNetworkState<C>, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	let viewport = state.viewport();
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	let camera = state.camera();
	ctx.save();
	let _ = ctx.translate(camera.x, camera.y);
	let _ = ctx.scale(camera.scale, camera.scale);
	draw_synapses(state, theme, ctx);
	draw_lines(state, theme, ctx);
	draw_nodes(state, theme, ctx);
	ctx.restore();
}

fn draw_synapses<C>(state: &HexNetworkState<C>, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	let nodes = state.nodes();
	ctx.set_stroke_style_str(&format!("rgba({}, 0.06)", theme.line_rgb));
	ctx.set_line_width(1.0 / state.camera().scale.max(0.1));
	ctx.begin_path();
	for (a, b) in state.synapses() {
		let (pa, pb) = (nodes[a].position, nodes[b].position);
		ctx.move_to(pa.0, pa.1);
		ctx.line_to(pb.0, pb.1);
	}
	ctx.stroke();
}

fn draw_lines<C>(state: &HexNetworkState<C>, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(2.0);
	for (idx, line) in state.lines().iter().enumerate() {
		let Some(path) = state.line_path(idx) else {
			continue;
		};
		let alpha = if line.pluck.is_active() { 0.9 } else { 0.55 };
		ctx.set_stroke_style_str(&format!("rgba({}, {})", theme.line_rgb, alpha));
		stroke_polyline(ctx, &path);
	}
}

fn stroke_polyline(ctx: &CanvasRenderingContext2d, path: &[Point]) {
	let Some((first, rest)) = path.split_first() else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(first.0, first.1);
	for p in rest {
		ctx.line_to(p.0, p.1);
	}
	ctx.stroke();
}

fn draw_nodes<C>(state: &HexNetworkState<C>, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	let radius = state.config().node_radius;
	let active = match state.view_state() {
		ViewState::Focused | ViewState::ZoomingOut => state.active_index(),
		_ => None,
	};

	for (idx, node) in state.nodes().iter().enumerate() {
		let [first, rest @ ..] = hex_vertices(node.position, radius);
		ctx.begin_path();
		ctx.move_to(first.0, first.1);
		for v in rest {
			ctx.line_to(v.0, v.1);
		}
		ctx.close_path();

		if active == Some(idx) {
			ctx.set_shadow_color(&theme.active_glow);
			ctx.set_shadow_blur(24.0);
		}
		ctx.set_fill_style_str(&theme.node_fill);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
		ctx.set_stroke_style_str(&theme.node_stroke);
		ctx.set_line_width(if active == Some(idx) { 3.0 } else { 1.5 });
		ctx.stroke();

		ctx.set_fill_style_str(&theme.label);
		ctx.set_font(&format!("{}px sans-serif", (radius * 0.28).max(8.0)));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, node.position.0, node.position.1);
	}
}
