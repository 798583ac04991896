use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::ParticleField;
use crate::theme::Theme;

pub fn render(field: &ParticleField, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	let particles = field.particles();

	ctx.set_line_width(1.0);
	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		ctx.set_stroke_style_str(&format!("rgba({}, {})", theme.particle_rgb, link.opacity));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}

	for p in particles {
		ctx.set_fill_style_str(&format!("rgba({}, {})", theme.particle_rgb, p.opacity));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}
