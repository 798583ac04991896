use web_sys::CanvasRenderingContext2d;

use super::state::ReactiveGrid;
use crate::theme::Theme;

pub fn render(grid: &ReactiveGrid, theme: &Theme, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&theme.background);
	ctx.fill_rect(0.0, 0.0, grid.width, grid.height);
	let (cols, rows) = (grid.cols(), grid.rows());
	if cols == 0 || rows == 0 {
		return;
	}
	ctx.set_stroke_style_str(&format!("rgba({}, 0.35)", theme.grid_rgb));
	ctx.set_line_width(1.0);
	ctx.begin_path();
	for row in 0..rows {
		for col in 0..cols {
			let Some(p) = grid.point(col, row) else {
				continue;
			};
			if let Some(right) = grid.point(col + 1, row) {
				ctx.move_to(p.x, p.y);
				ctx.line_to(right.x, right.y);
			}
			if let Some(below) = grid.point(col, row + 1) {
				ctx.move_to(p.x, p.y);
				ctx.line_to(below.x, below.y);
			}
		}
	}
	ctx.stroke();
}
