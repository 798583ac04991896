//! Camera targets and hexagon geometry, all in logical space unless noted.

use std::f64::consts::PI;

use super::types::{CameraTransform, Viewport};
use crate::components::Point;

const VERTEX_STEP: f64 = PI / 3.0;
/// Pointy-top hexagon: vertex 0 sits at -30 degrees.
const VERTEX_OFFSET: f64 = -PI / 6.0;

/// Vertex `index` (taken mod 6) of the hexagon around `center`.
pub fn hex_vertex(center: Point, radius: f64, index: usize) -> Point {
	let angle = VERTEX_OFFSET + VERTEX_STEP * (index % 6) as f64;
	(center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
}

/// All six vertices, clockwise from vertex 0.
pub fn hex_vertices(center: Point, radius: f64) -> [Point; 6] {
	std::array::from_fn(|i| hex_vertex(center, radius, i))
}

/// Index of the vertex of a hexagon at `from` whose angle best matches the
/// direction towards `to`.
pub fn vertex_toward(from: Point, to: Point) -> usize {
	let angle = (to.1 - from.1).atan2(to.0 - from.0);
	let steps = ((angle - VERTEX_OFFSET) / VERTEX_STEP).round() as i64;
	steps.rem_euclid(6) as usize
}

/// Endpoints of the edge between two hexagons: the facing vertex on `a` and
/// the diametrically opposite vertex index on `b`.
pub fn edge_endpoints(a: Point, b: Point, radius: f64) -> (Point, Point) {
	let index = vertex_toward(a, b);
	(hex_vertex(a, radius, index), hex_vertex(b, radius, (index + 3) % 6))
}

/// Camera that maps `position` to the viewport centre at `scale`.
pub fn focus_on(position: Point, viewport: Viewport, scale: f64) -> CameraTransform {
	let (cx, cy) = viewport.center();
	CameraTransform {
		scale,
		x: cx - position.0 * scale,
		y: cy - position.1 * scale,
	}
}

/// Camera framing every node circle inside the viewport minus `padding`,
/// never zooming in past `max_scale`.
pub fn fit_all(
	positions: impl IntoIterator<Item = Point>,
	radius: f64,
	viewport: Viewport,
	padding: f64,
	max_scale: f64,
) -> CameraTransform {
	let bounds = positions.into_iter().fold(None, |acc: Option<(f64, f64, f64, f64)>, (x, y)| {
		let (min_x, min_y, max_x, max_y) = acc.unwrap_or((x, y, x, y));
		Some((min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)))
	});
	let Some((min_x, min_y, max_x, max_y)) = bounds else {
		return focus_on((0.0, 0.0), viewport, max_scale);
	};
	let radius = radius.max(0.0);
	let (box_w, box_h) = (max_x - min_x + 2.0 * radius, max_y - min_y + 2.0 * radius);
	let avail_w = (viewport.width - 2.0 * padding).max(1.0);
	let avail_h = (viewport.height - 2.0 * padding).max(1.0);
	let scale = (avail_w / box_w).min(avail_h / box_h).min(max_scale);
	focus_on(((min_x + max_x) / 2.0, (min_y + max_y) / 2.0), viewport, scale)
}

/// Logical point to screen pixels.
pub fn to_screen(camera: &CameraTransform, p: Point) -> Point {
	(p.0 * camera.scale + camera.x, p.1 * camera.scale + camera.y)
}

/// Screen pixels back to logical space. A degenerate camera maps
/// everything to the origin.
pub fn to_logical(camera: &CameraTransform, p: Point) -> Point {
	if camera.scale.abs() < f64::EPSILON {
		return (0.0, 0.0);
	}
	((p.0 - camera.x) / camera.scale, (p.1 - camera.y) / camera.scale)
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEW: Viewport = Viewport {
		width: 1280.0,
		height: 720.0,
	};

	fn assert_close(a: Point, b: Point) {
		assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9, "{a:?} != {b:?}");
	}

	#[test]
	fn focus_maps_node_to_centre() {
		let camera = focus_on((250.0, -80.0), VIEW, 1.0);
		assert_close(to_screen(&camera, (250.0, -80.0)), (640.0, 360.0));
		let camera = focus_on((250.0, -80.0), VIEW, 0.5);
		assert_close(to_screen(&camera, (250.0, -80.0)), (640.0, 360.0));
	}

	#[test]
	fn screen_logical_round_trip() {
		let camera = CameraTransform {
			scale: 0.3,
			x: 120.0,
			y: -40.0,
		};
		assert_close(to_logical(&camera, to_screen(&camera, (17.0, 99.0))), (17.0, 99.0));
	}

	#[test]
	fn fit_all_contains_every_node() {
		let layouts: Vec<Vec<Point>> = vec![
			vec![(0.0, 0.0)],
			vec![(0.0, 0.0), (100.0, 0.0)],
			vec![(-900.0, 40.0), (1200.0, -300.0), (30.0, 2200.0)],
			vec![(0.0, 0.0), (0.0, 5000.0)],
			(0..12).map(|i| (i as f64 * 173.0, (i % 3) as f64 * 150.0)).collect(),
		];
		let (radius, padding) = (60.0, 40.0);
		for layout in layouts {
			let camera = fit_all(layout.iter().copied(), radius, VIEW, padding, 0.45);
			assert!(camera.scale > 0.0 && camera.scale <= 0.45);
			for &p in &layout {
				let (sx, sy) = to_screen(&camera, p);
				let r = radius * camera.scale;
				assert!(sx - r >= padding - 1e-9 && sx + r <= VIEW.width - padding + 1e-9);
				assert!(sy - r >= padding - 1e-9 && sy + r <= VIEW.height - padding + 1e-9);
			}
		}
	}

	#[test]
	fn fit_all_caps_scale_and_centres_box() {
		let camera = fit_all([(0.0, 0.0), (100.0, 0.0)], 60.0, VIEW, 40.0, 0.45);
		assert_eq!(camera.scale, 0.45);
		assert_close(to_screen(&camera, (50.0, 0.0)), (640.0, 360.0));
	}

	#[test]
	fn fit_all_without_nodes_is_centred() {
		let camera = fit_all(std::iter::empty(), 60.0, VIEW, 40.0, 0.45);
		assert_close((camera.x, camera.y), (640.0, 360.0));
	}

	#[test]
	fn vertex_selection_faces_the_other_node() {
		assert_eq!(vertex_toward((0.0, 0.0), (0.0, 100.0)), 2);
		assert_eq!(vertex_toward((0.0, 0.0), (0.0, -100.0)), 5);
		assert_eq!(vertex_toward((0.0, 0.0), (100.0, 58.0)), 1);
		assert_eq!(vertex_toward((0.0, 0.0), (-100.0, -58.0)), 4);
		let (a, b) = edge_endpoints((0.0, 0.0), (0.0, 300.0), 60.0);
		assert_close(a, (0.0, 60.0));
		assert_close(b, (0.0, 240.0));
	}

	#[test]
	fn vertices_lie_on_radius() {
		for v in hex_vertices((10.0, 10.0), 50.0) {
			let d = ((v.0 - 10.0).powi(2) + (v.1 - 10.0).powi(2)).sqrt();
			assert!((d - 50.0).abs() < 1e-9);
		}
	}
}
