use super::types::{GridConfig, GridPoint};
use crate::components::shockwave::ShockwaveSlot;

/// Row-major lattice of points that sways idly and ripples on shockwaves.
pub struct ReactiveGrid {
	points: Vec<GridPoint>,
	cols: usize,
	rows: usize,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	cfg: GridConfig,
	shockwave: ShockwaveSlot,
	time: f64,
}

impl ReactiveGrid {
	/// Lay out a lattice covering `width` x `height`, one cell past each edge.
	pub fn new(width: f64, height: f64, cfg: GridConfig) -> Self {
		let mut grid = Self {
			points: Vec::new(),
			cols: 0,
			rows: 0,
			width,
			height,
			cfg,
			shockwave: ShockwaveSlot::default(),
			time: 0.0,
		};
		grid.build();
		grid
	}

	fn build(&mut self) {
		let cell = self.cfg.cell_size;
		if cell <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
			(self.cols, self.rows) = (0, 0);
			self.points.clear();
			return;
		}
		self.cols = (self.width / cell).ceil() as usize + 1;
		self.rows = (self.height / cell).ceil() as usize + 1;
		self.points = (0..self.rows)
			.flat_map(|row| (0..self.cols).map(move |col| (col, row)))
			.map(|(col, row)| {
				let (x, y) = (col as f64 * cell, row as f64 * cell);
				GridPoint {
					x,
					y,
					base_x: x,
					base_y: y,
					..GridPoint::default()
				}
			})
			.collect();
	}

	/// Regenerate the lattice wholesale for a new viewport.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.shockwave.clear();
		self.build();
	}

	/// Start a shockwave at `(x, y)`, replacing any running one.
	pub fn shockwave(&mut self, x: f64, y: f64) {
		self.shockwave.trigger((x, y), self.time);
	}

	/// Advance the idle wave and the shockwave by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
		let cfg = &self.cfg;
		let wave = self.shockwave.active(&cfg.shockwave, self.time);
		let phase = self.time * cfg.idle_speed;
		for p in &mut self.points {
			if let Some((ix, iy)) = wave.and_then(|s| s.impulse(&cfg.shockwave, (p.base_x, p.base_y), self.time)) {
				p.offset_x += ix;
				p.offset_y += iy;
			}
			p.offset_x *= cfg.offset_decay;
			p.offset_y *= cfg.offset_decay;
			let idle_x = (p.base_y * cfg.idle_frequency + phase).sin() * cfg.idle_amplitude;
			let idle_y = (p.base_x * cfg.idle_frequency + phase).cos() * cfg.idle_amplitude;
			p.x = p.base_x + p.offset_x + idle_x;
			p.y = p.base_y + p.offset_y + idle_y;
		}
	}

	/// Points per row.
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// Number of rows.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Point at `(col, row)`, or `None` outside the lattice.
	pub fn point(&self, col: usize, row: usize) -> Option<&GridPoint> {
		if col >= self.cols {
			return None;
		}
		self.points.get(row * self.cols + col)
	}

	/// Every point, row-major.
	pub fn points(&self) -> &[GridPoint] {
		&self.points
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn quiet() -> GridConfig {
		GridConfig {
			idle_amplitude: 0.0,
			..GridConfig::default()
		}
	}

	#[test]
	fn lattice_covers_viewport() {
		let grid = ReactiveGrid::new(100.0, 50.0, GridConfig::default());
		assert_eq!((grid.cols(), grid.rows()), (4, 3));
		assert_eq!(grid.points().len(), 12);
		let corner = grid.point(3, 2).unwrap();
		assert_eq!((corner.base_x, corner.base_y), (120.0, 80.0));
		assert!(grid.point(4, 0).is_none());
	}

	#[test]
	fn resize_rebuilds_and_count_stays_fixed_between() {
		let mut grid = ReactiveGrid::new(100.0, 50.0, GridConfig::default());
		for _ in 0..100 {
			grid.tick(0.016);
		}
		assert_eq!(grid.points().len(), 12);
		grid.resize(200.0, 200.0);
		assert_eq!((grid.cols(), grid.rows()), (6, 6));
		assert!(grid.points().iter().all(|p| p.x == p.base_x && p.y == p.base_y));
	}

	#[test]
	fn idle_wave_moves_points() {
		let mut grid = ReactiveGrid::new(200.0, 200.0, GridConfig::default());
		grid.tick(0.5);
		let p = grid.point(1, 1).unwrap();
		let expected_x = 40.0 + (40.0 * 0.02 + 0.5_f64).sin() * 3.0;
		let expected_y = 40.0 + (40.0 * 0.02 + 0.5_f64).cos() * 3.0;
		assert!((p.x - expected_x).abs() < 1e-9);
		assert!((p.y - expected_y).abs() < 1e-9);
	}

	#[test]
	fn shockwave_ripples_only_inside_ring() {
		let mut grid = ReactiveGrid::new(400.0, 40.0, quiet());
		grid.shockwave(0.0, 0.0);
		// After 0.5s the ring spans (-50, 100): x=40 and x=80 inside, 200 outside.
		for _ in 0..5 {
			grid.tick(0.1);
		}
		let near = grid.point(2, 0).unwrap();
		assert!(near.offset_x > 0.0);
		assert_eq!(grid.point(5, 0).unwrap().offset_x, 0.0);
	}

	#[test]
	fn offsets_decay_after_shockwave_expires() {
		let mut grid = ReactiveGrid::new(400.0, 40.0, quiet());
		grid.shockwave(0.0, 0.0);
		for _ in 0..400 {
			grid.tick(0.016);
		}
		assert!(grid.points().iter().all(|p| p.offset_x.abs() < 1e-6 && p.offset_y.abs() < 1e-6));
	}

	#[test]
	fn degenerate_viewport_is_empty() {
		let grid = ReactiveGrid::new(0.0, 300.0, GridConfig::default());
		assert!(grid.points().is_empty());
		assert!(grid.point(0, 0).is_none());
	}
}
