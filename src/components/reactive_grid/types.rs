use crate::components::shockwave::ShockwaveConfig;

/// Tunables for the displaced grid mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
	/// Lattice spacing in pixels.
	pub cell_size: f64,
	/// Idle sway in pixels.
	pub idle_amplitude: f64,
	/// Spatial frequency of the idle wave, radians per pixel.
	pub idle_frequency: f64,
	/// Temporal speed of the idle wave, radians per second.
	pub idle_speed: f64,
	/// Multiplier applied to leftover shockwave offsets each frame.
	pub offset_decay: f64,
	/// Ring applied on clicks.
	pub shockwave: ShockwaveConfig,
}

impl Default for GridConfig {
	fn default() -> Self {
		Self {
			cell_size: 40.0,
			idle_amplitude: 3.0,
			idle_frequency: 0.02,
			idle_speed: 1.0,
			offset_decay: 0.9,
			shockwave: ShockwaveConfig {
				strength: 4.0,
				lifetime: 3.0,
				..ShockwaveConfig::default()
			},
		}
	}
}

/// A lattice point: where it is drawn and where it belongs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridPoint {
	/// Drawn position.
	pub x: f64,
	/// Drawn vertical position.
	pub y: f64,
	/// Lattice position.
	pub base_x: f64,
	/// Vertical lattice position.
	pub base_y: f64,
	/// Leftover shockwave displacement, decaying each frame.
	pub offset_x: f64,
	/// Vertical shockwave displacement.
	pub offset_y: f64,
}
