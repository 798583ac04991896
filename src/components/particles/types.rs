use crate::components::shockwave::ShockwaveConfig;

/// Tunables for the floating particle background. Velocities are in pixels
/// per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
	/// Pool size.
	pub count: usize,
	/// Pairs closer than this get a connecting line.
	pub link_distance: f64,
	/// Link opacity at zero distance.
	pub link_opacity: f64,
	/// Fraction of the origin offset added to velocity each frame.
	pub return_force: f64,
	/// Velocity multiplier applied each frame.
	pub damping: f64,
	/// Max speed of each particle's rest position.
	pub drift_speed: f64,
	/// Dot radius range.
	pub radius: (f64, f64),
	/// Dot opacity range.
	pub opacity: (f64, f64),
	/// Ring applied on clicks.
	pub shockwave: ShockwaveConfig,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 60,
			link_distance: 120.0,
			link_opacity: 0.25,
			return_force: 0.02,
			damping: 0.92,
			drift_speed: 0.15,
			radius: (1.0, 2.5),
			opacity: (0.3, 0.8),
			shockwave: ShockwaveConfig::default(),
		}
	}
}

/// One dot and the rest position it springs back to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
	/// Position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Rest position, which drifts slowly.
	pub origin_x: f64,
	/// Vertical rest position.
	pub origin_y: f64,
	/// Velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Per-frame drift of the rest position.
	pub drift_x: f64,
	/// Vertical drift.
	pub drift_y: f64,
	/// Dot radius.
	pub radius: f64,
	/// Dot opacity.
	pub opacity: f64,
}

/// A proximity line between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleLink {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// Line opacity, already faded by distance.
	pub opacity: f64,
}
