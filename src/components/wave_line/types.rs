/// Shape and timing of a plucked line. `t` is in wave time-units; with the
/// defaults one time-unit lasts one second of wall clock.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
	/// Number of points in the generated polyline (endpoints included).
	pub samples: usize,
	/// Peak displacement in logical units at `t = 0`.
	pub initial_amplitude: f64,
	/// Temporal decay rate of the amplitude envelope.
	pub damping: f64,
	/// How tightly displacement concentrates around the pluck point.
	pub spatial_decay: f64,
	/// Spatial cycles along the whole segment.
	pub frequency: f64,
	/// Phase speed in radians per time-unit.
	pub wave_speed: f64,
	/// Amplitude under which the line snaps back to rest.
	pub rest_threshold: f64,
	/// Wave time reached at the end of the animation.
	pub total_time: f64,
	/// Wall-clock seconds the animation takes to reach `total_time`.
	pub duration: f64,
}

impl Default for WaveConfig {
	fn default() -> Self {
		Self {
			samples: 40,
			initial_amplitude: 14.0,
			damping: 1.2,
			spatial_decay: 3.0,
			frequency: 3.0,
			wave_speed: 8.0,
			rest_threshold: 0.1,
			total_time: 4.8,
			duration: 4.8,
		}
	}
}
