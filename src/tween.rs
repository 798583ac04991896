//! Time-based tween driver shared by the camera transition and line plucks.
//!
//! A [`Tween`] is polled once per frame with the frame delta. Each call to
//! [`Tween::advance`] either reports an eased progress value (the "update"
//! hook) or completion, after which the tween stays finished. Cancelling is
//! just [`Tween::cancel`]; a cancelled tween never reports completion.

/// Easing curves used by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
	/// Constant speed.
	#[default]
	Linear,
	/// Slow at both ends, fast in the middle.
	EaseInOutCubic,
	/// Fast start, decelerating end.
	EaseOutCubic,
	/// Slow start, accelerating end.
	EaseInCubic,
}

impl Easing {
	/// Map a linear progress in `[0, 1]` onto the curve. Input is clamped.
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseInOutCubic => {
				if t < 0.5 {
					4.0 * t * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
				}
			}
			Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
			Easing::EaseInCubic => t * t * t,
		}
	}
}

/// Result of advancing a tween by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenStep {
	/// Still running; carries the eased progress.
	Running(f64),
	/// Reached the end on this frame (eased progress is exactly 1).
	Complete,
	/// Already finished or cancelled before this frame.
	Idle,
}

/// A single numeric interpolation over a fixed wall-clock duration.
#[derive(Clone, Debug)]
pub struct Tween {
	duration: f64,
	elapsed: f64,
	easing: Easing,
	finished: bool,
	cancelled: bool,
}

impl Tween {
	/// Start a tween lasting `duration` seconds.
	pub fn new(duration: f64, easing: Easing) -> Self {
		Self {
			duration,
			elapsed: 0.0,
			easing,
			finished: false,
			cancelled: false,
		}
	}

	/// Move the clock forward by `dt` seconds. Negative steps count as zero.
	pub fn advance(&mut self, dt: f64) -> TweenStep {
		if self.finished || self.cancelled {
			return TweenStep::Idle;
		}
		self.elapsed += dt.max(0.0);
		if self.duration <= 0.0 || self.elapsed >= self.duration {
			self.elapsed = self.duration.max(0.0);
			self.finished = true;
			return TweenStep::Complete;
		}
		TweenStep::Running(self.easing.apply(self.elapsed / self.duration))
	}

	/// Stop the tween without completing it.
	pub fn cancel(&mut self) {
		self.cancelled = true;
	}

	/// Linear (un-eased) progress in `[0, 1]`.
	pub fn progress(&self) -> f64 {
		if self.duration <= 0.0 {
			return if self.finished { 1.0 } else { 0.0 };
		}
		(self.elapsed / self.duration).clamp(0.0, 1.0)
	}

	/// Whether the tween ran to its end.
	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Neither finished nor cancelled.
	pub fn is_running(&self) -> bool {
		!self.finished && !self.cancelled
	}
}

/// Linear interpolation between two values of the same type.
pub trait Lerp {
	/// Value at `t` between `self` (0) and `to` (1).
	fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
	fn lerp(&self, to: &Self, t: f64) -> Self {
		self + (to - self) * t
	}
}

/// Remap `progress` so that `[start, end]` becomes `[0, 1]`, clamped outside.
pub fn window(progress: f64, start: f64, end: f64) -> f64 {
	if end <= start {
		return if progress >= end { 1.0 } else { 0.0 };
	}
	((progress - start) / (end - start)).clamp(0.0, 1.0)
}
