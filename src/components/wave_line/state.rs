use super::types::WaveConfig;
use super::wave::{amplitude, clamp_click_t, rest_path, wave_path};
use crate::components::Point;
use crate::tween::{Easing, Tween, TweenStep};

/// Per-line pluck animation. At most one waveform is ever live: a new pluck
/// cancels the running tween and restarts from `t = 0`.
#[derive(Clone, Debug, Default)]
pub struct PluckAnimation {
	click_t: f64,
	t: f64,
	tween: Option<Tween>,
}

impl PluckAnimation {
	/// Start a new waveform at `click_t`, cancelling any running one.
	pub fn pluck(&mut self, click_t: f64, cfg: &WaveConfig) {
		if let Some(tween) = self.tween.as_mut() {
			tween.cancel();
		}
		self.click_t = clamp_click_t(click_t);
		self.t = 0.0;
		self.tween = Some(Tween::new(cfg.duration, Easing::Linear));
	}

	/// Advance by `dt` seconds. Returns whether the line is still moving.
	pub fn tick(&mut self, dt: f64, cfg: &WaveConfig) -> bool {
		let Some(tween) = self.tween.as_mut() else {
			return false;
		};
		match tween.advance(dt) {
			TweenStep::Running(p) => self.t = p * cfg.total_time,
			TweenStep::Complete | TweenStep::Idle => self.t = cfg.total_time,
		}
		if !tween.is_running() || amplitude(self.t, cfg) < cfg.rest_threshold {
			self.stop();
		}
		self.is_active()
	}

	/// Snap back to rest.
	pub fn stop(&mut self) {
		self.tween = None;
		self.t = 0.0;
	}

	/// Whether the line is vibrating.
	pub fn is_active(&self) -> bool {
		self.tween.is_some()
	}

	/// Wave time of the running animation (0 at rest).
	pub fn elapsed(&self) -> f64 {
		self.t
	}

	/// Clamped pluck position of the last pluck.
	pub fn click_t(&self) -> f64 {
		self.click_t
	}

	/// Current polyline for the segment; the rest path when idle.
	pub fn path(&self, start: Point, end: Point, cfg: &WaveConfig) -> Vec<Point> {
		if self.is_active() {
			wave_path(start, end, self.t, self.click_t, cfg)
		} else {
			rest_path(start, end, cfg.samples)
		}
	}
}
