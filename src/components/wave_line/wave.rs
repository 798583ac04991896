//! Pure waveform math: rest and plucked polylines plus segment helpers.

use std::f64::consts::{PI, TAU};

use super::types::WaveConfig;
use crate::components::Point;

/// Closest a pluck may get to the start.
pub const MIN_CLICK_T: f64 = 0.05;
/// Closest a pluck may get to the end.
pub const MAX_CLICK_T: f64 = 0.95;

/// Keep the pluck point away from the pinned endpoints.
pub fn clamp_click_t(click_t: f64) -> f64 {
	if click_t.is_nan() {
		return 0.5;
	}
	click_t.clamp(MIN_CLICK_T, MAX_CLICK_T)
}

/// Amplitude envelope at wave time `t`.
pub fn amplitude(t: f64, cfg: &WaveConfig) -> f64 {
	cfg.initial_amplitude * (-cfg.damping * t.max(0.0)).exp()
}

/// The undisplaced line, sampled at `samples` evenly spaced points. The first
/// and last points are the endpoints verbatim.
pub fn rest_path(start: Point, end: Point, samples: usize) -> Vec<Point> {
	let samples = samples.max(2);
	let last = samples - 1;
	(0..samples)
		.map(|i| match i {
			0 => start,
			i if i == last => end,
			i => {
				let s = i as f64 / last as f64;
				(start.0 + (end.0 - start.0) * s, start.1 + (end.1 - start.1) * s)
			}
		})
		.collect()
}

/// Signed perpendicular displacement at parametric position `s`.
fn displacement(s: f64, t: f64, click_t: f64, amp: f64, cfg: &WaveConfig) -> f64 {
	if s <= 0.0 || s >= 1.0 {
		return 0.0;
	}
	let boundary = (s * PI).sin();
	let spatial = (-cfg.spatial_decay * (s - click_t).abs()).exp();
	let phase = TAU * cfg.frequency * (s - click_t).abs();
	let time_phase = t * cfg.wave_speed;
	let oscillation = (phase - time_phase).cos() + 0.5 * (2.0 * phase - 2.0 * time_phase).cos();
	amp * spatial * boundary * oscillation
}

/// The line from `start` to `end` plucked at `click_t`, at wave time `t`.
///
/// Once the amplitude envelope drops under `cfg.rest_threshold` this is
/// exactly [`rest_path`]. A zero-length segment has no perpendicular and is
/// returned at rest.
pub fn wave_path(start: Point, end: Point, t: f64, click_t: f64, cfg: &WaveConfig) -> Vec<Point> {
	let mut path = rest_path(start, end, cfg.samples);
	let amp = amplitude(t, cfg);
	if amp < cfg.rest_threshold {
		return path;
	}
	let (dx, dy) = (end.0 - start.0, end.1 - start.1);
	let len = (dx * dx + dy * dy).sqrt();
	if len < 1e-9 {
		return path;
	}
	let (nx, ny) = (-dy / len, dx / len);
	let click_t = clamp_click_t(click_t);
	let last = path.len() - 1;
	for (i, p) in path.iter_mut().enumerate().take(last).skip(1) {
		let d = displacement(i as f64 / last as f64, t, click_t, amp, cfg);
		p.0 += nx * d;
		p.1 += ny * d;
	}
	path
}

/// Normalized position of `point` projected onto the segment, in `[0, 1]`.
pub fn project_click_t(start: Point, end: Point, point: Point) -> f64 {
	let (dx, dy) = (end.0 - start.0, end.1 - start.1);
	let len_sq = dx * dx + dy * dy;
	if len_sq < 1e-12 {
		return 0.5;
	}
	(((point.0 - start.0) * dx + (point.1 - start.1) * dy) / len_sq).clamp(0.0, 1.0)
}

/// Euclidean distance from `point` to the closest point on the segment.
pub fn distance_to_segment(start: Point, end: Point, point: Point) -> f64 {
	let s = project_click_t(start, end, point);
	let (cx, cy) = (start.0 + (end.0 - start.0) * s, start.1 + (end.1 - start.1) * s);
	((point.0 - cx).powi(2) + (point.1 - cy).powi(2)).sqrt()
}
