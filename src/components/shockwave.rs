//! Radial shockwave shared by the particle field and the reactive grid.

use leptos::prelude::*;

/// Tunables for a traveling shockwave ring. Times are in seconds, lengths in
/// canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ShockwaveConfig {
	/// Speed of the ring front.
	pub wave_speed: f64,
	/// Thickness of the ring.
	pub wave_width: f64,
	/// Impulse at the leading edge.
	pub strength: f64,
	/// Seconds before the shockwave is dropped.
	pub lifetime: f64,
}

impl Default for ShockwaveConfig {
	fn default() -> Self {
		Self {
			wave_speed: 200.0,
			wave_width: 150.0,
			strength: 6.0,
			lifetime: 2.5,
		}
	}
}

/// One shockwave: where it started and on which clock tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shockwave {
	/// Centre of the ring.
	pub origin: (f64, f64),
	/// Clock value when it was triggered.
	pub started_at: f64,
}

impl Shockwave {
	/// Impulse received by `point` at time `now`, directed away from the
	/// origin. `None` outside the traveling annulus or past the lifetime.
	pub fn impulse(&self, cfg: &ShockwaveConfig, point: (f64, f64), now: f64) -> Option<(f64, f64)> {
		let elapsed = now - self.started_at;
		if !(0.0..=cfg.lifetime).contains(&elapsed) || cfg.wave_width <= 0.0 {
			return None;
		}
		let front = elapsed * cfg.wave_speed;
		let (dx, dy) = (point.0 - self.origin.0, point.1 - self.origin.1);
		let d = (dx * dx + dy * dy).sqrt();
		if d <= f64::EPSILON || !(front - cfg.wave_width < d && d < front) {
			return None;
		}
		let falloff = ((cfg.wave_width - (front - d)) / cfg.wave_width).powi(2);
		let scale = falloff * cfg.strength / d;
		Some((dx * scale, dy * scale))
	}
}

/// Single shockwave slot; the latest trigger replaces whatever was running.
#[derive(Clone, Debug, Default)]
pub struct ShockwaveSlot {
	current: Option<Shockwave>,
}

impl ShockwaveSlot {
	/// Start a shockwave at `origin`, replacing the current one.
	pub fn trigger(&mut self, origin: (f64, f64), now: f64) {
		self.current = Some(Shockwave {
			origin,
			started_at: now,
		});
	}

	/// The live shockwave, dropping it once its lifetime has passed.
	pub fn active(&mut self, cfg: &ShockwaveConfig, now: f64) -> Option<Shockwave> {
		if let Some(wave) = self.current {
			if now - wave.started_at > cfg.lifetime {
				self.current = None;
			}
		}
		self.current
	}

	/// Impulse from the live shockwave, if there is one.
	pub fn impulse(&mut self, cfg: &ShockwaveConfig, point: (f64, f64), now: f64) -> Option<(f64, f64)> {
		self.active(cfg, now)?.impulse(cfg, point, now)
	}

	/// Forget the current shockwave.
	pub fn clear(&mut self) {
		self.current = None;
	}
}

/// A shockwave request in client (viewport) coordinates. `seq` makes two
/// clicks on the same pixel distinct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShockwaveEvent {
	/// Client x.
	pub x: f64,
	/// Client y.
	pub y: f64,
	/// Emit sequence number.
	pub seq: u64,
}

/// Fire-and-forget channel from whoever was clicked to the background effects.
#[derive(Clone, Copy)]
pub struct ShockwaveBus(RwSignal<Option<ShockwaveEvent>>);

impl ShockwaveBus {
	/// Broadcast a shockwave at client `(x, y)`.
	pub fn emit(&self, x: f64, y: f64) {
		self.0.update(|slot| {
			let seq = slot.map_or(0, |e| e.seq + 1);
			*slot = Some(ShockwaveEvent { x, y, seq });
		});
	}

	/// Latest event; tracked, so effects re-run on every emit.
	pub fn latest(&self) -> Option<ShockwaveEvent> {
		self.0.get()
	}
}

/// Create the bus and put it in context for the subtree.
pub fn provide_shockwave_bus() -> ShockwaveBus {
	let bus = ShockwaveBus(RwSignal::new(None));
	provide_context(bus);
	bus
}

/// The bus from context, if an ancestor provided one.
pub fn use_shockwave_bus() -> Option<ShockwaveBus> {
	use_context::<ShockwaveBus>()
}
