use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{Particle, ParticleConfig, ParticleLink};
use crate::components::shockwave::ShockwaveSlot;

/// Fixed-size pool of drifting particles on a toroidal canvas.
pub struct ParticleField {
	particles: Vec<Particle>,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	cfg: ParticleConfig,
	shockwave: ShockwaveSlot,
	time: f64,
	rng: SmallRng,
}

impl ParticleField {
	/// Scatter `cfg.count` particles over the canvas. The same `seed` gives
	/// the same field.
	pub fn new(width: f64, height: f64, cfg: ParticleConfig, seed: u64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
			cfg,
			shockwave: ShockwaveSlot::default(),
			time: 0.0,
			rng: SmallRng::seed_from_u64(seed),
		};
		field.populate();
		field
	}

	fn populate(&mut self) {
		let (w, h) = (self.width.max(0.0), self.height.max(0.0));
		let cfg = &self.cfg;
		let rng = &mut self.rng;
		self.particles = (0..cfg.count)
			.map(|_| {
				let (x, y) = (rng.random_range(0.0..=w), rng.random_range(0.0..=h));
				let angle = rng.random_range(0.0..=std::f64::consts::TAU);
				let speed = rng.random_range(0.0..=cfg.drift_speed.max(0.0));
				Particle {
					x,
					y,
					origin_x: x,
					origin_y: y,
					vx: 0.0,
					vy: 0.0,
					drift_x: angle.cos() * speed,
					drift_y: angle.sin() * speed,
					radius: rng.random_range(cfg.radius.0..=cfg.radius.1.max(cfg.radius.0)),
					opacity: rng.random_range(cfg.opacity.0..=cfg.opacity.1.max(cfg.opacity.0)),
				}
			})
			.collect();
	}

	/// Throw away all motion and rebuild the pool for the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.shockwave.clear();
		self.populate();
	}

	/// Start a shockwave at `(x, y)` in canvas pixels, replacing any running one.
	pub fn shockwave(&mut self, x: f64, y: f64) {
		self.shockwave.trigger((x, y), self.time);
	}

	/// Step every particle once. `dt` only advances the shockwave clock;
	/// spring, damping and drift are per frame.
	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
		let wave = self.shockwave.active(&self.cfg.shockwave, self.time);
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			if let Some((ix, iy)) = wave.and_then(|s| s.impulse(&self.cfg.shockwave, (p.x, p.y), self.time)) {
				p.vx += ix;
				p.vy += iy;
			}
			p.origin_x += p.drift_x;
			p.origin_y += p.drift_y;
			p.vx += (p.origin_x - p.x) * self.cfg.return_force;
			p.vy += (p.origin_y - p.y) * self.cfg.return_force;
			p.vx *= self.cfg.damping;
			p.vy *= self.cfg.damping;
			p.x += p.vx;
			p.y += p.vy;
			wrap_axis(&mut p.x, &mut p.origin_x, w);
			wrap_axis(&mut p.y, &mut p.origin_y, h);
		}
	}

	/// Pairs closer than the link distance, fading linearly with distance.
	pub fn links(&self) -> Vec<ParticleLink> {
		let max = self.cfg.link_distance;
		let mut links = Vec::new();
		if max <= 0.0 {
			return links;
		}
		for (a, pa) in self.particles.iter().enumerate() {
			for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
				let d = ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt();
				if d < max {
					links.push(ParticleLink {
						a,
						b,
						opacity: (1.0 - d / max) * self.cfg.link_opacity,
					});
				}
			}
		}
		links
	}

	/// The pool, in spawn order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}
}

/// Toroidal wrap; the rest position travels with the particle.
fn wrap_axis(pos: &mut f64, origin: &mut f64, size: f64) {
	if size <= 0.0 {
		return;
	}
	if *pos < 0.0 {
		*pos += size;
		*origin += size;
	} else if *pos > size {
		*pos -= size;
		*origin -= size;
	}
}
