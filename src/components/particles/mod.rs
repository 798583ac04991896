//! Floating particle backdrop linked by proximity lines.

mod component;
mod render;
mod state;
mod types;

pub use component::ReactiveParticlesBackground;
pub use state::ParticleField;
pub use types::{Particle, ParticleConfig, ParticleLink};
