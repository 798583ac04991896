//! "String vibration" displacement for plucked network lines.

mod state;
mod types;
pub mod wave;

pub use state::PluckAnimation;
pub use types::WaveConfig;
