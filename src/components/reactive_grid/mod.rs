//! Displaced grid mesh backdrop.

mod component;
mod render;
mod state;
mod types;

pub use component::ReactiveGridBackground;
pub use state::ReactiveGrid;
pub use types::{GridConfig, GridPoint};
