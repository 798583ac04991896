//! Canvas components and the pure simulations behind them.

pub mod hex_network;
pub mod particles;
pub mod reactive_grid;
pub mod section_nav;
pub mod shockwave;
pub mod wave_line;

mod canvas;

/// A 2D point, in whatever space the caller is working in.
pub type Point = (f64, f64);
