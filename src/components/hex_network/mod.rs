//! Hexagonal section network: node layout, the camera controller that
//! moves between a focused node and the overview, and its canvas component.

mod component;
pub mod geometry;
mod render;
mod state;
mod types;

pub use component::HexaNetworkAdvanced;
pub use state::{HexNetworkState, NetworkLine};
pub use types::{
	CameraTransform, HexNode, NavigateCommand, NetworkConfig, NetworkEvent, NodeContent, ViewState, Viewport,
};
