//! Progress markers over the network's sections.

mod component;
mod state;

pub use component::{SectionItem, SectionNav};
pub use state::{MarkerStatus, marker_status, marker_statuses};
