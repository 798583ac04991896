//! Presentation colours, injected through Leptos context.

use leptos::prelude::*;

/// Colour values read by every canvas renderer. Purely presentational.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Page and grid backdrop.
	pub background: String,
	/// `r, g, b` triple used for network lines, with alpha applied per draw.
	pub line_rgb: String,
	/// Hexagon fill.
	pub node_fill: String,
	/// Hexagon outline.
	pub node_stroke: String,
	/// Shadow around the active hexagon.
	pub active_glow: String,
	/// Label text.
	pub label: String,
	/// `r, g, b` triple for particles and their links.
	pub particle_rgb: String,
	/// `r, g, b` triple for the grid mesh.
	pub grid_rgb: String,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: "#0b0f1a".into(),
			line_rgb: "100, 180, 255".into(),
			node_fill: "#111a2e".into(),
			node_stroke: "#64b4ff".into(),
			active_glow: "rgba(100, 180, 255, 0.35)".into(),
			label: "#e6f0ff".into(),
			particle_rgb: "160, 200, 255".into(),
			grid_rgb: "60, 90, 140".into(),
		}
	}
}

/// Make `theme` available to every component below the caller.
pub fn provide_theme(theme: Theme) {
	provide_context(theme);
}

/// Read the injected theme, falling back to the default palette.
pub fn use_theme() -> Theme {
	use_context::<Theme>().unwrap_or_default()
}
