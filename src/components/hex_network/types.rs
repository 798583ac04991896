use crate::components::Point;
use crate::components::wave_line::WaveConfig;
use crate::tween::Lerp;

/// A section of the network. `content` is owned by the application and only
/// carried around, never inspected.
#[derive(Clone, Debug, PartialEq)]
pub struct HexNode<C> {
	/// Unique identifier, also used by navigate commands.
	pub id: String,
	/// Text drawn inside the hexagon.
	pub label: String,
	/// Logical position, independent of screen pixels.
	pub position: Point,
	/// Adjacent node ids; duplicates and asymmetric declarations are fine.
	pub neighbors: Vec<String>,
	/// Payload shown while the node is focused.
	pub content: C,
}

/// Overlay copy shown while a node is focused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeContent {
	/// Heading of the overlay card.
	pub title: String,
	/// Paragraph under the heading.
	pub body: String,
}

/// Logical-to-screen mapping: `screen = logical * scale + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
	/// Zoom factor.
	pub scale: f64,
	/// Horizontal translation in screen pixels.
	pub x: f64,
	/// Vertical translation in screen pixels.
	pub y: f64,
}

impl Default for CameraTransform {
	fn default() -> Self {
		Self {
			scale: 1.0,
			x: 0.0,
			y: 0.0,
		}
	}
}

impl Lerp for CameraTransform {
	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			scale: self.scale.lerp(&to.scale, t),
			x: self.x.lerp(&to.x, t),
			y: self.y.lerp(&to.y, t),
		}
	}
}

/// Size of the drawing surface in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Viewport {
	/// Middle of the surface.
	pub fn center(&self) -> Point {
		(self.width / 2.0, self.height / 2.0)
	}
}

/// Where the camera controller is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewState {
	/// Camera centred on the active node, its content visible.
	Focused,
	/// Camera travelling from the active node to the overview.
	ZoomingOut,
	/// Overview: every node framed, none open.
	Network,
	/// Camera travelling from the overview to a target node.
	ZoomingIn,
}

impl ViewState {
	/// Only stable states accept new transitions.
	pub fn is_stable(self) -> bool {
		matches!(self, ViewState::Focused | ViewState::Network)
	}

	/// Kebab-case name, for logs and `data-` attributes.
	pub fn as_str(self) -> &'static str {
		match self {
			ViewState::Focused => "focused",
			ViewState::ZoomingOut => "zooming-out",
			ViewState::Network => "network",
			ViewState::ZoomingIn => "zooming-in",
		}
	}
}

/// External "navigate to node" request. Bumping `counter` re-issues a request
/// for the same target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigateCommand {
	/// Id of the node to show.
	pub target: String,
	/// Request number; only a changed value is acted on.
	pub counter: u64,
}

/// Notifications drained from [`super::HexNetworkState::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum NetworkEvent {
	/// The controller moved along one edge of its cycle.
	ViewStateChanged { from: ViewState, to: ViewState },
	/// Fired once per completed zoom-in.
	ActiveNodeChanged(String),
}

/// Layout and timing of the hex network.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	/// Visual hexagon radius in logical units.
	pub node_radius: f64,
	/// Scale used when focused on a single node.
	pub focus_scale: f64,
	/// Upper bound for the fit-all scale.
	pub max_fit_scale: f64,
	/// Screen padding kept around the fit-all bounding box.
	pub padding: f64,
	/// Camera transition length in seconds.
	pub transition_duration: f64,
	/// Sub-timeline (fractions of the transition) where content fades out.
	pub fade_out: (f64, f64),
	/// Sub-timeline where content fades in.
	pub fade_in: (f64, f64),
	/// Pointer distance in screen pixels that still counts as hitting a line.
	pub line_hit_distance: f64,
	/// Pluck waveform used by every line.
	pub wave: WaveConfig,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			node_radius: 60.0,
			focus_scale: 1.0,
			max_fit_scale: 0.45,
			padding: 40.0,
			transition_duration: 1.4,
			fade_out: (0.0, 0.35),
			fade_in: (0.65, 1.0),
			line_hit_distance: 10.0,
			wave: WaveConfig::default(),
		}
	}
}
