use std::collections::{BTreeSet, HashMap};

use log::{debug, info, warn};

use super::geometry::{edge_endpoints, fit_all, focus_on, to_logical, to_screen};
use super::types::{CameraTransform, HexNode, NavigateCommand, NetworkConfig, NetworkEvent, ViewState, Viewport};
use crate::components::Point;
use crate::components::wave_line::PluckAnimation;
use crate::components::wave_line::wave::{distance_to_segment, project_click_t};
use crate::error::NetworkError;
use crate::tween::{Easing, Lerp, Tween, TweenStep, window};

/// Vertical gap in screen pixels between a focused hexagon and its content.
const CONTENT_GAP: f64 = 16.0;

/// A declared adjacency between nodes `a < b`, with its own pluck animation.
#[derive(Clone, Debug)]
pub struct NetworkLine {
	/// Lower node index.
	pub a: usize,
	/// Higher node index.
	pub b: usize,
	/// Vibration state of this line.
	pub pluck: PluckAnimation,
}

#[derive(Clone, Debug)]
struct Transition {
	from: CameraTransform,
	to: CameraTransform,
	tween: Tween,
}

/// View controller for the hex network: owns the camera and walks the
/// `focused -> zooming-out -> network -> zooming-in -> focused` cycle.
pub struct HexNetworkState<C> {
	nodes: Vec<HexNode<C>>,
	index: HashMap<String, usize>,
	lines: Vec<NetworkLine>,
	cfg: NetworkConfig,
	viewport: Viewport,
	camera: CameraTransform,
	view_state: ViewState,
	active: Option<usize>,
	target: Option<usize>,
	pending: Option<usize>,
	transition: Option<Transition>,
	content_opacity: f64,
	last_command: Option<u64>,
	last_zoom_out: Option<u64>,
	events: Vec<NetworkEvent>,
}

impl<C> HexNetworkState<C> {
	/// Build the network. `initial` defaults to the first node; with no nodes
	/// the network starts in overview mode.
	pub fn new(
		nodes: Vec<HexNode<C>>,
		initial: Option<&str>,
		viewport: Viewport,
		cfg: NetworkConfig,
	) -> Result<Self, NetworkError> {
		let mut index = HashMap::with_capacity(nodes.len());
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.clone(), i).is_some() {
				return Err(NetworkError::DuplicateNode(node.id.clone()));
			}
		}
		let active = match initial {
			Some(id) => Some(
				*index
					.get(id)
					.ok_or_else(|| NetworkError::UnknownNode(id.to_string()))?,
			),
			None if nodes.is_empty() => None,
			None => Some(0),
		};

		let mut pairs = BTreeSet::new();
		for (i, node) in nodes.iter().enumerate() {
			for neighbor in &node.neighbors {
				match index.get(neighbor) {
					Some(&j) if j != i => {
						pairs.insert((i.min(j), i.max(j)));
					}
					Some(_) => {}
					None => warn!("node {} lists unknown neighbor {}", node.id, neighbor),
				}
			}
		}
		let lines = pairs
			.into_iter()
			.map(|(a, b)| NetworkLine {
				a,
				b,
				pluck: PluckAnimation::default(),
			})
			.collect();

		let mut state = Self {
			nodes,
			index,
			lines,
			cfg,
			viewport,
			camera: CameraTransform::default(),
			view_state: if active.is_some() {
				ViewState::Focused
			} else {
				ViewState::Network
			},
			active,
			target: None,
			pending: None,
			transition: None,
			content_opacity: if active.is_some() { 1.0 } else { 0.0 },
			last_command: None,
			last_zoom_out: None,
			events: Vec::new(),
		};
		state.camera = state.stable_camera();
		Ok(state)
	}

	fn focus_camera(&self, idx: usize) -> CameraTransform {
		focus_on(self.nodes[idx].position, self.viewport, self.cfg.focus_scale)
	}

	fn fit_camera(&self) -> CameraTransform {
		fit_all(
			self.nodes.iter().map(|n| n.position),
			self.cfg.node_radius,
			self.viewport,
			self.cfg.padding,
			self.cfg.max_fit_scale,
		)
	}

	/// Camera the current state settles on.
	fn stable_camera(&self) -> CameraTransform {
		match self.view_state {
			ViewState::Focused => self.active.map(|i| self.focus_camera(i)),
			ViewState::ZoomingIn => self.target.map(|i| self.focus_camera(i)),
			ViewState::ZoomingOut | ViewState::Network => None,
		}
		.unwrap_or_else(|| self.fit_camera())
	}

	fn set_state(&mut self, to: ViewState) {
		let from = self.view_state;
		self.view_state = to;
		debug!("hex network: {} -> {}", from.as_str(), to.as_str());
		self.events.push(NetworkEvent::ViewStateChanged { from, to });
	}

	fn begin_transition(&mut self, to_state: ViewState) {
		if let Some(prev) = self.transition.as_mut() {
			prev.tween.cancel();
		}
		self.set_state(to_state);
		let to = self.stable_camera();
		self.transition = Some(Transition {
			from: self.camera,
			to,
			tween: Tween::new(self.cfg.transition_duration, Easing::EaseInOutCubic),
		});
	}

	fn begin_zoom_out(&mut self) {
		self.begin_transition(ViewState::ZoomingOut);
	}

	fn begin_zoom_in(&mut self, idx: usize) {
		self.target = Some(idx);
		self.begin_transition(ViewState::ZoomingIn);
	}

	/// User clicked node `id`. Clicking the active node while focused zooms
	/// out; clicking any node in overview zooms into it.
	pub fn click_node(&mut self, id: &str) -> bool {
		let Some(&idx) = self.index.get(id) else {
			return false;
		};
		match self.view_state {
			ViewState::Focused if self.active == Some(idx) => {
				self.begin_zoom_out();
				true
			}
			ViewState::Network => {
				self.begin_zoom_in(idx);
				true
			}
			state => {
				debug!("ignoring click on {id} while {}", state.as_str());
				false
			}
		}
	}

	/// Leave the focused node for the overview.
	pub fn zoom_out(&mut self) -> bool {
		if self.view_state != ViewState::Focused {
			debug!("ignoring zoom out while {}", self.view_state.as_str());
			return false;
		}
		self.begin_zoom_out();
		true
	}

	/// Navigate to `id` from wherever the camera is. From `focused` this zooms
	/// out first and queues `id`; a later request during that zoom-out
	/// replaces the queued target.
	pub fn navigate_to(&mut self, id: &str) -> Result<bool, NetworkError> {
		let idx = *self
			.index
			.get(id)
			.ok_or_else(|| NetworkError::UnknownNode(id.to_string()))?;
		let accepted = match self.view_state {
			ViewState::Focused if self.active == Some(idx) => false,
			ViewState::Focused => {
				self.pending = Some(idx);
				self.begin_zoom_out();
				true
			}
			ViewState::ZoomingOut => {
				self.pending = Some(idx);
				true
			}
			ViewState::Network => {
				self.begin_zoom_in(idx);
				true
			}
			ViewState::ZoomingIn => false,
		};
		if accepted {
			info!("navigating to {id}");
		} else {
			debug!("dropping navigation to {id} while {}", self.view_state.as_str());
		}
		Ok(accepted)
	}

	/// Apply an external command once per distinct counter value.
	pub fn apply_command(&mut self, cmd: &NavigateCommand) -> Result<bool, NetworkError> {
		if self.last_command == Some(cmd.counter) {
			return Ok(false);
		}
		self.last_command = Some(cmd.counter);
		self.navigate_to(&cmd.target)
	}

	/// External zoom-out request, applied once per distinct counter value.
	pub fn apply_zoom_out(&mut self, counter: u64) -> bool {
		if self.last_zoom_out == Some(counter) {
			return false;
		}
		self.last_zoom_out = Some(counter);
		self.zoom_out()
	}

	/// Advance animations by `dt` seconds and hand back what happened since
	/// the previous call.
	pub fn tick(&mut self, dt: f64) -> Vec<NetworkEvent> {
		for line in &mut self.lines {
			line.pluck.tick(dt, &self.cfg.wave);
		}

		if let Some(tr) = self.transition.as_mut() {
			match tr.tween.advance(dt) {
				TweenStep::Running(eased) => {
					self.camera = tr.from.lerp(&tr.to, eased);
					let progress = tr.tween.progress();
					self.content_opacity = match self.view_state {
						ViewState::ZoomingOut => {
							1.0 - Easing::EaseOutCubic.apply(window(progress, self.cfg.fade_out.0, self.cfg.fade_out.1))
						}
						ViewState::ZoomingIn => {
							Easing::EaseInCubic.apply(window(progress, self.cfg.fade_in.0, self.cfg.fade_in.1))
						}
						_ => self.content_opacity,
					};
				}
				TweenStep::Complete | TweenStep::Idle => {
					self.camera = tr.to;
					self.finish_transition();
				}
			}
		}

		std::mem::take(&mut self.events)
	}

	fn finish_transition(&mut self) {
		self.transition = None;
		match self.view_state {
			ViewState::ZoomingOut => {
				self.content_opacity = 0.0;
				self.set_state(ViewState::Network);
				if let Some(idx) = self.pending.take() {
					self.begin_zoom_in(idx);
				}
			}
			ViewState::ZoomingIn => {
				self.content_opacity = 1.0;
				self.active = self.target.take();
				self.set_state(ViewState::Focused);
				if let Some(idx) = self.active {
					let id = self.nodes[idx].id.clone();
					info!("active node is now {id}");
					self.events.push(NetworkEvent::ActiveNodeChanged(id));
				}
			}
			_ => {}
		}
	}

	/// New viewport: stable states snap, a running transition is re-aimed.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		let target = self.stable_camera();
		match self.transition.as_mut() {
			Some(tr) => tr.to = target,
			None => self.camera = target,
		}
	}

	/// Node under a screen point, nearest first.
	pub fn node_at(&self, screen: Point) -> Option<usize> {
		let p = to_logical(&self.camera, screen);
		self.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (i, (n.position.0 - p.0).hypot(n.position.1 - p.1)))
			.filter(|&(_, d)| d < self.cfg.node_radius)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Line under a screen point, within the configured hit distance.
	pub fn line_at(&self, screen: Point) -> Option<usize> {
		let p = to_logical(&self.camera, screen);
		let max = self.cfg.line_hit_distance / self.camera.scale.max(f64::EPSILON);
		self.lines
			.iter()
			.enumerate()
			.filter_map(|(i, _)| {
				let (start, end) = self.line_endpoints(i)?;
				Some((i, distance_to_segment(start, end, p)))
			})
			.filter(|&(_, d)| d <= max)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Pluck line `idx` where the pointer at `screen` projects onto it.
	pub fn pluck_line(&mut self, idx: usize, screen: Point) {
		let Some((start, end)) = self.line_endpoints(idx) else {
			return;
		};
		let click_t = project_click_t(start, end, to_logical(&self.camera, screen));
		self.lines[idx].pluck.pluck(click_t, &self.cfg.wave);
	}

	/// Logical endpoints of line `idx`, on the facing hexagon vertices.
	/// `None` for an index past the last line.
	pub fn line_endpoints(&self, idx: usize) -> Option<(Point, Point)> {
		let line = self.lines.get(idx)?;
		Some(edge_endpoints(
			self.nodes[line.a].position,
			self.nodes[line.b].position,
			self.cfg.node_radius,
		))
	}

	/// Current (possibly vibrating) polyline of line `idx` in logical space.
	pub fn line_path(&self, idx: usize) -> Option<Vec<Point>> {
		let (start, end) = self.line_endpoints(idx)?;
		Some(self.lines[idx].pluck.path(start, end, &self.cfg.wave))
	}

	/// Declared adjacencies in `(a, b)` order.
	pub fn lines(&self) -> &[NetworkLine] {
		&self.lines
	}

	/// Every node pair regardless of adjacency; decoration only.
	pub fn synapses(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		let n = self.nodes.len();
		(0..n).flat_map(move |a| (a + 1..n).map(move |b| (a, b)))
	}

	/// Nodes in the order they were given.
	pub fn nodes(&self) -> &[HexNode<C>] {
		&self.nodes
	}

	/// Current camera, mid-tween included.
	pub fn camera(&self) -> CameraTransform {
		self.camera
	}

	/// Where the controller is in its cycle.
	pub fn view_state(&self) -> ViewState {
		self.view_state
	}

	/// Screen size the cameras are computed for.
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Settings the network was built with.
	pub fn config(&self) -> &NetworkConfig {
		&self.cfg
	}

	/// Index of the last node zoomed into, if any.
	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	/// Id of the last node zoomed into, if any.
	pub fn active_id(&self) -> Option<&str> {
		self.active.map(|i| self.nodes[i].id.as_str())
	}

	/// Node whose content is on screen (or fading): the active node, or the
	/// zoom-in target while zooming in.
	pub fn content_node(&self) -> Option<&HexNode<C>> {
		let idx = match self.view_state {
			ViewState::Focused | ViewState::ZoomingOut => self.active,
			ViewState::ZoomingIn => self.target,
			ViewState::Network => None,
		}?;
		self.nodes.get(idx)
	}

	/// Screen point just below the content node's hexagon, where its
	/// content is anchored. Follows the camera while it moves.
	pub fn content_anchor(&self) -> Option<Point> {
		let node = self.content_node()?;
		let (x, y) = to_screen(&self.camera, node.position);
		Some((x, y + self.cfg.node_radius * self.camera.scale + CONTENT_GAP))
	}

	/// Opacity of the content overlay in `[0, 1]`.
	pub fn content_opacity(&self) -> f64 {
		self.content_opacity
	}

	/// Content only takes input once the camera has settled on it.
	pub fn content_interactive(&self) -> bool {
		self.view_state == ViewState::Focused
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::SmallRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::components::canvas::frame_delta;

	const DT: f64 = 1.0 / 60.0;
	const VIEW: Viewport = Viewport {
		width: 1280.0,
		height: 720.0,
	};

	fn node(id: &str, position: Point, neighbors: &[&str]) -> HexNode<()> {
		HexNode {
			id: id.into(),
			label: id.to_uppercase(),
			position,
			neighbors: neighbors.iter().map(|s| s.to_string()).collect(),
			content: (),
		}
	}

	fn pair() -> HexNetworkState<()> {
		let nodes = vec![node("a", (0.0, 0.0), &["b"]), node("b", (100.0, 0.0), &["a"])];
		HexNetworkState::new(nodes, Some("a"), VIEW, NetworkConfig::default()).unwrap()
	}

	fn run(state: &mut HexNetworkState<()>, seconds: f64) -> Vec<NetworkEvent> {
		let mut events = Vec::new();
		for _ in 0..(seconds / DT).ceil() as usize {
			events.extend(state.tick(DT));
		}
		events
	}

	fn active_changes(events: &[NetworkEvent]) -> Vec<String> {
		events
			.iter()
			.filter_map(|e| match e {
				NetworkEvent::ActiveNodeChanged(id) => Some(id.clone()),
				_ => None,
			})
			.collect()
	}

	fn is_legal(from: ViewState, to: ViewState) -> bool {
		matches!(
			(from, to),
			(ViewState::Focused, ViewState::ZoomingOut)
				| (ViewState::ZoomingOut, ViewState::Network)
				| (ViewState::Network, ViewState::ZoomingIn)
				| (ViewState::ZoomingIn, ViewState::Focused)
		)
	}

	#[test]
	fn zoom_out_then_navigate() {
		let mut state = pair();
		assert_eq!(state.view_state(), ViewState::Focused);
		assert_eq!(state.active_id(), Some("a"));

		assert!(state.zoom_out());
		assert_eq!(state.view_state(), ViewState::ZoomingOut);
		let events = run(&mut state, 1.5);
		assert_eq!(state.view_state(), ViewState::Network);
		assert!(active_changes(&events).is_empty());

		assert_eq!(state.navigate_to("b"), Ok(true));
		assert_eq!(state.view_state(), ViewState::ZoomingIn);
		let events = run(&mut state, 1.5);
		assert_eq!(state.view_state(), ViewState::Focused);
		assert_eq!(state.active_id(), Some("b"));
		assert_eq!(active_changes(&events), vec!["b".to_string()]);
		assert!(run(&mut state, 1.0).is_empty());
	}

	#[test]
	fn camera_lands_on_targets() {
		let mut state = pair();
		assert_eq!(to_screen(&state.camera(), (0.0, 0.0)), (640.0, 360.0));
		state.zoom_out();
		run(&mut state, 1.5);
		let fit = fit_all([(0.0, 0.0), (100.0, 0.0)], 60.0, VIEW, 40.0, 0.45);
		assert_eq!(state.camera(), fit);
		state.click_node("b");
		run(&mut state, 1.5);
		assert_eq!(state.camera(), focus_on((100.0, 0.0), VIEW, 1.0));
	}

	#[test]
	fn clicking_active_node_zooms_out_and_other_nodes_are_ignored() {
		let mut state = pair();
		assert!(!state.click_node("b"));
		assert_eq!(state.view_state(), ViewState::Focused);
		assert!(state.click_node("a"));
		assert_eq!(state.view_state(), ViewState::ZoomingOut);
		assert!(!state.click_node("a"));
		assert!(!state.zoom_out());
	}

	#[test]
	fn requests_during_zoom_in_are_dropped() {
		let mut state = pair();
		state.zoom_out();
		run(&mut state, 1.5);
		state.click_node("b");
		run(&mut state, 0.5);
		assert_eq!(state.navigate_to("a"), Ok(false));
		assert!(!state.click_node("a"));
		let events = run(&mut state, 1.5);
		assert_eq!(state.active_id(), Some("b"));
		assert_eq!(active_changes(&events), vec!["b".to_string()]);
	}

	#[test]
	fn navigate_while_focused_chains_through_network() {
		let mut state = pair();
		assert_eq!(state.navigate_to("b"), Ok(true));
		assert_eq!(state.view_state(), ViewState::ZoomingOut);
		let events = run(&mut state, 3.0);
		let states: Vec<_> = events
			.iter()
			.filter_map(|e| match e {
				NetworkEvent::ViewStateChanged { to, .. } => Some(*to),
				_ => None,
			})
			.collect();
		assert_eq!(
			states,
			vec![ViewState::ZoomingOut, ViewState::Network, ViewState::ZoomingIn, ViewState::Focused]
		);
		assert_eq!(state.active_id(), Some("b"));
		assert_eq!(active_changes(&events), vec!["b".to_string()]);
	}

	#[test]
	fn later_request_during_zoom_out_replaces_pending() {
		let nodes = vec![
			node("a", (0.0, 0.0), &["b"]),
			node("b", (100.0, 0.0), &["c"]),
			node("c", (200.0, 50.0), &[]),
		];
		let mut state = HexNetworkState::new(nodes, Some("a"), VIEW, NetworkConfig::default()).unwrap();
		state.navigate_to("b").unwrap();
		run(&mut state, 0.3);
		state.navigate_to("c").unwrap();
		let events = run(&mut state, 3.0);
		assert_eq!(state.active_id(), Some("c"));
		assert_eq!(active_changes(&events), vec!["c".to_string()]);
	}

	#[test]
	fn navigate_to_current_node_is_a_no_op() {
		let mut state = pair();
		assert_eq!(state.navigate_to("a"), Ok(false));
		assert_eq!(state.view_state(), ViewState::Focused);
	}

	#[test]
	fn unknown_targets_error() {
		let mut state = pair();
		assert_eq!(state.navigate_to("zz"), Err(NetworkError::UnknownNode("zz".into())));
		assert!(!state.click_node("zz"));
	}

	#[test]
	fn commands_are_deduplicated_by_counter() {
		let mut state = pair();
		let cmd = NavigateCommand {
			target: "b".into(),
			counter: 1,
		};
		assert_eq!(state.apply_command(&cmd), Ok(true));
		run(&mut state, 3.0);
		assert_eq!(state.active_id(), Some("b"));
		state.zoom_out();
		run(&mut state, 1.5);
		// Same counter: stale, ignored.
		assert_eq!(state.apply_command(&cmd), Ok(false));
		assert_eq!(state.view_state(), ViewState::Network);
		let again = NavigateCommand { counter: 2, ..cmd };
		assert_eq!(state.apply_command(&again), Ok(true));
		assert_eq!(state.view_state(), ViewState::ZoomingIn);
	}

	#[test]
	fn content_fades_on_sub_timelines() {
		let mut state = pair();
		assert_eq!(state.content_opacity(), 1.0);
		assert!(state.content_interactive());
		state.zoom_out();
		assert!(!state.content_interactive());
		run(&mut state, 0.6);
		assert_eq!(state.content_opacity(), 0.0);
		run(&mut state, 1.0);
		state.click_node("b");
		run(&mut state, 0.7);
		assert_eq!(state.content_opacity(), 0.0);
		assert_eq!(state.content_node().map(|n| n.id.as_str()), Some("b"));
		run(&mut state, 0.5);
		assert!(state.content_opacity() > 0.0);
		assert!(!state.content_interactive());
		run(&mut state, 0.5);
		assert_eq!(state.content_opacity(), 1.0);
		assert!(state.content_interactive());
	}

	#[test]
	fn fades_are_eased_within_their_windows() {
		let cfg = NetworkConfig::default();
		let half_out = cfg.transition_duration * (cfg.fade_out.1 - cfg.fade_out.0) / 2.0;
		let mut state = pair();
		state.zoom_out();
		state.tick(half_out);
		// Ease-out: most of the fade happens early.
		assert!((state.content_opacity() - 0.125).abs() < 1e-9);

		run(&mut state, 1.5);
		state.click_node("b");
		let fade_in_mid = cfg.transition_duration * (cfg.fade_in.0 + cfg.fade_in.1) / 2.0;
		state.tick(fade_in_mid);
		// Ease-in: the content only firms up at the very end.
		assert!((state.content_opacity() - 0.125).abs() < 1e-9);
	}

	#[test]
	fn random_triggers_only_follow_legal_edges() {
		let nodes = vec![
			node("a", (0.0, 0.0), &["b", "c"]),
			node("b", (100.0, 0.0), &["a"]),
			node("c", (50.0, 90.0), &["a", "b"]),
		];
		let ids = ["a", "b", "c"];
		let mut state = HexNetworkState::new(nodes, Some("a"), VIEW, NetworkConfig::default()).unwrap();
		let mut rng = SmallRng::seed_from_u64(99);
		for _ in 0..2000 {
			let before = state.view_state();
			let id = ids[rng.random_range(0..ids.len())];
			match rng.random_range(0..4) {
				0 => {
					state.click_node(id);
				}
				1 => {
					state.zoom_out();
				}
				2 => {
					state.navigate_to(id).unwrap();
				}
				_ => {}
			}
			if !before.is_stable() {
				// Only the pending slot may change while a transition runs.
				assert_eq!(state.view_state(), before);
			}
			let frames = rng.random_range(1..40);
			for _ in 0..frames {
				for event in state.tick(DT) {
					if let NetworkEvent::ViewStateChanged { from, to } = event {
						assert!(is_legal(from, to), "{from:?} -> {to:?}");
					}
				}
			}
		}
	}

	#[test]
	fn empty_network_is_inert() {
		let mut state = HexNetworkState::<()>::new(Vec::new(), None, VIEW, NetworkConfig::default()).unwrap();
		assert_eq!(state.view_state(), ViewState::Network);
		assert_eq!(state.active_id(), None);
		assert!(!state.zoom_out());
		assert!(state.tick(DT).is_empty());
		assert_eq!(state.node_at((640.0, 360.0)), None);
		assert_eq!(state.synapses().count(), 0);
	}

	#[test]
	fn construction_validates_ids() {
		let dup = vec![node("a", (0.0, 0.0), &[]), node("a", (1.0, 0.0), &[])];
		assert_eq!(
			HexNetworkState::new(dup, None, VIEW, NetworkConfig::default()).err(),
			Some(NetworkError::DuplicateNode("a".into()))
		);
		let nodes = vec![node("a", (0.0, 0.0), &[])];
		assert_eq!(
			HexNetworkState::new(nodes, Some("x"), VIEW, NetworkConfig::default()).err(),
			Some(NetworkError::UnknownNode("x".into()))
		);
	}

	#[test]
	fn adjacency_is_an_undirected_set() {
		let nodes = vec![
			node("a", (0.0, 0.0), &["b", "b", "ghost", "a"]),
			node("b", (300.0, 0.0), &["a", "c"]),
			node("c", (300.0, 300.0), &[]),
		];
		let state = HexNetworkState::new(nodes, None, VIEW, NetworkConfig::default()).unwrap();
		let pairs: Vec<_> = state.lines().iter().map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
		assert_eq!(state.synapses().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn hit_testing_and_plucking() {
		let nodes = vec![node("a", (0.0, 0.0), &["b"]), node("b", (400.0, 0.0), &["a"])];
		let mut state = HexNetworkState::new(nodes, Some("a"), VIEW, NetworkConfig::default()).unwrap();
		// Focused on "a" at scale 1: logical (x, y) is screen (x + 640, y + 360).
		assert_eq!(state.node_at((650.0, 365.0)), Some(0));
		assert_eq!(state.node_at((640.0, 500.0)), None);
		let (start, end) = state.line_endpoints(0).unwrap();
		let mid = ((start.0 + end.0) / 2.0 + 640.0, (start.1 + end.1) / 2.0 + 360.0);
		assert_eq!(state.line_at(mid), Some(0));
		assert_eq!(state.line_at((mid.0, mid.1 + 50.0)), None);

		state.pluck_line(0, mid);
		assert!(state.lines()[0].pluck.is_active());
		assert!((state.lines()[0].pluck.click_t() - 0.5).abs() < 1e-9);
		state.tick(0.1);
		let path = state.line_path(0).unwrap();
		assert_eq!(path.first(), Some(&start));
		assert_eq!(path.last(), Some(&end));
		assert!(state.lines()[0].pluck.is_active());
	}

	#[test]
	fn line_lookups_past_the_end_are_none() {
		let nodes = vec![node("solo", (0.0, 0.0), &[])];
		let mut state = HexNetworkState::new(nodes, None, VIEW, NetworkConfig::default()).unwrap();
		assert!(state.lines().is_empty());
		assert_eq!(state.line_endpoints(0), None);
		assert_eq!(state.line_path(0), None);
		state.pluck_line(3, (640.0, 360.0));
		assert_eq!(state.line_at((640.0, 360.0)), None);

		let state = pair();
		assert!(state.line_path(0).is_some());
		assert_eq!(state.line_path(1), None);
	}

	#[test]
	fn content_sits_below_the_focused_hexagon() {
		let state = pair();
		let radius = state.config().node_radius;
		let (x, y) = state.content_anchor().unwrap();
		assert_eq!(x, 640.0);
		assert!(y > 360.0 + radius);
		// The whole active hexagon, centre included, stays clickable.
		assert_eq!(state.node_at((640.0, 360.0)), Some(0));
		assert_eq!(state.node_at((640.0, 360.0 + radius - 1.0)), Some(0));
		assert_eq!(state.node_at((x, y)), None);

		let mut state = pair();
		assert!(state.click_node("a"));
		run(&mut state, 1.5);
		assert_eq!(state.content_anchor(), None);
	}

	#[test]
	fn zoom_out_commands_are_deduplicated_by_counter() {
		let mut state = pair();
		assert!(state.apply_zoom_out(0));
		assert_eq!(state.view_state(), ViewState::ZoomingOut);
		run(&mut state, 1.5);
		state.click_node("a");
		run(&mut state, 1.5);
		assert_eq!(state.view_state(), ViewState::Focused);
		// Same counter again: stale.
		assert!(!state.apply_zoom_out(0));
		assert_eq!(state.view_state(), ViewState::Focused);
		assert!(state.apply_zoom_out(1));
		assert_eq!(state.view_state(), ViewState::ZoomingOut);
	}

	/// Seconds of wall clock until a zoom-out settles in `network` when frames
	/// arrive at `hz`.
	fn zoom_out_seconds(hz: f64) -> f64 {
		let mut state = pair();
		state.zoom_out();
		let (mut last, mut now) = (None, 0.0);
		while state.view_state() != ViewState::Network {
			now += 1000.0 / hz;
			state.tick(frame_delta(last, now));
			last = Some(now);
			assert!(now < 10_000.0);
		}
		now / 1000.0
	}

	#[test]
	fn transition_length_is_independent_of_frame_rate() {
		let duration = NetworkConfig::default().transition_duration;
		for hz in [30.0, 60.0, 120.0, 144.0] {
			let seconds = zoom_out_seconds(hz);
			// One frame to prime the clock, at most one more to cross the end.
			assert!(seconds >= duration, "{hz} Hz: {seconds}");
			assert!(seconds <= duration + 2.0 / hz + 1e-9, "{hz} Hz: {seconds}");
		}
	}

	#[test]
	fn resize_retargets_camera() {
		let mut state = pair();
		let wide = Viewport {
			width: 1920.0,
			height: 1080.0,
		};
		state.resize(wide);
		assert_eq!(to_screen(&state.camera(), (0.0, 0.0)), (960.0, 540.0));
		state.zoom_out();
		run(&mut state, 0.5);
		state.resize(VIEW);
		run(&mut state, 1.5);
		assert_eq!(state.camera(), fit_all([(0.0, 0.0), (100.0, 0.0)], 60.0, VIEW, 40.0, 0.45));
	}
}
