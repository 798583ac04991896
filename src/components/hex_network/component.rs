use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::HexNetworkState;
use super::types::{HexNode, NavigateCommand, NetworkConfig, NetworkEvent, NodeContent, Viewport};
use crate::components::canvas::{context_2d, fit_canvas, local_point, on_window_resize, start_frame_loop};
use crate::components::shockwave::use_shockwave_bus;
use crate::theme::use_theme;

type SharedState = Rc<RefCell<Option<HexNetworkState<NodeContent>>>>;

/// Hexagonal section network with camera transitions between a focused node
/// and the overview. Nodes are read once when the canvas mounts.
#[component]
pub fn HexaNetworkAdvanced(
	/// Sections to lay out; ids must be unique.
	#[prop(into)]
	nodes: Signal<Vec<HexNode<NodeContent>>>,
	/// External navigation; each new counter value is applied once.
	#[prop(into)]
	navigate: Signal<Option<NavigateCommand>>,
	/// External zoom-out trigger; each new counter value is applied once.
	#[prop(into, optional)]
	zoom_out: MaybeProp<u64>,
	/// Node focused at mount. Defaults to the first node.
	#[prop(optional, into)]
	initial: Option<String>,
	/// Called with the node id after every completed zoom-in.
	#[prop(optional)]
	on_active_change: Option<Callback<String>>,
	/// Layout and timing overrides.
	#[prop(optional)]
	config: Option<NetworkConfig>,
	/// Fill the window and follow its size, or fill the parent element.
	#[prop(default = true)]
	fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cfg = config.unwrap_or_default();
	let theme = use_theme();
	let bus = use_shockwave_bus();
	let state: SharedState = Rc::new(RefCell::new(None));

	let content = RwSignal::new(None::<NodeContent>);
	let opacity = RwSignal::new(0.0);
	let anchor = RwSignal::new(None::<(f64, f64)>);
	let interactive = RwSignal::new(false);
	let hovering = RwSignal::new(false);

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((w, h)) = fit_canvas(&canvas, fullscreen) else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		let viewport = Viewport { width: w, height: h };
		match HexNetworkState::new(nodes.get_untracked(), initial.as_deref(), viewport, cfg.clone()) {
			Ok(s) => *state_init.borrow_mut() = Some(s),
			Err(err) => {
				error!("hex network disabled: {err}");
				return;
			}
		}

		let resize = if fullscreen {
			let state_resize = state_init.clone();
			on_window_resize(canvas, move |nw, nh| {
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(Viewport { width: nw, height: nh });
				}
			})
		} else {
			None
		};

		let (state_anim, theme) = (state_init.clone(), theme.clone());
		let mut shown: Option<String> = None;
		let frames = start_frame_loop(move |dt| {
			let events = {
				let mut guard = state_anim.borrow_mut();
				let Some(s) = guard.as_mut() else {
					return;
				};
				let events = s.tick(dt);
				render::render(s, &theme, &ctx);

				let node = s.content_node();
				if node.map(|n| &n.id) != shown.as_ref() {
					shown = node.map(|n| n.id.clone());
					content.set(node.map(|n| n.content.clone()));
				}
				if (opacity.get_untracked() - s.content_opacity()).abs() > 1e-3 {
					opacity.set(s.content_opacity());
				}
				let at = s.content_anchor();
				let moved = match (anchor.get_untracked(), at) {
					(Some(a), Some(b)) => (a.0 - b.0).abs() > 0.5 || (a.1 - b.1).abs() > 0.5,
					(a, b) => a.is_some() != b.is_some(),
				};
				if moved {
					anchor.set(at);
				}
				if interactive.get_untracked() != s.content_interactive() {
					interactive.set(s.content_interactive());
				}
				events
			};
			for event in events {
				if let (NetworkEvent::ActiveNodeChanged(id), Some(cb)) = (event, on_active_change) {
					cb.run(id);
				}
			}
		});
		// Owned by this effect: unmounting drops both and unregisters them.
		StoredValue::new_local((resize, frames));
	});

	let state_nav = state.clone();
	Effect::new(move |_| {
		let Some(cmd) = navigate.get() else {
			return;
		};
		if let Some(ref mut s) = *state_nav.borrow_mut() {
			if let Err(err) = s.apply_command(&cmd) {
				warn!("ignoring navigation: {err}");
			}
		}
	});

	let state_zoom = state.clone();
	Effect::new(move |_| {
		let Some(counter) = zoom_out.get() else {
			return;
		};
		if let Some(ref mut s) = *state_zoom.borrow_mut() {
			s.apply_zoom_out(counter);
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let point = local_point(&canvas, &ev);
		if let Some(bus) = bus {
			bus.emit(ev.client_x() as f64, ev.client_y() as f64);
		}
		if let Some(ref mut s) = *state_click.borrow_mut() {
			if let Some(idx) = s.node_at(point) {
				let id = s.nodes()[idx].id.clone();
				s.click_node(&id);
			} else if let Some(line) = s.line_at(point) {
				s.pluck_line(line, point);
			}
		}
	};

	let state_hover = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let point = local_point(&canvas, &ev);
		if let Some(ref s) = *state_hover.borrow() {
			let hit = s.node_at(point).is_some() || s.line_at(point).is_some();
			if hovering.get_untracked() != hit {
				hovering.set(hit);
			}
		}
	};

	let state_overview = state.clone();
	let on_overview = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_overview.borrow_mut() {
			s.zoom_out();
		}
	};

	let controls = move || if interactive.get() { "auto" } else { "none" };

	view! {
		<div class="hex-network" style:position="relative" style:width="100%" style:height="100%">
			<canvas
				node_ref=canvas_ref
				class="hex-network-canvas"
				on:click=on_click
				on:mousemove=on_mousemove
				style:display="block"
				style:cursor=move || if hovering.get() { "pointer" } else { "default" }
			/>
			// The card itself never takes the pointer, so the hexagon and lines
			// around it stay clickable; only its controls do once focused.
			<div
				class="hex-network-content"
				style:display=move || if anchor.get().is_some() { "block" } else { "none" }
				style:left=move || anchor.get().map_or_else(String::new, |a| format!("{}px", a.0))
				style:top=move || anchor.get().map_or_else(String::new, |a| format!("{}px", a.1))
				style:opacity=move || opacity.get().to_string()
			>
				{move || {
					content
						.get()
						.map(|c| {
							view! {
								<h2>{c.title}</h2>
								<p>{c.body}</p>
							}
						})
				}}
				<button class="hex-network-overview" style:pointer-events=controls on:click=on_overview>
					"Overview"
				</button>
			</div>
		</div>
	}
}
