use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::render;
use super::state::ReactiveGrid;
use super::types::GridConfig;
use crate::components::canvas::{context_2d, fit_canvas, on_window_resize, start_frame_loop};
use crate::components::shockwave::use_shockwave_bus;
use crate::theme::use_theme;

/// Fullscreen grid mesh backdrop with idle sway and shockwave ripples.
#[component]
pub fn ReactiveGridBackground(
	/// Lattice and sway overrides.
	#[prop(optional)]
	config: Option<GridConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cfg = config.unwrap_or_default();
	let theme = use_theme();
	let grid: Rc<RefCell<Option<ReactiveGrid>>> = Rc::new(RefCell::new(None));
	let grid_init = grid.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((w, h)) = fit_canvas(&canvas, true) else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		*grid_init.borrow_mut() = Some(ReactiveGrid::new(w, h, cfg.clone()));

		let grid_resize = grid_init.clone();
		let resize = on_window_resize(canvas, move |nw, nh| {
			if let Some(ref mut g) = *grid_resize.borrow_mut() {
				g.resize(nw, nh);
			}
		});

		let (grid_anim, theme) = (grid_init.clone(), theme.clone());
		let frames = start_frame_loop(move |dt| {
			if let Some(ref mut g) = *grid_anim.borrow_mut() {
				g.tick(dt);
				render::render(g, &theme, &ctx);
			}
		});
		// Owned by this effect: unmounting drops both and unregisters them.
		StoredValue::new_local((resize, frames));
	});

	if let Some(bus) = use_shockwave_bus() {
		let grid_wave = grid.clone();
		Effect::new(move |_| {
			let Some(ev) = bus.latest() else {
				return;
			};
			if let Some(ref mut g) = *grid_wave.borrow_mut() {
				g.shockwave(ev.x, ev.y);
			}
		});
	}

	view! {
		<canvas
			node_ref=canvas_ref
			class="reactive-grid"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
