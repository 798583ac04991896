use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::render;
use super::state::ParticleField;
use super::types::ParticleConfig;
use crate::components::canvas::{context_2d, fit_canvas, on_window_resize, start_frame_loop};
use crate::components::shockwave::use_shockwave_bus;
use crate::theme::use_theme;

/// Fullscreen floating-particle backdrop that reacts to shockwaves on the bus.
#[component]
pub fn ReactiveParticlesBackground(
	/// Pool and physics overrides.
	#[prop(optional)]
	config: Option<ParticleConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let cfg = config.unwrap_or_default();
	let theme = use_theme();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let field_init = field.clone();

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
		*field_init.borrow_mut() = Some(ParticleField::new(w, h, cfg.clone(), js_sys::Date::now() as u64));

		let field_resize = field_init.clone();
		let resize = on_window_resize(canvas, move |nw, nh| {
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		});

		let (field_anim, theme) = (field_init.clone(), theme.clone());
		let frames = start_frame_loop(move |dt| {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick(dt);
				render::render(f, &theme, &ctx);
			}
		});
		// Owned by this effect: unmounting drops both and unregisters them.
		StoredValue::new_local((resize, frames));
	});

	if let Some(bus) = use_shockwave_bus() {
		let field_wave = field.clone();
		Effect::new(move |_| {
			let Some(ev) = bus.latest() else {
				return;
			};
			if let Some(ref mut f) = *field_wave.borrow_mut() {
				f.shockwave(ev.x, ev.y);
			}
		});
	}

	view! {
		<canvas
			node_ref=canvas_ref
			class="reactive-particles"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
