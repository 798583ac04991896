//! Browser plumbing shared by the canvas components: sizing, 2D context
//! acquisition, the `requestAnimationFrame` loop and window listeners.
//!
//! The loop and the listener are handed back as handles. Dropping a handle
//! unregisters the callback and frees it, so components keep them in a local
//! `StoredValue` owned by their mount effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

/// Longest step handed to a simulation, in seconds. A frame arriving after a
/// stall (hidden tab, debugger pause) advances by this much at most.
pub const MAX_FRAME_DT: f64 = 0.1;

pub fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Size the canvas to the window (fullscreen) or its parent element.
pub fn fit_canvas(canvas: &HtmlCanvasElement, fullscreen: bool) -> Option<(f64, f64)> {
	let (w, h) = if fullscreen {
		window_size(&web_sys::window()?)?
	} else {
		canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((800.0, 600.0))
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Some((w, h))
}

/// The canvas' 2D context, or `None` (with a warning) when unavailable.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		warn!("2d canvas context unavailable, skipping render");
	}
	ctx
}

/// Mouse position relative to the canvas' top-left corner.
pub fn local_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Seconds between two animation-frame timestamps given in milliseconds,
/// clamped to `[0, MAX_FRAME_DT]`. The very first frame advances nothing.
pub fn frame_delta(last: Option<f64>, now: f64) -> f64 {
	match last {
		Some(last) => ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
		None => 0.0,
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A running animation-frame loop. Dropping it cancels the scheduled frame
/// and frees the callback.
pub struct FrameLoop {
	callback: FrameCallback,
	request: Rc<Cell<i32>>,
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(self.request.get());
		}
		self.callback.borrow_mut().take();
	}
}

/// Call `frame` with the elapsed wall-clock seconds on every animation frame
/// until the returned handle is dropped.
pub fn start_frame_loop(mut frame: impl FnMut(f64) + 'static) -> Option<FrameLoop> {
	let window = web_sys::window()?;
	let callback: FrameCallback = Rc::new(RefCell::new(None));
	let request = Rc::new(Cell::new(0));

	// The closure only holds a weak reference to its own slot, so dropping
	// the handle is enough to free it.
	let (slot, request_inner) = (Rc::downgrade(&callback), request.clone());
	let mut last = None;
	*callback.borrow_mut() = Some(Closure::new(move |now: f64| {
		frame(frame_delta(last, now));
		last = Some(now);
		let Some(slot) = slot.upgrade() else {
			return;
		};
		if let (Some(win), Some(cb)) = (web_sys::window(), slot.borrow().as_ref()) {
			if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
				request_inner.set(id);
			}
		}
	}));

	if let Some(ref cb) = *callback.borrow() {
		request.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()?);
	}
	Some(FrameLoop { callback, request })
}

/// A window event listener, removed again when dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		}
	}
}

/// Resize the canvas with the window, handing the new size to `on_resize`.
pub fn on_window_resize(
	canvas: HtmlCanvasElement,
	mut on_resize: impl FnMut(f64, f64) + 'static,
) -> Option<WindowListener> {
	let window = web_sys::window()?;
	let callback: Closure<dyn FnMut()> = Closure::new(move || {
		if let Some((w, h)) = fit_canvas(&canvas, true) {
			on_resize(w, h);
		}
	});
	window
		.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
		.ok()?;
	Some(WindowListener {
		event: "resize",
		callback,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_frame_does_not_advance() {
		assert_eq!(frame_delta(None, 16_000.0), 0.0);
	}

	#[test]
	fn delta_follows_timestamps_not_frame_count() {
		assert!((frame_delta(Some(1000.0), 1000.0 + 1000.0 / 30.0) - 1.0 / 30.0).abs() < 1e-12);
		assert!((frame_delta(Some(1000.0), 1000.0 + 1000.0 / 144.0) - 1.0 / 144.0).abs() < 1e-12);
	}

	#[test]
	fn stalls_and_clock_skew_are_clamped() {
		assert_eq!(frame_delta(Some(0.0), 5_000.0), MAX_FRAME_DT);
		assert_eq!(frame_delta(Some(500.0), 400.0), 0.0);
	}
}
