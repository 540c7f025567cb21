//! `requestAnimationFrame` driver for the particle field.
//!
//! A [`FrameLoop`] owns everything it registers with the browser: the pending
//! frame handle, the resize listener and the self-rescheduling frame closure.
//! Cancelling (explicitly or on drop) releases all three, and each frame
//! checks the cancel flag before doing any work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render::{self, fit_surface};
use super::theme::FieldStyle;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Current viewport size in CSS pixels.
fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// A running particle animation bound to one canvas.
pub struct FrameLoop {
	cancelled: Rc<Cell<bool>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: FrameCallback,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl FrameLoop {
	/// Sizes the canvas to the viewport, seeds the field and schedules the
	/// first frame.
	///
	/// Returns `None` without registering anything if there is no window or
	/// the canvas has no 2D context.
	pub fn start(mut canvas: HtmlCanvasElement, style: FieldStyle) -> Option<Self> {
		let window = web_sys::window()?;
		let (w, h) = viewport_size(&window)?;

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(obj)) => obj.dyn_into().ok()?,
			_ => {
				warn!("particle field: 2d context unavailable, background disabled");
				return None;
			}
		};

		let mut field = ParticleField::new(style, w, h, &mut Rng::new());
		fit_surface(&mut canvas, &mut field, w, h);
		let field = Rc::new(RefCell::new(field));

		let cancelled = Rc::new(Cell::new(false));
		let frame_id = Rc::new(Cell::new(None));
		let animate: FrameCallback = Rc::new(RefCell::new(None));

		let (field_resize, mut canvas_resize) = (field.clone(), canvas);
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			debug!("particle field: resized to {nw}x{nh}");
			fit_surface(&mut canvas_resize, &mut field_resize.borrow_mut(), nw, nh);
		});
		if window
			.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
			.is_err()
		{
			warn!("particle field: could not register resize listener");
		}

		let (cancelled_anim, frame_anim, animate_inner) =
			(cancelled.clone(), frame_id.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if cancelled_anim.get() {
				return;
			}
			{
				let mut f = field.borrow_mut();
				f.step();
				render::draw_frame(&*f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				frame_anim.set(request_frame(cb));
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(request_frame(cb));
		}

		info!("particle field: started at {w}x{h}");
		Some(Self {
			cancelled,
			frame_id,
			animate,
			resize_cb: Some(resize_cb),
		})
	}

	/// Stops the animation and unregisters from the window. Idempotent.
	pub fn cancel(&mut self) {
		if self.cancelled.replace(true) {
			return;
		}
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(cb) = self.resize_cb.take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
		info!("particle field: stopped");
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}
