//! Leptos component wrapping the particle field canvas.
//!
//! The canvas is fixed to the viewport behind the page and ignores pointer
//! events. The animation starts once the canvas is mounted and is torn down
//! with the owning scope.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::frame_loop::FrameLoop;
use super::theme::FieldStyle;

/// Full-viewport decorative particle background.
#[component]
pub fn ParticleBackground(#[prop(optional)] style: Option<FieldStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<FrameLoop>);
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		// Replacing a previous loop drops and cancels it.
		running.set_value(FrameLoop::start(canvas, style.clone()));
	});

	on_cleanup(move || {
		let _ = running.try_update_value(|slot| {
			if let Some(mut frame_loop) = slot.take() {
				frame_loop.cancel();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
