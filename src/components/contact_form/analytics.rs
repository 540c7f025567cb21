//! Fire-and-forget analytics events.

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

pub const EVENT_SUBMIT: &str = "contact_form_submit";
pub const EVENT_SUCCESS: &str = "contact_form_success";
pub const EVENT_ERROR: &str = "contact_form_error";

/// Receives named events with a flat parameter list. Implementations must not
/// fail or block the caller.
pub trait AnalyticsSink {
	fn emit(&self, event: &str, params: &[(&str, &str)]);
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
	fn emit(&self, _event: &str, _params: &[(&str, &str)]) {}
}

/// Forwards events to `window.gtag('event', name, params)` when the tag
/// manager is loaded.
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagAnalytics;

impl AnalyticsSink for GtagAnalytics {
	fn emit(&self, event: &str, params: &[(&str, &str)]) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Ok(gtag) = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) else {
			return;
		};
		let Ok(gtag) = gtag.dyn_into::<js_sys::Function>() else {
			debug!("analytics: gtag not loaded, dropping {event}");
			return;
		};

		let payload = js_sys::Object::new();
		for (key, value) in params {
			let _ = js_sys::Reflect::set(
				&payload,
				&JsValue::from_str(key),
				&JsValue::from_str(value),
			);
		}
		let _ = gtag.call3(
			&JsValue::NULL,
			&JsValue::from_str("event"),
			&JsValue::from_str(event),
			&payload,
		);
	}
}
