//! HTTP transport to the form relay.

use async_trait::async_trait;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Failures below the HTTP layer: no response was received.
#[derive(Debug, Error)]
pub enum TransportError {
	#[error("no browser window available")]
	NoWindow,

	#[error("could not build request: {0}")]
	Request(String),

	#[error("network error: {0}")]
	Network(String),
}

fn js_err(e: JsValue) -> String {
	format!("{e:?}")
}

/// Posts a JSON body and reports the HTTP status of the response.
///
/// Only the status is surfaced; response bodies are never read.
#[async_trait(?Send)]
pub trait RelayTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError>;
}

/// `window.fetch` based transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl RelayTransport for FetchTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError> {
		let headers = Headers::new().map_err(|e| TransportError::Request(js_err(e)))?;
		headers
			.set("Content-Type", "application/json")
			.map_err(|e| TransportError::Request(js_err(e)))?;
		headers
			.set("Accept", "application/json")
			.map_err(|e| TransportError::Request(js_err(e)))?;

		let opts = RequestInit::new();
		opts.set_method("POST");
		opts.set_headers(&headers.into());
		opts.set_mode(RequestMode::Cors);
		opts.set_body(&JsValue::from_str(&body));

		let request = Request::new_with_str_and_init(url, &opts)
			.map_err(|e| TransportError::Request(js_err(e)))?;
		let window = web_sys::window().ok_or(TransportError::NoWindow)?;
		let resp_val = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(|e| TransportError::Network(js_err(e)))?;
		let resp: Response = resp_val
			.dyn_into()
			.map_err(|e| TransportError::Network(js_err(e)))?;

		Ok(resp.status())
	}
}
