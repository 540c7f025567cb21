//! Transactional email provider client.

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use thiserror::Error;

pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("provider rejected message ({status}): {body}")]
	Rejected { status: u16, body: String },
}

/// A fully rendered message, in the provider's JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
	pub from: String,
	pub to: Vec<String>,
	pub reply_to: String,
	pub subject: String,
	pub html: String,
	pub text: String,
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
	async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<(), ProviderError>;
}

/// Resend HTTP API.
#[derive(Clone, Debug)]
pub struct ResendProvider {
	client: reqwest::Client,
	url: String,
}

impl ResendProvider {
	pub fn new(client: reqwest::Client) -> Self {
		Self {
			client,
			url: RESEND_API_URL.to_string(),
		}
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}
}

impl Default for ResendProvider {
	fn default() -> Self {
		Self::new(reqwest::Client::new())
	}
}

#[async_trait]
impl EmailProvider for ResendProvider {
	async fn send(&self, api_key: &str, email: &OutgoingEmail) -> Result<(), ProviderError> {
		let response = self
			.client
			.post(&self.url)
			.bearer_auth(api_key)
			.json(email)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(ProviderError::Rejected {
				status: status.as_u16(),
				body,
			});
		}
		debug!("resend: accepted message for {:?}", email.to);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};

	use axum::extract::State;
	use axum::http::{HeaderMap, StatusCode, header};
	use axum::routing::post;
	use axum::{Json, Router};
	use pretty_assertions::assert_eq;
	use serde_json::{Value, json};
	use tokio::net::TcpListener;

	use super::*;

	#[derive(Clone)]
	struct Stub {
		reply: StatusCode,
		seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
	}

	async fn accept(
		State(stub): State<Stub>,
		headers: HeaderMap,
		Json(body): Json<Value>,
	) -> (StatusCode, &'static str) {
		let auth = headers
			.get(header::AUTHORIZATION)
			.and_then(|v| v.to_str().ok())
			.map(str::to_string);
		stub.seen.lock().unwrap().push((auth, body));
		(stub.reply, "stub reply")
	}

	/// Serves a fake provider endpoint on a free local port.
	async fn spawn_stub(reply: StatusCode) -> (String, Stub) {
		let stub = Stub {
			reply,
			seen: Arc::default(),
		};
		let app = Router::new()
			.route("/emails", post(accept))
			.with_state(stub.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});
		(format!("http://{addr}/emails"), stub)
	}

	fn email() -> OutgoingEmail {
		OutgoingEmail {
			from: "Site <noreply@site.dev>".into(),
			to: vec!["owner@site.dev".into()],
			reply_to: "ada@example.com".into(),
			subject: "Portfolio Contact: Hello".into(),
			html: "<p>hi</p>".into(),
			text: "hi".into(),
		}
	}

	#[tokio::test]
	async fn posts_json_with_bearer_key() {
		let (url, stub) = spawn_stub(StatusCode::OK).await;
		let provider = ResendProvider::default().with_url(url);

		provider.send("re_test", &email()).await.unwrap();

		let seen = stub.seen.lock().unwrap();
		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].0.as_deref(), Some("Bearer re_test"));
		assert_eq!(
			seen[0].1,
			json!({
				"from": "Site <noreply@site.dev>",
				"to": ["owner@site.dev"],
				"reply_to": "ada@example.com",
				"subject": "Portfolio Contact: Hello",
				"html": "<p>hi</p>",
				"text": "hi",
			})
		);
	}

	#[tokio::test]
	async fn non_success_status_is_rejected() {
		let (url, _) = spawn_stub(StatusCode::UNPROCESSABLE_ENTITY).await;
		let provider = ResendProvider::default().with_url(url);

		let err = provider.send("re_test", &email()).await.unwrap_err();
		match err {
			ProviderError::Rejected { status, body } => {
				assert_eq!(status, 422);
				assert_eq!(body, "stub reply");
			}
			other => panic!("expected rejection, got {other:?}"),
		}
	}
}
