//! `/api/send-email` request handling.
//!
//! Checks run in a fixed order: method, body shape, required fields, email
//! format, provider configuration, delivery. The first failing check decides
//! the response.

use std::sync::{Arc, LazyLock};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::config::EmailConfig;
use super::provider::{EmailProvider, OutgoingEmail};

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_NOT_CONFIGURED: &str = "Email service not configured";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again later.";
pub const MSG_SENT: &str = "Email sent successfully";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
	EMAIL_PATTERN.is_match(email)
}

/// Incoming JSON. Every key is optional here so that a missing key is
/// reported as a missing field.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SendEmailRequest {
	pub name: Option<String>,
	pub email: Option<String>,
	pub subject: Option<String>,
	pub message: Option<String>,
	pub service: Option<String>,
}

/// JSON body of every response. `success` is omitted on 405.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub success: Option<bool>,
	pub message: String,
}

impl SendEmailResponse {
	fn ok(message: &str) -> Self {
		Self {
			success: Some(true),
			message: message.to_string(),
		}
	}

	fn fail(message: &str) -> Self {
		Self {
			success: Some(false),
			message: message.to_string(),
		}
	}
}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
	pub service: Option<String>,
}

impl SendEmailRequest {
	fn required(value: &Option<String>) -> Option<String> {
		value
			.as_deref()
			.map(str::trim)
			.filter(|v| !v.is_empty())
			.map(str::to_string)
	}

	/// Checks presence and email format. Presence ignores surrounding
	/// whitespace; the format check runs on the email exactly as sent.
	pub fn validate(&self) -> Result<Submission, &'static str> {
		let (Some(name), Some(email), Some(subject), Some(message)) = (
			Self::required(&self.name),
			Self::required(&self.email),
			Self::required(&self.subject),
			Self::required(&self.message),
		) else {
			return Err(MSG_MISSING_FIELDS);
		};
		if !self.email.as_deref().is_some_and(is_valid_email) {
			return Err(MSG_INVALID_EMAIL);
		}
		Ok(Submission {
			name,
			email,
			subject,
			message,
			service: Self::required(&self.service),
		})
	}
}

fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

impl Submission {
	/// Renders the notification sent to the site owner.
	pub fn to_email(&self, config: &EmailConfig) -> OutgoingEmail {
		let service = self.service.as_deref().unwrap_or("Not specified");

		let html = format!(
			"<h2>New contact form submission</h2>\
			 <p><strong>Name:</strong> {}</p>\
			 <p><strong>Email:</strong> {}</p>\
			 <p><strong>Subject:</strong> {}</p>\
			 <p><strong>Service:</strong> {}</p>\
			 <p><strong>Message:</strong></p>\
			 <p>{}</p>",
			escape_html(&self.name),
			escape_html(&self.email),
			escape_html(&self.subject),
			escape_html(service),
			escape_html(&self.message).replace('\n', "<br>"),
		);
		let text = format!(
			"New contact form submission\n\nName: {}\nEmail: {}\nSubject: {}\nService: {}\n\nMessage:\n{}\n",
			self.name, self.email, self.subject, service, self.message,
		);

		OutgoingEmail {
			from: config.from_address.clone(),
			to: vec![config.to_address.clone()],
			reply_to: self.email.clone(),
			subject: format!("Portfolio Contact: {}", self.subject),
			html,
			text,
		}
	}
}

/// Validates a raw request and relays it through `provider`.
pub async fn handle_send_email(
	method: &Method,
	body: &[u8],
	config: &EmailConfig,
	provider: &dyn EmailProvider,
) -> (StatusCode, SendEmailResponse) {
	if method != Method::POST {
		return (
			StatusCode::METHOD_NOT_ALLOWED,
			SendEmailResponse {
				success: None,
				message: MSG_METHOD_NOT_ALLOWED.to_string(),
			},
		);
	}

	let request: SendEmailRequest = match serde_json::from_slice(body) {
		Ok(request) => request,
		Err(e) => {
			warn!("send-email: unreadable body: {e}");
			return (StatusCode::BAD_REQUEST, SendEmailResponse::fail(MSG_INVALID_BODY));
		}
	};

	let submission = match request.validate() {
		Ok(submission) => submission,
		Err(message) => return (StatusCode::BAD_REQUEST, SendEmailResponse::fail(message)),
	};

	let Some(api_key) = config.api_key.as_deref() else {
		warn!("send-email: provider API key is not configured");
		return (
			StatusCode::INTERNAL_SERVER_ERROR,
			SendEmailResponse::fail(MSG_NOT_CONFIGURED),
		);
	};

	match provider.send(api_key, &submission.to_email(config)).await {
		Ok(()) => {
			info!("send-email: delivered message from {}", submission.email);
			(StatusCode::OK, SendEmailResponse::ok(MSG_SENT))
		}
		Err(e) => {
			warn!("send-email: provider error: {e}");
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				SendEmailResponse::fail(MSG_SEND_FAILED),
			)
		}
	}
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
	pub config: Arc<EmailConfig>,
	pub provider: Arc<dyn EmailProvider>,
}

async fn send_email(State(state): State<AppState>, method: Method, body: Bytes) -> impl IntoResponse {
	let (status, response) =
		handle_send_email(&method, &body, &state.config, state.provider.as_ref()).await;
	(status, Json(response))
}

/// Routes `/api/send-email` for every method; non-POST gets a JSON 405.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route(SEND_EMAIL_PATH, any(send_email))
		.with_state(state)
}
