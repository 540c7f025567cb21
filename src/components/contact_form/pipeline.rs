//! Contact submission: send, classify, report.
//!
//! [`ContactPipeline::submit`] never fails. Rate limiting, HTTP errors and
//! transport errors all come back as a [`SubmitOutcome`] carrying the copy to
//! show the user.

use log::{info, warn};

use super::analytics::{AnalyticsSink, EVENT_ERROR, EVENT_SUBMIT, EVENT_SUCCESS};
use super::rate_limit::RateLimiter;
use super::transport::RelayTransport;
use super::types::{
	ContactFields, MSG_GENERIC_FAILURE, MSG_RATE_LIMITED, MSG_SUCCESS, SubmitOutcome,
};

/// Default form relay endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";

/// Maps a relay HTTP status to the outcome shown to the user.
pub fn classify_status(status: u16) -> SubmitOutcome {
	match status {
		200..=299 => SubmitOutcome::success(MSG_SUCCESS),
		429 => SubmitOutcome::failure(MSG_RATE_LIMITED),
		n => SubmitOutcome::failure(format!("Failed to send message ({n}). Please try again.")),
	}
}

/// Sends contact submissions to a relay endpoint.
pub struct ContactPipeline<T, A> {
	endpoint: String,
	transport: T,
	analytics: A,
	limiter: Option<(String, RateLimiter)>,
}

impl<T: RelayTransport, A: AnalyticsSink> ContactPipeline<T, A> {
	pub fn new(endpoint: impl Into<String>, transport: T, analytics: A) -> Self {
		Self {
			endpoint: endpoint.into(),
			transport,
			analytics,
			limiter: None,
		}
	}

	/// Throttles submits from `form_id` through `limiter`.
	pub fn with_rate_limiter(mut self, form_id: impl Into<String>, limiter: RateLimiter) -> Self {
		self.limiter = Some((form_id.into(), limiter));
		self
	}

	pub async fn submit(&self, fields: &ContactFields) -> SubmitOutcome {
		if let Some((form_id, limiter)) = &self.limiter {
			if !limiter.check_and_record(form_id) {
				warn!("contact form {form_id}: submit rejected by rate limiter");
				self.analytics
					.emit(EVENT_ERROR, &[("form_id", form_id.as_str()), ("status", "rate_limited")]);
				return SubmitOutcome::failure(MSG_RATE_LIMITED);
			}
		}

		self.analytics
			.emit(EVENT_SUBMIT, &[("service", fields.service.as_str())]);

		let body = match serde_json::to_string(fields) {
			Ok(body) => body,
			Err(e) => {
				warn!("contact form: could not encode submission: {e}");
				self.analytics.emit(EVENT_ERROR, &[("status", "encode")]);
				return SubmitOutcome::failure(MSG_GENERIC_FAILURE);
			}
		};

		let (outcome, status) = match self.transport.post_json(&self.endpoint, body).await {
			Ok(status) => (classify_status(status), status.to_string()),
			Err(e) => {
				warn!("contact form: relay request failed: {e}");
				(SubmitOutcome::failure(MSG_GENERIC_FAILURE), "network".to_string())
			}
		};

		if outcome.success {
			info!("contact form: delivered ({status})");
			self.analytics.emit(EVENT_SUCCESS, &[("status", status.as_str())]);
		} else {
			warn!("contact form: not delivered ({status})");
			self.analytics.emit(EVENT_ERROR, &[("status", status.as_str())]);
		}
		outcome
	}
}
