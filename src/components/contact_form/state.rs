//! Form state machine.
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──finish(ok)──▶ Success
//!   ▲                        │                        │
//!   │                        └──finish(err)──▶ Error  │
//!   └──── update_field / dismiss ◀────────────────────┘
//! ```
//!
//! `begin_submit` is the only way into Submitting and refuses while a request
//! is outstanding, so a form never has two requests in flight.

use log::debug;

use super::types::{ContactField, ContactFields, SubmissionStatus, SubmitOutcome};

/// Field values plus the status banner of one form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
	pub fields: ContactFields,
	pub status: SubmissionStatus,
	pub status_message: String,
}

impl ContactFormState {
	pub fn is_submitting(&self) -> bool {
		self.status == SubmissionStatus::Submitting
	}

	/// The banner text, if a result is being shown.
	pub fn status_message(&self) -> Option<&str> {
		match self.status {
			SubmissionStatus::Success | SubmissionStatus::Error => Some(&self.status_message),
			_ => None,
		}
	}

	/// Applies a keystroke. A shown result is cleared back to Idle.
	pub fn update_field(&mut self, field: ContactField, value: String) {
		self.fields.set(field, value);
		if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
			self.reset_status();
		}
	}

	/// Enters Submitting and returns the snapshot to send, or `None` if a
	/// submission is already in flight.
	pub fn begin_submit(&mut self) -> Option<ContactFields> {
		if self.is_submitting() {
			debug!("contact form: submit ignored, request already in flight");
			return None;
		}
		self.status = SubmissionStatus::Submitting;
		self.status_message.clear();
		Some(self.fields.clone())
	}

	/// Records the result of the in-flight submission. Success clears every
	/// field; an error leaves them for the user to retry.
	pub fn finish(&mut self, outcome: SubmitOutcome) {
		if !self.is_submitting() {
			debug!("contact form: stale outcome dropped");
			return;
		}
		if outcome.success {
			self.status = SubmissionStatus::Success;
			self.fields.clear();
		} else {
			self.status = SubmissionStatus::Error;
		}
		self.status_message = outcome.message;
	}

	/// "Try Again": hide the banner, keep the fields.
	pub fn dismiss(&mut self) {
		if !self.is_submitting() {
			self.reset_status();
		}
	}

	fn reset_status(&mut self) {
		self.status = SubmissionStatus::Idle;
		self.status_message.clear();
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::super::pipeline::classify_status;
	use super::super::types::MSG_GENERIC_FAILURE;
	use super::*;

	fn filled() -> ContactFormState {
		let mut state = ContactFormState::default();
		state.update_field(ContactField::Name, "Grace".into());
		state.update_field(ContactField::Email, "grace@example.com".into());
		state.update_field(ContactField::Subject, "COBOL".into());
		state.update_field(ContactField::Message, "Found a bug".into());
		state
	}

	#[test]
	fn starts_idle_without_message() {
		let state = ContactFormState::default();
		assert_eq!(state.status, SubmissionStatus::Idle);
		assert_eq!(state.status_message(), None);
	}

	#[test]
	fn success_clears_all_fields() {
		let mut state = filled();
		state.update_field(ContactField::Service, "web".into());

		let snapshot = state.begin_submit().unwrap();
		assert_eq!(snapshot.name, "Grace");
		assert!(state.is_submitting());

		state.finish(classify_status(200));
		assert_eq!(state.status, SubmissionStatus::Success);
		assert!(state.status_message().unwrap().contains("sent successfully"));
		assert_eq!(state.fields, ContactFields::default());
	}

	#[test]
	fn error_keeps_fields() {
		let mut state = filled();
		let before = state.fields.clone();

		state.begin_submit().unwrap();
		state.finish(classify_status(400));

		assert_eq!(state.status, SubmissionStatus::Error);
		assert_eq!(
			state.status_message(),
			Some("Failed to send message (400). Please try again.")
		);
		assert_eq!(state.fields, before);
	}

	#[test]
	fn second_submit_is_refused_while_in_flight() {
		let mut state = filled();
		assert!(state.begin_submit().is_some());
		assert!(state.begin_submit().is_none());
	}

	#[test]
	fn retry_after_error_goes_straight_to_submitting() {
		let mut state = filled();
		state.begin_submit().unwrap();
		state.finish(SubmitOutcome::failure(MSG_GENERIC_FAILURE));

		assert!(state.begin_submit().is_some());
		assert_eq!(state.status, SubmissionStatus::Submitting);
		assert_eq!(state.status_message(), None);
	}

	#[test]
	fn editing_clears_shown_result() {
		let mut state = filled();
		state.begin_submit().unwrap();
		state.finish(classify_status(429));

		state.update_field(ContactField::Message, "Found a moth".into());
		assert_eq!(state.status, SubmissionStatus::Idle);
		assert_eq!(state.status_message(), None);
		assert_eq!(state.fields.message, "Found a moth");
	}

	#[test]
	fn editing_while_submitting_keeps_status() {
		let mut state = filled();
		state.begin_submit().unwrap();
		state.update_field(ContactField::Subject, "Update".into());
		assert!(state.is_submitting());
	}

	#[test]
	fn dismiss_returns_to_idle_with_fields() {
		let mut state = filled();
		state.begin_submit().unwrap();
		state.finish(classify_status(500));
		state.dismiss();

		assert_eq!(state.status, SubmissionStatus::Idle);
		assert_eq!(state.fields.name, "Grace");
	}

	#[test]
	fn outcome_without_submit_is_ignored() {
		let mut state = filled();
		state.finish(classify_status(200));
		assert_eq!(state.status, SubmissionStatus::Idle);
		assert_eq!(state.fields.name, "Grace");
	}
}
