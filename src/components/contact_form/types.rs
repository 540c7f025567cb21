//! Contact form data and submission result types.

use serde::Serialize;

/// User-facing copy for each submission outcome.
pub const MSG_SUCCESS: &str =
	"Thank you! Your message has been sent successfully. I'll get back to you soon.";
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please try again later.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

/// The five form fields, serialized as the relay's JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
	/// Empty when no service was picked.
	pub service: String,
}

/// Names a single form field, for edit events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
	Name,
	Email,
	Subject,
	Message,
	Service,
}

impl ContactFields {
	pub fn get(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name,
			ContactField::Email => &self.email,
			ContactField::Subject => &self.subject,
			ContactField::Message => &self.message,
			ContactField::Service => &self.service,
		}
	}

	pub fn set(&mut self, field: ContactField, value: String) {
		let slot = match field {
			ContactField::Name => &mut self.name,
			ContactField::Email => &mut self.email,
			ContactField::Subject => &mut self.subject,
			ContactField::Message => &mut self.message,
			ContactField::Service => &mut self.service,
		};
		*slot = value;
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Where a form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Error,
}

/// Result of one submit attempt. Always produced, never an `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
	pub success: bool,
	pub message: String,
}

impl SubmitOutcome {
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			success: true,
			message: message.into(),
		}
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_all_five_keys_with_empty_service() {
		let fields = ContactFields {
			name: "Ada".into(),
			email: "ada@example.com".into(),
			subject: "Hi".into(),
			message: "Hello".into(),
			service: String::new(),
		};
		let json = serde_json::to_value(&fields).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"name": "Ada",
				"email": "ada@example.com",
				"subject": "Hi",
				"message": "Hello",
				"service": "",
			})
		);
	}

	#[test]
	fn set_and_get_address_the_same_field() {
		let mut fields = ContactFields::default();
		fields.set(ContactField::Subject, "Quote".into());
		assert_eq!(fields.get(ContactField::Subject), "Quote");
		assert_eq!(fields.get(ContactField::Name), "");
	}
}
