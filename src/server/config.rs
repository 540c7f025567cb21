//! Email endpoint configuration from the environment.

/// Where submissions are delivered when `CONTACT_EMAIL` is unset.
pub const DEFAULT_TO_ADDRESS: &str = "hello@example.com";
/// Sender used when `FROM_EMAIL` is unset.
pub const DEFAULT_FROM_ADDRESS: &str = "Portfolio Contact <onboarding@resend.dev>";

pub const ENV_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_TO_ADDRESS: &str = "CONTACT_EMAIL";
pub const ENV_FROM_ADDRESS: &str = "FROM_EMAIL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
	/// Provider API key. `None` means the endpoint answers 500.
	pub api_key: Option<String>,
	pub to_address: String,
	pub from_address: String,
}

impl EmailConfig {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the config from any key lookup. Empty values count as unset.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
		Self {
			api_key: get(ENV_API_KEY),
			to_address: get(ENV_TO_ADDRESS).unwrap_or_else(|| DEFAULT_TO_ADDRESS.to_string()),
			from_address: get(ENV_FROM_ADDRESS).unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
		}
	}
}
