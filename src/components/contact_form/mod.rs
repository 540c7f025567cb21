//! Contact form and its submission pipeline.
//!
//! - [`ContactFormState`]: field values and the Idle/Submitting/Success/Error
//!   state machine
//! - [`ContactPipeline`]: posts a snapshot to the form relay and turns every
//!   result, including transport failures, into a [`SubmitOutcome`]
//! - [`RateLimiter`]: per-form sliding window, injected into the pipeline
//! - [`ContactForm`]: the Leptos component wiring the above to the DOM

pub mod analytics;
mod component;
pub mod pipeline;
pub mod rate_limit;
pub mod state;
pub mod transport;
mod types;

pub use analytics::{AnalyticsSink, GtagAnalytics, NoopAnalytics};
pub use component::ContactForm;
pub use pipeline::{ContactPipeline, DEFAULT_RELAY_ENDPOINT, classify_status};
pub use rate_limit::{BrowserClock, Clock, RateLimitConfig, RateLimiter};
pub use state::ContactFormState;
pub use transport::{FetchTransport, RelayTransport, TransportError};
pub use types::{
	ContactField, ContactFields, MSG_GENERIC_FAILURE, MSG_RATE_LIMITED, MSG_SUCCESS,
	SubmissionStatus, SubmitOutcome,
};
