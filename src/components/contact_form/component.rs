//! Leptos component for the contact form.
//!
//! Inputs write straight into a [`ContactFormState`] signal. Submitting flips
//! the state synchronously inside the submit handler, then hands the snapshot
//! to the pipeline on a local task.

use std::rc::Rc;

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::analytics::GtagAnalytics;
use super::pipeline::{ContactPipeline, DEFAULT_RELAY_ENDPOINT};
use super::rate_limit::{BrowserClock, RateLimitConfig, RateLimiter};
use super::state::ContactFormState;
use super::transport::FetchTransport;
use super::types::{ContactField, SubmissionStatus};

/// Options for the optional service selector, as `(value, label)`.
const SERVICES: &[(&str, &str)] = &[
	("web-development", "Web Development"),
	("mobile-app", "Mobile App"),
	("consulting", "Consulting"),
	("other", "Other"),
];

/// Contact form posting to a form relay.
///
/// `endpoint` defaults to [`DEFAULT_RELAY_ENDPOINT`]; `form_id` keys the
/// per-form rate limiter.
#[component]
pub fn ContactForm(
	#[prop(into, optional)] endpoint: Option<String>,
	#[prop(into, default = "contact".to_string())] form_id: String,
) -> impl IntoView {
	let state = RwSignal::new(ContactFormState::default());
	let endpoint = endpoint.unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string());
	let limiter = RateLimiter::new(RateLimitConfig::default(), Box::new(BrowserClock));
	let pipeline = StoredValue::new_local(Rc::new(
		ContactPipeline::new(endpoint, FetchTransport, GtagAnalytics)
			.with_rate_limiter(form_id, limiter),
	));

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(fields) = state.try_update(ContactFormState::begin_submit).flatten() else {
			return;
		};
		let pipeline = pipeline.get_value();
		spawn_local(async move {
			let outcome = pipeline.submit(&fields).await;
			state.update(|s| s.finish(outcome));
		});
	};

	let value_of =
		move |field: ContactField| move || state.with(|s| s.fields.get(field).to_string());
	let on_edit = move |field: ContactField| {
		move |ev: Event| state.update(|s| s.update_field(field, event_target_value(&ev)))
	};
	let submitting = move || state.with(ContactFormState::is_submitting);

	view! {
		<form class="contact-form" on:submit=on_submit>
			<div class="form-row">
				<label for="contact-name">"Name"</label>
				<input
					id="contact-name"
					type="text"
					name="name"
					required=true
					prop:value=value_of(ContactField::Name)
					on:input=on_edit(ContactField::Name)
				/>
			</div>
			<div class="form-row">
				<label for="contact-email">"Email"</label>
				<input
					id="contact-email"
					type="email"
					name="email"
					required=true
					prop:value=value_of(ContactField::Email)
					on:input=on_edit(ContactField::Email)
				/>
			</div>
			<div class="form-row">
				<label for="contact-subject">"Subject"</label>
				<input
					id="contact-subject"
					type="text"
					name="subject"
					required=true
					prop:value=value_of(ContactField::Subject)
					on:input=on_edit(ContactField::Subject)
				/>
			</div>
			<div class="form-row">
				<label for="contact-service">"Service"</label>
				<select
					id="contact-service"
					name="service"
					prop:value=value_of(ContactField::Service)
					on:change=on_edit(ContactField::Service)
				>
					<option value="">"Select a service (optional)"</option>
					{SERVICES
						.iter()
						.map(|&(value, label)| view! { <option value=value>{label}</option> })
						.collect_view()}
				</select>
			</div>
			<div class="form-row">
				<label for="contact-message">"Message"</label>
				<textarea
					id="contact-message"
					name="message"
					rows="6"
					required=true
					prop:value=value_of(ContactField::Message)
					on:input=on_edit(ContactField::Message)
				/>
			</div>
			<button type="submit" class="submit-button" disabled=submitting>
				{move || if submitting() { "Sending..." } else { "Send Message" }}
			</button>
			<StatusBanner state=state />
		</form>
	}
}

/// Result banner. The error variant's "Try Again" is a submit button, so a
/// retry goes through the same validation and submit path.
#[component]
fn StatusBanner(state: RwSignal<ContactFormState>) -> impl IntoView {
	move || {
		state.with(|s| match s.status {
			SubmissionStatus::Success => Some(
				view! {
					<div class="form-status success" role="status">
						<p>{s.status_message.clone()}</p>
						<button type="button" on:click=move |_| state.update(ContactFormState::dismiss)>
							"Send another message"
						</button>
					</div>
				}
				.into_any(),
			),
			SubmissionStatus::Error => Some(
				view! {
					<div class="form-status error" role="alert">
						<p>{s.status_message.clone()}</p>
						<button type="submit">"Try Again"</button>
					</div>
				}
				.into_any(),
			),
			SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
		})
	}
}
