//! portfolio-site: ambient particle background and contact form for a
//! personal portfolio.
//!
//! The browser side is a Leptos CSR app: a full-viewport particle field behind
//! the page and a contact form that posts to a form relay. The `server` module
//! (native targets only) provides the alternate `/api/send-email` endpoint.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

// Only the send-email binary initializes it.
#[cfg(not(target_arch = "wasm32"))]
use env_logger as _;

pub use components::contact_form::ContactForm;
pub use components::icons::{Icon, IconView};
pub use components::particle_field::ParticleBackground;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-site: logging initialized");
}

/// A profile link shown in the header.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
	pub label: String,
	pub url: String,
	pub icon: Icon,
}

/// Load profile links from a script element with id="site-links".
/// Expected format: JSON array of `{ label, url, icon }`.
fn load_social_links() -> Option<Vec<SocialLink>> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-links")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Vec<SocialLink>>(&json_text) {
		Ok(links) => {
			info!("portfolio-site: loaded {} links", links.len());
			Some(links)
		}
		Err(e) => {
			warn!("portfolio-site: failed to parse site links: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let links = load_social_links().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground />
		<main class="page">
			<nav class="social-links">
				{links
					.into_iter()
					.map(|link| {
						view! {
							<a href=link.url target="_blank" rel="noopener noreferrer" title=link.label>
								<IconView icon=link.icon />
							</a>
						}
					})
					.collect_view()}
			</nav>
			<section id="contact" class="contact-section">
				<h2>"Get in touch"</h2>
				<ContactForm />
			</section>
		</main>
	}
}
