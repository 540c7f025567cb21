//! Server-side `/api/send-email` endpoint.
//!
//! An alternate delivery path to the form relay: validates the submission
//! itself (required fields and email format) and hands it to a transactional
//! email provider. Single request/response, no client state.

use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use thiserror::Error;

pub mod config;
pub mod handler;
pub mod provider;

pub use config::EmailConfig;
pub use handler::{
	AppState, SEND_EMAIL_PATH, SendEmailRequest, SendEmailResponse, handle_send_email, router,
};
pub use provider::{EmailProvider, OutgoingEmail, ProviderError, ResendProvider};

/// Address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Error)]
pub enum ServeError {
	#[error("invalid bind address {0:?}")]
	BindAddr(String),

	#[error("server I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Parses `BIND_ADDR`, falling back to [`DEFAULT_BIND_ADDR`].
pub fn bind_addr_from_env() -> Result<SocketAddr, ServeError> {
	let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
	raw.parse().map_err(|_| ServeError::BindAddr(raw))
}

impl AppState {
	pub fn new(config: EmailConfig, provider: impl EmailProvider + 'static) -> Self {
		Self {
			config: Arc::new(config),
			provider: Arc::new(provider),
		}
	}
}

/// Serves the router until the listener fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), ServeError> {
	let listener = tokio::net::TcpListener::bind(addr).await?;
	info!(
		"send-email: listening on http://{}{}",
		listener.local_addr()?,
		SEND_EMAIL_PATH
	);
	axum::serve(listener, router(state)).await?;
	Ok(())
}
