//! Standalone `/api/send-email` server.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
	use log::{error, warn};
	use portfolio_site::server::{self, AppState, EmailConfig, ResendProvider};

	env_logger::init();

	let config = EmailConfig::from_env();
	if config.api_key.is_none() {
		warn!("send-email: RESEND_API_KEY unset, every submission will get a 500");
	}

	let addr = match server::bind_addr_from_env() {
		Ok(addr) => addr,
		Err(e) => {
			error!("send-email: {e}");
			std::process::exit(2);
		}
	};

	if let Err(e) = server::serve(addr, AppState::new(config, ResendProvider::default())).await {
		error!("send-email: {e}");
		std::process::exit(1);
	}
}

#[cfg(target_arch = "wasm32")]
fn main() {}
