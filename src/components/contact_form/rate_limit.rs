//! Sliding-window limiter for form submissions.
//!
//! Each limiter is owned by the pipeline that consults it, so separate form
//! instances (and tests) never see each other's attempts.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Millisecond wall clock.
pub trait Clock {
	fn now_ms(&self) -> f64;
}

/// `Date.now()` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
	fn now_ms(&self) -> f64 {
		js_sys::Date::now()
	}
}

#[derive(Clone, Copy, Debug)]
pub struct RateLimitConfig {
	/// Length of the sliding window.
	pub window_ms: f64,
	/// Attempts allowed per key within one window.
	pub max_attempts: usize,
}

impl Default for RateLimitConfig {
	fn default() -> Self {
		Self {
			window_ms: 60_000.0,
			max_attempts: 5,
		}
	}
}

/// Tracks attempt timestamps per key.
pub struct RateLimiter {
	config: RateLimitConfig,
	clock: Box<dyn Clock>,
	attempts: RefCell<HashMap<String, VecDeque<f64>>>,
}

impl RateLimiter {
	pub fn new(config: RateLimitConfig, clock: Box<dyn Clock>) -> Self {
		Self {
			config,
			clock,
			attempts: RefCell::new(HashMap::new()),
		}
	}

	/// Records an attempt for `key` if it is within budget.
	///
	/// Returns `false`, without recording, once `max_attempts` have been made
	/// inside the current window.
	pub fn check_and_record(&self, key: &str) -> bool {
		let now = self.clock.now_ms();
		let mut attempts = self.attempts.borrow_mut();
		let log = attempts.entry(key.to_string()).or_default();
		Self::expire(log, now, self.config.window_ms);

		if log.len() >= self.config.max_attempts {
			return false;
		}
		log.push_back(now);
		true
	}

	/// Attempts left for `key` in the current window.
	pub fn remaining(&self, key: &str) -> usize {
		let now = self.clock.now_ms();
		let mut attempts = self.attempts.borrow_mut();
		let Some(log) = attempts.get_mut(key) else {
			return self.config.max_attempts;
		};
		Self::expire(log, now, self.config.window_ms);
		self.config.max_attempts.saturating_sub(log.len())
	}

	fn expire(log: &mut VecDeque<f64>, now: f64, window_ms: f64) {
		while log.front().is_some_and(|&t| now - t >= window_ms) {
			log.pop_front();
		}
	}
}
