//! Visual configuration for the particle field.
//!
//! Provides the RGBA color type and the fixed palette, accent and
//! size/speed ranges the field is built from.

use std::ops::RangeInclusive;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles allocated on attach
	pub count: usize,
	/// Colors particles are drawn from, uniformly
	pub palette: [Color; 4],
	/// Connection line color
	pub accent: Color,
	/// Maximum per-axis speed in pixels per frame
	pub max_speed: f64,
	/// Particle radius bounds
	pub radius_range: RangeInclusive<f64>,
	/// Particle opacity bounds
	pub opacity_range: RangeInclusive<f64>,
	/// Pairs closer than this (in canvas pixels) get a connecting line
	pub link_distance: f64,
	/// Line alpha at zero distance
	pub link_alpha: f64,
	/// Line width in canvas pixels
	pub link_width: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 80,
			palette: [
				Color::rgb(59, 130, 246), // Blue
				Color::rgb(139, 92, 246), // Violet
				Color::rgb(6, 182, 212),  // Cyan
				Color::rgb(16, 185, 129), // Emerald
			],
			accent: Color::rgb(99, 102, 241),
			max_speed: 0.25,
			radius_range: 1.0..=3.0,
			opacity_range: 0.2..=0.7,
			link_distance: 150.0,
			link_alpha: 0.2,
			link_width: 1.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let c = Color::rgb(99, 102, 241).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(99, 102, 241, 0.25)");
	}
}
