//! Ambient particle simulation.
//!
//! Particles drift at a constant velocity and wrap around the surface edges.
//! Nearby pairs are linked by a line whose alpha fades with distance.

use fastrand::Rng;

use super::theme::{Color, FieldStyle};

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
}

/// A proximity link between two particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub alpha: f64,
}

/// Owns the particle set and the bounds they wrap within.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub style: FieldStyle,
	width: f64,
	height: f64,
}

fn uniform(rng: &mut Rng, range: &std::ops::RangeInclusive<f64>) -> f64 {
	range.start() + rng.f64() * (range.end() - range.start())
}

/// Wraps `v` into `[0, size)`. Values left far outside by a shrink land back
/// inside on the next step.
fn wrap(v: f64, size: f64) -> f64 {
	if size <= 0.0 {
		return 0.0;
	}
	let w = v.rem_euclid(size);
	// rem_euclid can round tiny negatives up to `size`
	if w >= size { 0.0 } else { w }
}

impl ParticleField {
	pub fn new(style: FieldStyle, width: f64, height: f64, rng: &mut Rng) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				vx: (rng.f64() * 2.0 - 1.0) * style.max_speed,
				vy: (rng.f64() * 2.0 - 1.0) * style.max_speed,
				radius: uniform(rng, &style.radius_range),
				opacity: uniform(rng, &style.opacity_range),
				color: style.palette[rng.usize(..style.palette.len())],
			})
			.collect();

		Self {
			particles,
			style,
			width,
			height,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle one frame.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x = wrap(p.x + p.vx, self.width);
			p.y = wrap(p.y + p.vy, self.height);
		}
	}

	/// Change the bounds. Particle positions are left as they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// All unordered pairs closer than the link distance.
	///
	/// Line and alpha are symmetric in the endpoints, so each pair is
	/// visited once.
	pub fn connections(&self) -> Vec<Connection> {
		let max = self.style.link_distance;
		let mut links = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist < max {
					links.push(Connection {
						from: i,
						to: j,
						alpha: (max - dist) / max * self.style.link_alpha,
					});
				}
			}
		}

		links
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(count: usize, w: f64, h: f64) -> ParticleField {
		let style = FieldStyle {
			count,
			..FieldStyle::default()
		};
		ParticleField::new(style, w, h, &mut Rng::with_seed(7))
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			opacity: 0.5,
			color: Color::rgb(0, 0, 0),
		}
	}

	#[test]
	fn new_particles_respect_style_ranges() {
		let f = field(80, 1024.0, 768.0);
		let style = FieldStyle::default();
		assert_eq!(f.particles.len(), 80);
		for p in &f.particles {
			assert!((0.0..1024.0).contains(&p.x));
			assert!((0.0..768.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!(style.radius_range.contains(&p.radius));
			assert!(style.opacity_range.contains(&p.opacity));
			assert!(style.palette.contains(&p.color));
		}
	}

	#[test]
	fn positions_stay_in_bounds_over_many_frames() {
		let mut f = field(80, 320.0, 200.0);
		for _ in 0..5_000 {
			f.step();
			for p in &f.particles {
				assert!(p.x >= 0.0 && p.x < 320.0, "x out of bounds: {}", p.x);
				assert!(p.y >= 0.0 && p.y < 200.0, "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn wraps_to_opposite_edge() {
		let mut f = field(0, 100.0, 100.0);
		f.particles = vec![particle(0.1, 99.9, -0.2, 0.2)];
		f.step();
		let p = &f.particles[0];
		assert!((p.x - 99.9).abs() < 1e-9);
		assert!((p.y - 0.1).abs() < 1e-9);
	}

	#[test]
	fn resize_keeps_positions_and_next_step_corrects_them() {
		let mut f = field(0, 1024.0, 768.0);
		f.particles = vec![particle(900.0, 700.0, 0.0, 0.0)];

		f.resize(800.0, 600.0);
		assert_eq!((f.width(), f.height()), (800.0, 600.0));
		assert_eq!(f.particles[0].x, 900.0);

		f.step();
		let p = &f.particles[0];
		assert!(p.x < 800.0 && p.y < 600.0);
	}

	#[test]
	fn connections_fade_with_distance() {
		let mut f = field(0, 1000.0, 1000.0);
		f.particles = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(75.0, 0.0, 0.0, 0.0),
			particle(500.0, 500.0, 0.0, 0.0),
		];

		let links = f.connections();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].from, links[0].to), (0, 1));
		assert!((links[0].alpha - 0.1).abs() < 1e-12);
	}

	#[test]
	fn pairs_at_threshold_are_not_linked() {
		let mut f = field(0, 1000.0, 1000.0);
		f.particles = vec![particle(0.0, 0.0, 0.0, 0.0), particle(150.0, 0.0, 0.0, 0.0)];
		assert!(f.connections().is_empty());
	}
}
