//! Canvas rendering for the particle field.
//!
//! Drawing goes through the [`Painter`] trait so a frame can be replayed
//! against a recorder in tests; the browser implementation forwards to
//! `CanvasRenderingContext2d`.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::ParticleField;

/// Minimal 2D drawing surface used by [`draw_frame`].
pub trait Painter {
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, css: &str);
	fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, css: &str, width: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, css: &str) {
		self.set_fill_style_str(css);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, css: &str, width: f64) {
		self.set_stroke_style_str(css);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}
}

/// Something with pixel dimensions that can be resized, e.g. a canvas.
pub trait Surface {
	fn set_size(&mut self, width: u32, height: u32);
	fn size(&self) -> (u32, u32);
}

impl Surface for HtmlCanvasElement {
	fn set_size(&mut self, width: u32, height: u32) {
		self.set_width(width);
		self.set_height(height);
	}

	fn size(&self) -> (u32, u32) {
		(self.width(), self.height())
	}
}

/// Sizes the surface to exactly `width` x `height` and moves the field bounds
/// with it.
pub fn fit_surface<S: Surface + ?Sized>(
	surface: &mut S,
	field: &mut ParticleField,
	width: f64,
	height: f64,
) {
	surface.set_size(width as u32, height as u32);
	field.resize(width, height);
}

/// Draws one frame: clear, particles, then proximity links on top.
pub fn draw_frame<P: Painter + ?Sized>(field: &ParticleField, painter: &P) {
	painter.clear(field.width(), field.height());

	for p in &field.particles {
		painter.fill_circle(p.x, p.y, p.radius, &p.color.with_alpha(p.opacity).to_css());
	}

	let accent = field.style.accent;
	for link in field.connections() {
		let (a, b) = (&field.particles[link.from], &field.particles[link.to]);
		painter.stroke_line(
			a.x,
			a.y,
			b.x,
			b.y,
			&accent.with_alpha(link.alpha).to_css(),
			field.style.link_width,
		);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use fastrand::Rng;
	use pretty_assertions::assert_eq;

	use super::super::particles::Particle;
	use super::super::theme::{Color, FieldStyle};
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Circle(f64, f64, f64, String),
		Line(f64, f64, f64, f64, String),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Painter for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.0.borrow_mut().push(Op::Clear(width, height));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, css: &str) {
			self.0.borrow_mut().push(Op::Circle(x, y, radius, css.to_string()));
		}

		fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, css: &str, _width: f64) {
			self.0.borrow_mut().push(Op::Line(x1, y1, x2, y2, css.to_string()));
		}
	}

	struct FakeCanvas {
		width: u32,
		height: u32,
	}

	impl Surface for FakeCanvas {
		fn set_size(&mut self, width: u32, height: u32) {
			self.width = width;
			self.height = height;
		}

		fn size(&self) -> (u32, u32) {
			(self.width, self.height)
		}
	}

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			opacity: 0.5,
			color: Color::rgb(59, 130, 246),
		}
	}

	#[test]
	fn frame_clears_then_draws_particles_and_links() {
		let style = FieldStyle {
			count: 0,
			..FieldStyle::default()
		};
		let mut field = ParticleField::new(style, 200.0, 100.0, &mut Rng::with_seed(1));
		field.particles = vec![still(10.0, 10.0), still(85.0, 10.0)];

		let recorder = Recorder::default();
		draw_frame(&field, &recorder);

		assert_eq!(
			recorder.0.into_inner(),
			vec![
				Op::Clear(200.0, 100.0),
				Op::Circle(10.0, 10.0, 2.0, "rgba(59, 130, 246, 0.5)".into()),
				Op::Circle(85.0, 10.0, 2.0, "rgba(59, 130, 246, 0.5)".into()),
				Op::Line(10.0, 10.0, 85.0, 10.0, "rgba(99, 102, 241, 0.1)".into()),
			]
		);
	}

	#[test]
	fn every_particle_is_drawn_once() {
		let mut field =
			ParticleField::new(FieldStyle::default(), 1024.0, 768.0, &mut Rng::with_seed(3));
		field.step();

		let recorder = Recorder::default();
		draw_frame(&field, &recorder);
		let ops = recorder.0.into_inner();
		let circles = ops.iter().filter(|op| matches!(op, Op::Circle(..))).count();
		let lines = ops.iter().filter(|op| matches!(op, Op::Line(..))).count();

		assert_eq!(circles, 80);
		assert_eq!(lines, field.connections().len());
	}

	#[test]
	fn resize_sets_surface_to_exact_viewport() {
		let mut canvas = FakeCanvas {
			width: 0,
			height: 0,
		};
		let mut field =
			ParticleField::new(FieldStyle::default(), 1024.0, 768.0, &mut Rng::with_seed(5));

		fit_surface(&mut canvas, &mut field, 1024.0, 768.0);
		assert_eq!(canvas.size(), (1024, 768));

		fit_surface(&mut canvas, &mut field, 800.0, 600.0);
		assert_eq!(canvas.size(), (800, 600));
		assert_eq!((field.width(), field.height()), (800.0, 600.0));
	}
}
