//! Ambient particle field background.
//!
//! Renders drifting points and their proximity links on a full-viewport
//! canvas:
//! - Constant-velocity motion with edge wraparound
//! - Lines between pairs closer than a fixed distance, fading with distance
//! - Canvas resized with the window, particles left in place
//! - Explicit teardown of the frame loop and resize listener
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::ParticleBackground;
//!
//! view! { <ParticleBackground /> }
//! ```

mod component;
mod frame_loop;
pub mod particles;
pub mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use frame_loop::FrameLoop;
pub use particles::{Connection, Particle, ParticleField};
pub use render::{Painter, Surface};
pub use theme::{Color, FieldStyle};
