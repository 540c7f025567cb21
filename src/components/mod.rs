//! UI components.

pub mod contact_form;
pub mod icons;
pub mod particle_field;
