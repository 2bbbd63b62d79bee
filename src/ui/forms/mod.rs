//! Form rendering module
//!
//! - `field_renderer`: bordered inputs with floating labels
//! - `validation_message`: the inline error line under a field
//! - `contact_form`: the contact form card

mod contact_form;
mod field_renderer;
mod validation_message;

pub use contact_form::draw_contact_form;
