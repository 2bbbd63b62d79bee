//! Form domain layer
//!
//! Field values, validation rules and the contact form controller.

mod field;
mod form_state;
mod validation;

pub use field::{FieldId, FieldValue};
pub use form_state::{ContactForm, Form, FormPhase, SubmitError, SUBMIT_ROW};
pub use validation::{ValidationError, MESSAGE_MIN_CHARS};
