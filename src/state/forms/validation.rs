//! Validation rules for the contact form
//!
//! Each field maps to exactly one validator, and each failed rule maps to
//! exactly one user-facing message (the `Display` of [`ValidationError`]).

use super::field::{FieldId, FieldValue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 20;

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s()+-]+$").unwrap());

/// A failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Name must be at least 2 characters")]
    FullNameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
    #[error("Please select a subject")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 20 characters")]
    MessageTooShort,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Validates a single field value
pub type Validator = fn(&FieldValue) -> Option<ValidationError>;

/// Field-to-validator mapping, in focus order
pub const VALIDATORS: [(FieldId, Validator); 6] = [
    (FieldId::FullName, validate_full_name),
    (FieldId::Email, validate_email),
    (FieldId::Phone, validate_phone),
    (FieldId::Subject, validate_subject),
    (FieldId::Message, validate_message),
    (FieldId::Terms, validate_terms),
];

/// Look up the validator registered for a field
pub fn validator_for(field: FieldId) -> Validator {
    VALIDATORS[field.index()].1
}

/// Run the validator registered for `field` against `value`
pub fn validate_field(field: FieldId, value: &FieldValue) -> Option<ValidationError> {
    validator_for(field)(value)
}

fn text(value: &FieldValue) -> &str {
    match value {
        FieldValue::Text(s) => s,
        FieldValue::Choice(_) | FieldValue::Toggle(_) => "",
    }
}

fn validate_full_name(value: &FieldValue) -> Option<ValidationError> {
    let name = text(value);
    if name.is_empty() {
        Some(ValidationError::FullNameRequired)
    } else if name.chars().count() < NAME_MIN_CHARS {
        Some(ValidationError::FullNameTooShort)
    } else {
        None
    }
}

fn validate_email(value: &FieldValue) -> Option<ValidationError> {
    let email = text(value);
    if email.is_empty() {
        Some(ValidationError::EmailRequired)
    } else if !EMAIL_REGEX.is_match(email) {
        Some(ValidationError::EmailInvalid)
    } else {
        None
    }
}

fn validate_phone(value: &FieldValue) -> Option<ValidationError> {
    let phone = text(value);
    if phone.is_empty() || PHONE_REGEX.is_match(phone) {
        None
    } else {
        Some(ValidationError::PhoneInvalid)
    }
}

fn validate_subject(value: &FieldValue) -> Option<ValidationError> {
    match value {
        FieldValue::Choice(Some(_)) => None,
        _ => Some(ValidationError::SubjectRequired),
    }
}

fn validate_message(value: &FieldValue) -> Option<ValidationError> {
    let message = text(value);
    if message.is_empty() {
        Some(ValidationError::MessageRequired)
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        Some(ValidationError::MessageTooShort)
    } else {
        None
    }
}

fn validate_terms(value: &FieldValue) -> Option<ValidationError> {
    match value {
        FieldValue::Toggle(true) => None,
        _ => Some(ValidationError::TermsNotAccepted),
    }
}

/// Per-field validation outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl ValidationReport {
    /// Record the outcome for one field, replacing any earlier outcome
    pub fn set(&mut self, field: FieldId, outcome: Option<ValidationError>) {
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn error(&self, field: FieldId) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields in focus order
    pub fn failed_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors.keys().copied()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
