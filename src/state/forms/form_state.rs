//! Contact form controller
//!
//! Owns the field values, the per-field validation outcome and the
//! Editing/Submitted lifecycle. Every value change goes through
//! [`ContactForm::update`], which revalidates the changed field.

use super::field::{FieldId, FieldValue, FormField};
use super::validation::{validate_field, ValidationError, ValidationReport};
use crate::state::{Subject, Submission};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Lifecycle of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted(Submission),
}

/// Why a submit attempt did not produce a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
    #[error("form was already submitted")]
    AlreadySubmitted,
}

/// Index of the submit button row in focus order
pub const SUBMIT_ROW: usize = FieldId::ALL.len();

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub full_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
    report: ValidationReport,
    phase: FormPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text(FieldId::FullName, false),
            email: FormField::text(FieldId::Email, false),
            phone: FormField::text(FieldId::Phone, false),
            subject: FormField::choice(FieldId::Subject),
            message: FormField::text(FieldId::Message, true),
            terms: FormField::toggle(FieldId::Terms),
            active_field_index: 0,
            report: ValidationReport::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
            FieldId::Terms => &self.terms,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Subject => &mut self.subject,
            FieldId::Message => &mut self.message,
            FieldId::Terms => &mut self.terms,
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    /// The held submission while in the Submitted phase
    pub fn submission(&self) -> Option<&Submission> {
        match &self.phase {
            FormPhase::Submitted(submission) => Some(submission),
            FormPhase::Editing => None,
        }
    }

    /// Currently displayed error for a field
    pub fn error(&self, id: FieldId) -> Option<ValidationError> {
        self.report.error(id)
    }

    /// Field under focus, `None` when the submit row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Set a field value and revalidate that field
    pub fn update(&mut self, id: FieldId, value: FieldValue) {
        if self.is_submitted() {
            return;
        }
        self.field_mut(id).value = value;
        self.revalidate(id);
    }

    fn revalidate(&mut self, id: FieldId) {
        let outcome = validate_field(id, &self.field(id).value);
        if outcome != self.report.error(id) {
            tracing::debug!(field = id.name(), error = ?outcome, "validation changed");
        }
        self.report.set(id, outcome);
    }

    /// Append a typed character to the active text field
    pub fn input_char(&mut self, c: char) {
        let Some(id) = self.active_field_id() else {
            return;
        };
        let mut field = self.field(id).clone();
        if !matches!(field.value, FieldValue::Text(_)) {
            return;
        }
        field.push_char(c);
        self.update(id, field.value);
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        let Some(id) = self.active_field_id() else {
            return;
        };
        let mut field = self.field(id).clone();
        if !matches!(field.value, FieldValue::Text(_)) {
            return;
        }
        field.pop_char();
        self.update(id, field.value);
    }

    /// Insert a line break when the active field is multiline
    pub fn insert_newline(&mut self) {
        if self.active_field_id().is_some_and(|id| self.field(id).is_multiline) {
            self.input_char('\n');
        }
    }

    pub fn toggle_terms(&mut self) {
        let checked = self.terms.as_toggle();
        self.update(FieldId::Terms, FieldValue::Toggle(!checked));
    }

    /// Select the next subject (the first one when nothing is chosen)
    pub fn next_subject(&mut self) {
        let next = match self.subject.as_choice() {
            Some(subject) => subject.next(),
            None => Subject::Support,
        };
        self.update(FieldId::Subject, FieldValue::Choice(Some(next)));
    }

    /// Select the previous subject (the last one when nothing is chosen)
    pub fn prev_subject(&mut self) {
        let prev = match self.subject.as_choice() {
            Some(subject) => subject.prev(),
            None => Subject::Other,
        };
        self.update(FieldId::Subject, FieldValue::Choice(Some(prev)));
    }

    /// Overall validity: every validator passes, terms included
    pub fn is_valid(&self) -> bool {
        FieldId::ALL
            .iter()
            .all(|id| validate_field(*id, &self.field(*id).value).is_none())
    }

    /// Attempt to submit.
    ///
    /// On success the form moves to Submitted and holds the new submission.
    /// On failure every field is revalidated so all errors become visible.
    pub fn submit(&mut self) -> Result<&Submission, SubmitError> {
        if self.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }

        for id in FieldId::ALL {
            self.revalidate(id);
        }
        if !self.report.is_valid() {
            let count = self.report.error_count();
            let failed: Vec<_> = self.report.failed_fields().map(|id| id.name()).collect();
            tracing::info!(invalid_fields = count, ?failed, "submit rejected");
            return Err(SubmitError::Invalid(count));
        }

        let Some(subject) = self.subject.as_choice() else {
            return Err(SubmitError::Invalid(1));
        };
        let submission = Submission::new(
            self.full_name.as_text().to_string(),
            self.email.as_text().to_string(),
            self.phone.as_text().to_string(),
            subject,
            self.message.as_text().to_string(),
        );
        tracing::info!(subject = subject.value(), "form submitted");
        self.phase = FormPhase::Submitted(submission);
        match &self.phase {
            FormPhase::Submitted(submission) => Ok(submission),
            FormPhase::Editing => unreachable!("phase was just set to Submitted"),
        }
    }

    /// Clear all fields and errors and return to Editing
    pub fn reset(&mut self) {
        let filled = FieldId::ALL
            .iter()
            .filter(|id| self.field(**id).has_value())
            .count();
        tracing::debug!(filled_fields = filled, "clearing form");
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.report.clear();
        self.active_field_index = 0;
        if self.is_submitted() {
            tracing::info!("submission discarded, form reset");
        }
        self.phase = FormPhase::Editing;
    }

    /// Characters typed into the message so far
    pub fn message_len(&self) -> usize {
        self.message.as_text().chars().count()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
