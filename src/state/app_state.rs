//! Application state definitions

use super::forms::{ContactForm, FormPhase};

/// Current view in the application, derived from the form lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Success,
}

/// Buttons offered by the success view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessAction {
    #[default]
    DownloadPdf,
    Print,
    Copy,
    SendAnother,
}

impl SuccessAction {
    pub const ALL: [SuccessAction; 4] = [
        SuccessAction::DownloadPdf,
        SuccessAction::Print,
        SuccessAction::Copy,
        SuccessAction::SendAnother,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::DownloadPdf => Self::Print,
            Self::Print => Self::Copy,
            Self::Copy => Self::SendAnother,
            Self::SendAnother => Self::DownloadPdf,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::DownloadPdf => Self::SendAnother,
            Self::Print => Self::DownloadPdf,
            Self::Copy => Self::Print,
            Self::SendAnother => Self::Copy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DownloadPdf => "Download PDF",
            Self::Print => "Print Form",
            Self::Copy => "Copy",
            Self::SendAnother => "Send Another",
        }
    }

    /// Shortcut key shown next to the label
    pub fn key(&self) -> char {
        match self {
            Self::DownloadPdf => 'd',
            Self::Print => 'p',
            Self::Copy => 'y',
            Self::SendAnother => 'r',
        }
    }
}

impl SuccessAction {
    /// Action bound to a shortcut key
    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == c)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub selected_action: SuccessAction,
}

impl AppState {
    pub fn current_view(&self) -> View {
        match self.form.phase() {
            FormPhase::Editing => View::Form,
            FormPhase::Submitted(_) => View::Success,
        }
    }

    /// Reset the form and the success view selection
    pub fn reset(&mut self) {
        self.form.reset();
        self.selected_action = SuccessAction::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FieldValue, Subject};

    fn submitted_state() -> AppState {
        let mut state = AppState::default();
        let form = &mut state.form;
        form.update(FieldId::FullName, FieldValue::Text("Linus".into()));
        form.update(FieldId::Email, FieldValue::Text("linus@example.org".into()));
        form.update(FieldId::Subject, FieldValue::Choice(Some(Subject::Sales)));
        form.update(
            FieldId::Message,
            FieldValue::Text("Interested in an enterprise licence.".into()),
        );
        form.update(FieldId::Terms, FieldValue::Toggle(true));
        form.submit().unwrap();
        state
    }

    #[test]
    fn test_default_view_is_form() {
        assert_eq!(AppState::default().current_view(), View::Form);
    }

    #[test]
    fn test_view_follows_submission() {
        let state = submitted_state();
        assert_eq!(state.current_view(), View::Success);
    }

    #[test]
    fn test_reset_returns_to_form_and_first_action() {
        let mut state = submitted_state();
        state.selected_action = SuccessAction::Copy;
        state.reset();
        assert_eq!(state.current_view(), View::Form);
        assert_eq!(state.selected_action, SuccessAction::DownloadPdf);
    }

    #[test]
    fn test_success_action_cycles() {
        let mut action = SuccessAction::default();
        for _ in 0..SuccessAction::ALL.len() {
            action = action.next();
        }
        assert_eq!(action, SuccessAction::DownloadPdf);
        assert_eq!(SuccessAction::DownloadPdf.prev(), SuccessAction::SendAnother);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SuccessAction::from_key('y'), Some(SuccessAction::Copy));
        assert_eq!(SuccessAction::from_key('r'), Some(SuccessAction::SendAnother));
        assert_eq!(SuccessAction::from_key('x'), None);
    }
}
