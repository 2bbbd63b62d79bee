//! Application state and core logic

use crate::config::TuiConfig;
use crate::export;
use crate::platform::is_submit_modifier;
use crate::services::{HostServices, PlatformServices};
use crate::state::{AppState, FieldId, Form, SubmitError, SuccessAction, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Host resources used by the export actions
    platform: Box<dyn PlatformServices>,
    /// File name for PDF downloads
    export_file_name: String,
    /// Whether the app should quit
    quit: bool,
    /// Feedback for the last action, shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create an app backed by the host platform
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_platform(Box::new(HostServices::from_config(config)), config)
    }

    pub fn with_platform(platform: Box<dyn PlatformServices>, config: &TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            platform,
            export_file_name: config.export_file_name().to_string(),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view() {
            View::Form => self.handle_form_key(key),
            View::Success => self.handle_success_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let active = self.state.form.active_field_id();

        match key.code {
            // Submit shortcut works from any field
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if active == Some(FieldId::Subject) => self.state.form.prev_subject(),
            KeyCode::Right if active == Some(FieldId::Subject) => self.state.form.next_subject(),
            KeyCode::Enter => match active {
                Some(FieldId::Message) => self.state.form.insert_newline(),
                Some(FieldId::Terms) => self.state.form.toggle_terms(),
                Some(FieldId::Subject) => self.state.form.next_subject(),
                Some(_) => self.state.form.next_field(),
                None => self.submit(),
            },
            KeyCode::Char(' ') if active == Some(FieldId::Terms) => self.state.form.toggle_terms(),
            KeyCode::Char(' ') if active == Some(FieldId::Subject) => {
                self.state.form.next_subject()
            }
            KeyCode::Char(c) if is_text_input(key.modifiers) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.run_action(SuccessAction::SendAnother),
            KeyCode::Left | KeyCode::BackTab => {
                self.state.selected_action = self.state.selected_action.prev();
            }
            KeyCode::Right | KeyCode::Tab => {
                self.state.selected_action = self.state.selected_action.next();
            }
            KeyCode::Enter => self.run_action(self.state.selected_action),
            KeyCode::Char(c) => {
                if let Some(action) = SuccessAction::from_key(c) {
                    self.run_action(action);
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.state.form.submit() {
            Ok(submission) => {
                tracing::debug!(
                    name = submission.full_name(),
                    terms_accepted = submission.terms_accepted(),
                    "showing success view"
                );
                self.state.selected_action = SuccessAction::default();
            }
            Err(SubmitError::Invalid(count)) => {
                let noun = if count == 1 { "field" } else { "fields" };
                self.status_message = Some(format!("Please fix {count} {noun} before sending"));
            }
            Err(SubmitError::AlreadySubmitted) => {}
        }
    }

    /// Run a success view action and report the outcome in the status bar
    fn run_action(&mut self, action: SuccessAction) {
        self.state.selected_action = action;
        let submission = self.state.form.submission();

        let message = match action {
            SuccessAction::DownloadPdf => {
                match export::generate_document(
                    submission,
                    self.platform.as_ref(),
                    &self.export_file_name,
                ) {
                    Some(path) => format!("Saved {}", path.display()),
                    None => "Could not save the PDF".to_string(),
                }
            }
            SuccessAction::Print => {
                if export::print_summary(submission, self.platform.as_ref()) {
                    "Opened the print dialog".to_string()
                } else {
                    "Could not open the print dialog".to_string()
                }
            }
            SuccessAction::Copy => {
                if export::copy_summary(submission, self.platform.as_ref()) {
                    "Copied to clipboard".to_string()
                } else {
                    "Could not copy to the clipboard".to_string()
                }
            }
            SuccessAction::SendAnother => {
                self.state.reset();
                return;
            }
        };
        self.status_message = Some(message);
    }
}

/// Whether a character key types text rather than a shortcut.
///
/// AltGr arrives as CONTROL | ALT on Windows and produces characters such
/// as `@` on many layouts.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    modifiers.contains(altgr) || !modifiers.intersects(altgr)
}
