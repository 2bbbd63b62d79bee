//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (card_area, status_area) = layout::create_layout(frame.area());

    // The success view needs the held submission; otherwise show the form
    match app.state.form.submission() {
        Some(submission) => {
            success::draw_success(frame, card_area, submission, app.state.selected_action)
        }
        None => forms::draw_contact_form(frame, card_area, &app.state.form),
    }

    layout::draw_status_bar(frame, status_area, app);
}

/// Buffer rows as strings, for rendering assertions
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::services::MockPlatformServices;
    use crate::state::{FieldId, FieldValue, Subject};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_form_view_with_status_bar() {
        let mut app = App::with_platform(Box::new(MockPlatformServices::new()), &TuiConfig::default());
        app.status_message = Some("Please fix 5 fields before sending".into());

        let text = screen(&app);
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("Tab:next"));
        assert!(text.contains("Please fix 5 fields before sending"));
    }

    #[test]
    fn test_success_view_after_submit() {
        let mut app = App::with_platform(Box::new(MockPlatformServices::new()), &TuiConfig::default());
        let form = &mut app.state.form;
        form.update(FieldId::FullName, FieldValue::Text("Alan Turing".into()));
        form.update(FieldId::Email, FieldValue::Text("alan@example.org".into()));
        form.update(FieldId::Subject, FieldValue::Choice(Some(Subject::Other)));
        form.update(
            FieldId::Message,
            FieldValue::Text("Can machines think? I would like to discuss.".into()),
        );
        form.update(FieldId::Terms, FieldValue::Toggle(true));
        form.submit().unwrap();

        let text = screen(&app);
        assert!(text.contains("Thanks, Alan!"));
        assert!(text.contains("d:download"));
        assert!(!text.contains("Get In Touch"));
    }
}
