//! Inline validation message under a field

use crate::state::ValidationError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Message line for an error; nothing when the field is valid
pub fn validation_line(error: Option<ValidationError>) -> Option<Line<'static>> {
    let error = error?;
    let style = Style::default().fg(Color::Red);
    Some(Line::from(vec![
        Span::styled("⚠ ", style),
        Span::styled(error.to_string(), style),
    ]))
}

pub fn draw_validation_message(frame: &mut Frame, area: Rect, error: Option<ValidationError>) {
    if let Some(line) = validation_line(error) {
        frame.render_widget(Paragraph::new(line), area);
    }
}
