//! Layout components (centered card, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the card grows on large terminals
const CARD_MAX_WIDTH: u16 = 80;

/// Split the screen into the centered card and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = rows[0];
    let width = content.width.min(CARD_MAX_WIDTH);
    let card = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (card, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app.state.current_view());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let quit_area = Rect {
            x: area.x + area.width - hint_width,
            width: hint_width,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Form => format!("Tab:next  Shift+Tab:prev  Space:toggle/select  {SUBMIT_SHORTCUT}:send"),
        View::Success => "d:download  p:print  y:copy  r:send another  q:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_is_centered_and_capped() {
        let (card, status) = create_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(card, Rect::new(20, 0, 80, 39));
        assert_eq!(status, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let (card, _) = create_layout(Rect::new(0, 0, 60, 20));
        assert_eq!(card, Rect::new(0, 0, 60, 19));
    }

    #[test]
    fn test_hints_mention_view_keys() {
        assert!(get_view_hints(View::Form).contains(SUBMIT_SHORTCUT));
        assert!(get_view_hints(View::Success).contains("d:download"));
    }
}
