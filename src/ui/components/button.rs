//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Build a bordered, centered button
pub fn button<'a>(content: &str, is_selected: bool, is_enabled: bool) -> Paragraph<'a> {
    let border_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text_style = if !is_enabled {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block)
}

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    frame.render_widget(button(content, is_selected, is_enabled), area);
}

/// Render a button with its shortcut key before the label
pub fn render_key_button(
    frame: &mut Frame,
    area: Rect,
    key: char,
    label: &str,
    is_selected: bool,
) {
    let content = format!("[{key}] {label}");
    render_button(frame, area, &content, is_selected, true);
}
