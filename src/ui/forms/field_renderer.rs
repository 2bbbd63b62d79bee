//! Field rendering utilities for forms
//!
//! Widgets are built from plain props so they can be rendered (and tested)
//! without the form controller.

use crate::state::ValidationError;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CURSOR: &str = "▌";

/// Everything needed to draw one input
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldProps<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<ValidationError>,
    pub icon: Option<&'a str>,
    pub active: bool,
    pub multiline: bool,
    /// Shown dimmed while empty; the label then stays in the border
    pub placeholder: Option<&'a str>,
}

/// Border color: errors first, then focus
pub fn border_style(has_error: bool, is_active: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Whether the label sits in the border rather than inside the box.
///
/// It floats up once the field has a value or focus, or when a placeholder
/// takes its place.
pub fn label_floats(props: &FieldProps) -> bool {
    !props.value.is_empty() || props.active || props.placeholder.is_some()
}

/// Build the bordered widget for an input
pub fn field_widget<'a>(props: &FieldProps<'a>) -> Paragraph<'a> {
    let dim = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line<'a>> = if props.value.is_empty() {
        let mut spans = Vec::new();
        if props.active {
            spans.push(cursor.clone());
        }
        if let Some(placeholder) = props.placeholder {
            spans.push(Span::styled(placeholder, dim));
        } else if !props.active {
            spans.push(Span::styled(props.label, dim));
        }
        vec![Line::from(spans)]
    } else if props.multiline {
        props.value.split('\n').map(Line::raw).collect()
    } else {
        vec![Line::raw(props.value)]
    };

    if !props.value.is_empty() && props.active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    if let Some(icon) = props.icon {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, Span::styled(format!("{icon} "), dim));
        }
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(props.error.is_some(), props.active));
    if label_floats(props) {
        let title_style = if props.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        block = block.title(Span::styled(
            format!(" {} ", props.label),
            title_style.add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(lines).block(block);
    if props.multiline {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    }
}

/// Approximate rows a multiline value takes when wrapped to `width`
pub fn wrapped_height(value: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = value
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Checkbox line for a toggle field
pub fn checkbox_line<'a>(label: &'a str, checked: bool, active: bool) -> Line<'a> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::raw(label),
    ])
}
