//! Success view shown after a submission

use super::components::{render_key_button, BUTTON_HEIGHT};
use crate::state::{SuccessAction, Submission};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const CONFIRMATION: &str =
    "Your message has been sent successfully. We'll get back to you within 24 hours.";

pub fn draw_success(
    frame: &mut Frame,
    area: Rect,
    submission: &Submission,
    selected: SuccessAction,
) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::horizontal(2));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),             // Greeting
            Constraint::Min(0),                // Submission details
            Constraint::Length(BUTTON_HEIGHT), // Actions
        ])
        .split(inner);

    draw_greeting(frame, chunks[0], submission);
    draw_details(frame, chunks[1], submission);
    draw_actions(frame, chunks[2], selected);
}

fn greeting(submission: &Submission) -> String {
    format!("Thanks, {}!", submission.first_name())
}

fn draw_greeting(frame: &mut Frame, area: Rect, submission: &Submission) {
    let lines = vec![
        Line::from(Span::styled("✔", Style::default().fg(Color::Green))),
        Line::from(Span::styled(
            greeting(submission),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(CONFIRMATION, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Labeled rows, message last and on its own lines
fn detail_lines(submission: &Submission) -> Vec<Line<'_>> {
    let label_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for (label, value) in submission.summary_fields() {
        if label == "Message" {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
            lines.extend(value.split('\n').map(Line::raw));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value),
            ]));
        }
    }
    lines
}

fn draw_details(frame: &mut Frame, area: Rect, submission: &Submission) {
    let block = Block::default()
        .title(" Submission Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(detail_lines(submission))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_actions(frame: &mut Frame, area: Rect, selected: SuccessAction) {
    let constraints = SuccessAction::ALL.map(|_| Constraint::Ratio(1, SuccessAction::ALL.len() as u32));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (action, chunk) in SuccessAction::ALL.into_iter().zip(chunks.iter()) {
        render_key_button(frame, *chunk, action.key(), action.label(), action == selected);
    }
}
