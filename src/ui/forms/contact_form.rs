//! Contact form view

use super::field_renderer::{border_style, checkbox_line, field_widget, wrapped_height, FieldProps};
use super::validation_message::draw_validation_message;
use crate::state::{ContactForm, FieldId, Subject, MESSAGE_MIN_CHARS};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Get In Touch";
const TAGLINE: &str =
    "We'd love to hear from you. Send us a message and we'll respond as soon as possible.";
const SUBJECT_PLACEHOLDER: &str = "Select a subject";
const MESSAGE_PLACEHOLDER: &str = "Tell us how we can help you...";
const SUBMIT_LABEL: &str = "Send Message";

const HEADER_HEIGHT: u16 = 4;
const INPUT_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 7;
/// Row below each input holding its validation message
const FEEDBACK_HEIGHT: u16 = 1;

/// Vertical blocks of the form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Field(FieldId),
    Submit,
}

impl Section {
    fn height(&self) -> u16 {
        match self {
            Self::Header => HEADER_HEIGHT,
            Self::Field(FieldId::Message) => MESSAGE_HEIGHT + FEEDBACK_HEIGHT,
            Self::Field(_) => INPUT_HEIGHT + FEEDBACK_HEIGHT,
            Self::Submit => BUTTON_HEIGHT,
        }
    }
}

fn sections() -> Vec<Section> {
    let mut sections = vec![Section::Header];
    sections.extend(FieldId::ALL.into_iter().map(Section::Field));
    sections.push(Section::Submit);
    sections
}

/// First row to show so that the focused section fits in the viewport
fn scroll_offset(heights: &[u16], focused: usize, viewport: u16) -> u16 {
    let bottom: u16 = heights.iter().take(focused + 1).sum();
    bottom.saturating_sub(viewport)
}

/// Draw the form card
pub fn draw_contact_form(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(2));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let sections = sections();
    let heights: Vec<u16> = sections.iter().map(Section::height).collect();
    // The header sits before the first field
    let focused = (form.active_field_index + 1).min(sections.len() - 1);
    let offset = scroll_offset(&heights, focused, inner.height);
    let visible_bottom = offset.saturating_add(inner.height);

    let mut top = 0u16;
    for (section, height) in sections.into_iter().zip(heights) {
        let section_top = top;
        top = top.saturating_add(height);
        if section_top < offset || top > visible_bottom {
            continue;
        }
        let rect = Rect {
            x: inner.x,
            y: inner.y + (section_top - offset),
            width: inner.width,
            height,
        };
        match section {
            Section::Header => draw_header(frame, rect),
            Section::Field(id) => draw_form_field(frame, rect, form, id),
            Section::Submit => render_button(
                frame,
                rect,
                SUBMIT_LABEL,
                form.is_submit_row_active(),
                form.is_valid(),
            ),
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

fn draw_form_field(frame: &mut Frame, area: Rect, form: &ContactForm, id: FieldId) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FEEDBACK_HEIGHT)])
        .split(area);
    let (input_area, feedback_area) = (chunks[0], chunks[1]);

    let field = form.field(id);
    let active = form.active_field_id() == Some(id);
    let error = form.error(id);

    match id {
        FieldId::Terms => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(error.is_some(), active));
            let line = checkbox_line(field.label(), field.as_toggle(), active);
            frame.render_widget(Paragraph::new(line).block(block), input_area);
        }
        FieldId::Subject => {
            let value = field.display_value();
            let props = FieldProps {
                label: field.label(),
                value: &value,
                error,
                icon: None,
                active,
                multiline: false,
                placeholder: Some(SUBJECT_PLACEHOLDER),
            };
            frame.render_widget(field_widget(&props), input_area);
            // While choosing, the feedback row lists the options instead
            if active && error.is_none() {
                let options = subject_options(field.as_choice());
                frame.render_widget(Paragraph::new(options), feedback_area);
                return;
            }
        }
        FieldId::Message => {
            let value = field.as_text();
            let props = FieldProps {
                label: field.label(),
                value,
                error,
                icon: id.icon(),
                active,
                multiline: true,
                placeholder: Some(MESSAGE_PLACEHOLDER),
            };
            // Keep the end of a long message in view
            let visible_rows = input_area.height.saturating_sub(2);
            let rows = wrapped_height(value, input_area.width.saturating_sub(2));
            let widget = field_widget(&props).scroll((rows.saturating_sub(visible_rows), 0));
            frame.render_widget(widget, input_area);
            draw_message_feedback(frame, feedback_area, form);
            return;
        }
        FieldId::FullName | FieldId::Email | FieldId::Phone => {
            let props = FieldProps {
                label: field.label(),
                value: field.as_text(),
                error,
                icon: id.icon(),
                active,
                multiline: false,
                placeholder: None,
            };
            frame.render_widget(field_widget(&props), input_area);
        }
    }

    draw_validation_message(frame, feedback_area, error);
}

/// All subjects between arrows, the chosen one highlighted
fn subject_options(selected: Option<Subject>) -> Line<'static> {
    let arrow = Style::default().fg(Color::Cyan);
    let mut spans = vec![Span::styled("◂ ", arrow)];
    for (i, subject) in Subject::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        let style = if Some(subject) == selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(subject.label(), style));
    }
    spans.push(Span::styled(" ▸", arrow));
    Line::from(spans)
}

/// Validation message on the left, character counter on the right
fn draw_message_feedback(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let counter = message_counter(form.message_len());
    let counter_width = counter.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counter_width)])
        .split(area);

    draw_validation_message(frame, chunks[0], form.error(FieldId::Message));

    let style = if form.message_len() >= MESSAGE_MIN_CHARS {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(counter)
            .style(style)
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn message_counter(len: usize) -> String {
    format!("{len}/{MESSAGE_MIN_CHARS} minimum characters")
}
