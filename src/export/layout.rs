//! Paginated text layout of a submission
//!
//! Positions are in millimetres from the top-left corner of an A4 page,
//! with `y` marking the text baseline.

use crate::state::Submission;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const BODY_FONT_SIZE: f32 = 12.0;

/// Column width the message body is wrapped to
pub const MESSAGE_WRAP_COLUMNS: usize = 80;

const MARGIN_LEFT_MM: f32 = 20.0;
const TITLE_Y_MM: f32 = 30.0;
const FIRST_FIELD_Y_MM: f32 = 50.0;
const FIELD_SPACING_MM: f32 = 15.0;
const MESSAGE_GAP_MM: f32 = 10.0;
/// 12pt text at a 1.15 line factor
const BODY_LINE_HEIGHT_MM: f32 = BODY_FONT_SIZE * 1.15 * 25.4 / 72.0;
/// Baselines below this continue on the next page
const CONTENT_BOTTOM_MM: f32 = PAGE_HEIGHT_MM - 20.0;
const CONTINUATION_TOP_MM: f32 = 25.0;

/// One positioned run of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size: f32,
    pub bold: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: String,
    pub pages: Vec<Page>,
}

impl DocumentLayout {
    /// All text lines in reading order
    #[cfg(test)]
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }
}

/// Places lines top to bottom, opening a new page at the bottom margin
struct PageWriter {
    pages: Vec<Page>,
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: 0.0,
        }
    }

    fn move_to(&mut self, y: f32) {
        self.y = y;
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }

    fn write(&mut self, text: impl Into<String>, font_size: f32, bold: bool) {
        if self.y > CONTENT_BOTTOM_MM {
            self.pages.push(Page::default());
            self.y = CONTINUATION_TOP_MM;
        }
        let line = TextLine {
            x_mm: MARGIN_LEFT_MM,
            y_mm: self.y,
            font_size,
            bold,
            text: text.into(),
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    fn finish(self) -> Vec<Page> {
        self.pages
    }
}

/// Lay out the submission as title, labeled fields, then the wrapped message
pub fn layout_submission(title: &str, submission: &Submission) -> DocumentLayout {
    let mut writer = PageWriter::new();

    writer.move_to(TITLE_Y_MM);
    writer.write(title, TITLE_FONT_SIZE, true);

    writer.move_to(FIRST_FIELD_Y_MM);
    let mut fields = vec![
        format!("Full Name: {}", submission.full_name()),
        format!("Email: {}", submission.email()),
    ];
    if let Some(phone) = submission.phone() {
        fields.push(format!("Phone: {phone}"));
    }
    fields.push(format!("Subject: {}", submission.subject().value()));

    for field in fields {
        writer.write(field, BODY_FONT_SIZE, false);
        writer.advance(FIELD_SPACING_MM);
    }

    writer.write("Message:", BODY_FONT_SIZE, false);
    writer.advance(MESSAGE_GAP_MM);
    for line in wrap_text(submission.message(), MESSAGE_WRAP_COLUMNS) {
        writer.write(line, BODY_FONT_SIZE, false);
        writer.advance(BODY_LINE_HEIGHT_MM);
    }

    DocumentLayout {
        title: title.to_string(),
        pages: writer.finish(),
    }
}

/// Wrap text to fit within a maximum width (in characters).
///
/// Explicit line breaks are kept; words longer than the width are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                }
                let rest = word.split_off(max_width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if current_len + word.len() + 1 > max_width && current_len > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if current_len > 0 {
                current_line.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current_line.extend(word);
        }
        if current_len > 0 {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
