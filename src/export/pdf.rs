//! PDF rendering of a laid-out submission

use super::layout::{DocumentLayout, TextLine, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use chrono::{DateTime, Utc};
use oxidize_pdf::{Document, Font, Page as PdfPage, PdfError};
use thiserror::Error;

const MM_TO_PT: f64 = 72.0 / 25.4;
const PRODUCER: &str = "contact-tui";

#[derive(Debug, Error)]
#[error("failed to render PDF: {0}")]
pub struct RenderError(#[from] PdfError);

fn mm_to_pt(mm: f32) -> f64 {
    f64::from(mm) * MM_TO_PT
}

/// PDF user-space position of a line's baseline (origin bottom-left)
fn baseline_point(line: &TextLine) -> (f64, f64) {
    (
        mm_to_pt(line.x_mm),
        mm_to_pt(PAGE_HEIGHT_MM) - mm_to_pt(line.y_mm),
    )
}

fn font_for(line: &TextLine) -> Font {
    if line.bold {
        Font::HelveticaBold
    } else {
        Font::Helvetica
    }
}

/// Lines of each output page; an empty layout still yields one blank page
fn page_lines(layout: &DocumentLayout) -> Vec<&[TextLine]> {
    if layout.pages.is_empty() {
        return vec![&[][..]];
    }
    layout.pages.iter().map(|page| page.lines.as_slice()).collect()
}

/// Render the layout to PDF bytes
pub fn render_pdf(
    layout: &DocumentLayout,
    created_at: DateTime<Utc>,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::new();
    doc.set_title(layout.title.as_str());
    doc.set_producer(PRODUCER);
    doc.set_creation_date(created_at);

    for lines in page_lines(layout) {
        let mut page = PdfPage::new(mm_to_pt(PAGE_WIDTH_MM), mm_to_pt(PAGE_HEIGHT_MM));
        for line in lines {
            let (x, y) = baseline_point(line);
            page.text()
                .set_font(font_for(line), f64::from(line.font_size))
                .at(x, y)
                .write(&line.text)?;
        }
        doc.add_page(page);
    }

    Ok(doc.to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::layout::{layout_submission, Page};
    use crate::state::{sample_submission, Subject, Submission};
    use chrono::TimeZone;
    use oxidize_pdf::parser::PdfReader;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap()
    }

    fn page_count(pdf: Vec<u8>) -> u32 {
        PdfReader::new(Cursor::new(pdf))
            .unwrap()
            .into_document()
            .page_count()
            .unwrap()
    }

    fn line(x_mm: f32, y_mm: f32, bold: bool) -> TextLine {
        TextLine {
            x_mm,
            y_mm,
            font_size: 20.0,
            bold,
            text: "Hello".into(),
        }
    }

    #[test]
    fn test_renders_pdf_document() {
        let layout = layout_submission("Contact Form Submission", &sample_submission());
        let pdf = render_pdf(&layout, created()).unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        assert!(pdf.windows(5).any(|window| window == b"%%EOF"));
        assert_eq!(page_count(pdf), 1);
    }

    #[test]
    fn test_one_pdf_page_per_layout_page() {
        let submission = Submission::new(
            "Al".into(),
            "al@example.com".into(),
            String::new(),
            Subject::Support,
            "lorem ipsum ".repeat(2000),
        );
        let layout = layout_submission("T", &submission);
        let pdf = render_pdf(&layout, created()).unwrap();

        assert!(layout.pages.len() > 1);
        assert_eq!(page_count(pdf) as usize, layout.pages.len());
    }

    #[test]
    fn test_empty_layout_still_has_a_page() {
        let layout = DocumentLayout {
            title: "Empty".into(),
            pages: Vec::new(),
        };
        assert_eq!(page_lines(&layout).len(), 1);

        let pdf = render_pdf(&layout, created()).unwrap();
        assert_eq!(page_count(pdf), 1);
    }

    #[test]
    fn test_accented_text_renders() {
        let layout = DocumentLayout {
            title: "Übersicht".into(),
            pages: vec![Page {
                lines: vec![TextLine {
                    text: "café à la crème".into(),
                    ..line(20.0, 30.0, false)
                }],
            }],
        };
        assert!(render_pdf(&layout, created()).is_ok());
    }

    mod placement {
        use super::*;
        use pretty_assertions::assert_eq;

        fn rounded((x, y): (f64, f64)) -> (f64, f64) {
            ((x * 100.0).round() / 100.0, (y * 100.0).round() / 100.0)
        }

        #[test]
        fn test_baseline_measured_from_bottom() {
            assert_eq!(rounded(baseline_point(&line(20.0, 30.0, true))), (56.69, 756.85));
        }

        #[test]
        fn test_page_top_is_page_height() {
            let (_, y) = baseline_point(&line(0.0, 0.0, false));
            assert_eq!((y * 100.0).round() / 100.0, 841.89);
        }

        #[test]
        fn test_bold_lines_use_bold_font() {
            assert!(matches!(font_for(&line(0.0, 0.0, true)), Font::HelveticaBold));
            assert!(matches!(font_for(&line(0.0, 0.0, false)), Font::Helvetica));
        }
    }
}
