//! Export actions for a submitted form: PDF download, print and clipboard

mod layout;
mod pdf;
mod print;

use crate::services::PlatformServices;
use crate::state::Submission;
use chrono::Utc;
use layout::layout_submission;
use pdf::render_pdf;
use print::summary_html;
use std::path::PathBuf;

/// Title of the generated and printed documents
pub const DOCUMENT_TITLE: &str = "Contact Form Submission";

/// Render the submission to PDF and save it through the platform.
///
/// Returns the saved path, or `None` when there is no submission or rendering
/// or saving failed (the failure is logged).
pub fn generate_document(
    submission: Option<&Submission>,
    platform: &dyn PlatformServices,
    file_name: &str,
) -> Option<PathBuf> {
    let submission = submission?;
    let layout = layout_submission(DOCUMENT_TITLE, submission);
    let bytes = match render_pdf(&layout, Utc::now()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("{e}");
            return None;
        }
    };

    match platform.save_document(file_name, &bytes) {
        Ok(path) => {
            tracing::info!(path = %path.display(), pages = layout.pages.len(), "PDF exported");
            Some(path)
        }
        Err(e) => {
            tracing::warn!("PDF export failed: {e}");
            None
        }
    }
}

/// Open the printable summary. Returns whether the print flow started.
pub fn print_summary(submission: Option<&Submission>, platform: &dyn PlatformServices) -> bool {
    let Some(submission) = submission else {
        return false;
    };
    let html = summary_html(DOCUMENT_TITLE, submission);

    match platform.print_document(DOCUMENT_TITLE, &html) {
        Ok(()) => {
            tracing::info!("print document opened");
            true
        }
        Err(e) => {
            tracing::warn!("print failed: {e}");
            false
        }
    }
}

/// Copy the plain-text summary to the clipboard
pub fn copy_summary(submission: Option<&Submission>, platform: &dyn PlatformServices) -> bool {
    let Some(submission) = submission else {
        return false;
    };

    match platform.copy_text(&submission.summary_text()) {
        Ok(()) => {
            tracing::info!("summary copied to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!("clipboard copy failed: {e}");
            false
        }
    }
}
