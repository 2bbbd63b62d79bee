//! Trait abstraction over host resources to enable mocking in tests

use std::path::PathBuf;

/// Failure talking to the host platform
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no directory available to save exports")]
    NoExportDirectory,
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Host operations the form needs for its export actions
#[cfg_attr(test, mockall::automock)]
pub trait PlatformServices {
    /// Save a generated document, returning where it was written
    fn save_document(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PlatformError>;

    /// Hand a standalone HTML document to the host print flow
    fn print_document(&self, title: &str, html: &str) -> Result<(), PlatformError>;

    /// Place text on the system clipboard
    fn copy_text(&self, text: &str) -> Result<(), PlatformError>;
}
