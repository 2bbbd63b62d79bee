//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default name of the exported PDF
pub const DEFAULT_EXPORT_FILE_NAME: &str = "contact-form-submission.pdf";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Directory exported documents are saved into
    pub export_dir: Option<PathBuf>,
    /// File name of the exported PDF
    pub export_file_name: Option<String>,
    /// Program and leading arguments used to open the print document, one
    /// element each (e.g. `["lp", "-d", "office"]`), so paths with spaces work
    pub print_command: Option<Vec<String>>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, writing a default file on first run
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            let config = Self::default();
            if let Err(err) = config.save_to(&path) {
                tracing::warn!(path = %path.display(), "could not write default config: {err:#}");
            }
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, defaulting when it is absent
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Export file name, falling back to the default
    pub fn export_file_name(&self) -> &str {
        self.export_file_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_EXPORT_FILE_NAME)
    }
}
