//! Settings file and directory utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("datalens"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("datalens"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("settings.toml"))
}

pub fn default_history_file() -> Result<PathBuf> {
    data_dir().map(|p| p.join("history.txt"))
}

/// Get the log directory path
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("datalens")
        .join("logs")
}

/// User settings, read from `settings.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page size on start-up and after `reset`
    pub default_page_size: usize,
    /// Rows previewed right after loading; 0 disables the preview
    pub show_rows: usize,
    /// Keep REPL history between sessions
    pub history: bool,
    /// History location; defaults to `<data dir>/datalens/history.txt`
    pub history_file: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Write JSON logs to the daily rolling file under the log directory
    pub file_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: datalens_query::DEFAULT_PAGE_SIZE,
            show_rows: 5,
            history: true,
            history_file: None,
            log_filter: "warn".to_string(),
            file_logs: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing file at the default location yields the defaults; an explicit
    /// path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = settings_file()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        if settings.default_page_size == 0 {
            anyhow::bail!("default_page_size must be at least 1");
        }
        Ok(settings)
    }

    /// Where REPL history is kept, or `None` when history is disabled
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        match &self.history_file {
            Some(path) => Some(path.clone()),
            None => default_history_file().ok(),
        }
    }
}
