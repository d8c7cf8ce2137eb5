//! Persisted table preferences.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("fleetdesk"))
}

pub fn settings_file() -> Result<PathBuf> {
    config_dir().map(|p| p.join("table_settings.json"))
}

/// User-tunable table defaults, shared across list screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Page size a new table session starts with.
    pub default_page_size: usize,
    /// Page sizes offered by the page-size picker.
    pub page_size_options: Vec<usize>,
    /// Compare categorical filter values ignoring case.
    pub case_insensitive_categories: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            page_size_options: vec![10, 25, 50, 100],
            case_insensitive_categories: false,
        }
    }
}

impl TableSettings {
    /// Load settings from the platform config directory, falling back to
    /// defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write settings file: {:?}", path))
    }
}
