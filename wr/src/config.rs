//! Configuration types and loading
//!
//! One JSON file (`config.json` in the working directory) drives both the
//! generator and the analyzer. Missing or corrupt configuration falls back
//! to hardcoded defaults with a warning - it is never fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing template files
    pub templates_dir: String,

    /// Directory where rendered reports are written
    pub reports_dir: String,

    /// File holding previous answers, keyed by user and template
    pub history_file: String,

    /// Extension appended to generated report files
    pub file_format: String,

    /// strftime-style format for dates stamped into reports and history
    pub date_format: String,

    /// Declared encoding for template and report files (only utf-8 is read)
    pub default_encoding: String,

    /// Render a PDF artifact next to every report
    pub export_pdf: bool,

    /// Selectable template types, keyed by type name
    pub template_settings: BTreeMap<String, TemplateSettings>,

    /// Interactive UI settings
    pub ui_settings: UiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            reports_dir: "reports".to_string(),
            history_file: "history.json".to_string(),
            file_format: ".txt".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            default_encoding: "utf-8".to_string(),
            export_pdf: false,
            template_settings: BTreeMap::new(),
            ui_settings: UiSettings::default(),
        }
    }
}

/// One selectable template type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Template file name under `templates_dir`
    pub default_template: String,

    /// Display name shown in the selector menu
    pub name: String,

    /// One-line description shown in the selector menu
    pub description: String,
}

/// Interactive UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Character repeated to draw the preview separator rule
    pub preview_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            preview_separator: "=".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback to defaults
    ///
    /// Tries the explicit path if given, otherwise `./config.json`. Any read
    /// or parse failure logs a warning and yields the default configuration.
    pub fn load(config_path: Option<&PathBuf>) -> Self {
        let path = config_path
            .cloned()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {e}. Using defaults", path.display());
                Self::default()
            }
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_json::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Create the templates and reports directories if they are missing
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.templates_dir, &self.reports_dir] {
            fs::create_dir_all(dir).context(format!("Failed to create directory {dir}"))?;
        }
        Ok(())
    }
}
