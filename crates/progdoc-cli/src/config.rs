//! Configuration Settings
//!
//! `progdoc.toml` supplies the formatting used when a program record has
//! none, section label overrides and the default output directory.
//!
//! ```toml
//! [formatting]
//! font_family = "Times New Roman"
//! font_size = 14.0
//!
//! [labels]
//! goal = "Цель"
//!
//! [output]
//! directory = "out"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use progdoc_ast::{Alignment, FormattingProfile, SectionKey, SectionLabels, UnknownSectionKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration file looked up next to the input
pub const CONFIG_FILE_NAME: &str = "progdoc.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Formatting applied to records without their own
    pub formatting: FormattingSettings,
    /// Section label overrides, keyed by section key (`goal`, `tasks`, ...)
    pub labels: BTreeMap<String, String>,
    /// Output settings
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize settings to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolve the settings for an input file.
    ///
    /// An explicit path must exist. Otherwise `progdoc.toml` next to the
    /// input is used when present, and the defaults when not.
    pub fn discover(input: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::load(path);
        }

        let candidate = input
            .parent()
            .unwrap_or(Path::new("."))
            .join(CONFIG_FILE_NAME);
        if candidate.exists() {
            debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Section labels with the configured overrides applied
    pub fn section_labels(&self) -> Result<SectionLabels, UnknownSectionKey> {
        let mut labels = SectionLabels::default();
        for (key, label) in &self.labels {
            labels.set(key.parse::<SectionKey>()?, label.clone());
        }
        Ok(labels)
    }
}

/// Default formatting, in the units of [`FormattingProfile`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormattingSettings {
    pub font_family: String,
    pub font_size: f64,
    pub heading_font_size: f64,
    pub heading_bold: bool,
    pub line_spacing: f64,
    pub alignment: Alignment,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub show_page_numbers: bool,
}

impl Default for FormattingSettings {
    fn default() -> Self {
        FormattingProfile::default().into()
    }
}

impl From<FormattingProfile> for FormattingSettings {
    fn from(profile: FormattingProfile) -> Self {
        Self {
            font_family: profile.font_family,
            font_size: profile.font_size,
            heading_font_size: profile.heading_font_size,
            heading_bold: profile.heading_bold,
            line_spacing: profile.line_spacing,
            alignment: profile.alignment,
            margin_top: profile.margin_top,
            margin_bottom: profile.margin_bottom,
            margin_left: profile.margin_left,
            margin_right: profile.margin_right,
            show_page_numbers: profile.show_page_numbers,
        }
    }
}

impl From<&FormattingSettings> for FormattingProfile {
    fn from(settings: &FormattingSettings) -> Self {
        Self {
            font_family: settings.font_family.clone(),
            font_size: settings.font_size,
            heading_font_size: settings.heading_font_size,
            heading_bold: settings.heading_bold,
            line_spacing: settings.line_spacing,
            alignment: settings.alignment,
            margin_top: settings.margin_top,
            margin_bottom: settings.margin_bottom,
            margin_left: settings.margin_left,
            margin_right: settings.margin_right,
            show_page_numbers: settings.show_page_numbers,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for rendered files when no output path is given
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}
