//! Runtime configuration.
//!
//! Settings may be loaded from a YAML file; every field has a default so a
//! partial file (or none at all) is valid.
//!
//! ```yaml
//! input_dir: ./chase_pdfs
//! output_dir: ./redacted_texts
//! redaction:
//!   name: Jane Q Customer
//!   address_pattern: '123 Main St.*?\d{5}'
//! extractor:
//!   backend: pdftotext
//!   program: /usr/local/bin/pdftotext
//!   layout: true
//! ```

use crate::error::{RedactorError, RedactorResult};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "./chase_pdfs";
pub const DEFAULT_OUTPUT_DIR: &str = "./redacted_texts";
pub const DEFAULT_PDFTOTEXT: &str = "pdftotext";

/// Operator-supplied values for the name and address rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// Exact customer name, matched case-insensitively
    pub name: Option<String>,

    /// Regex matching the customer's address
    pub address_pattern: Option<String>,
}

impl RedactionConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.address_pattern = Some(pattern.into());
        self
    }
}

/// Which extractor turns PDFs into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorBackend {
    /// External `pdftotext` process
    #[default]
    Pdftotext,
    /// In-process extraction
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub backend: ExtractorBackend,

    /// Program invoked by the pdftotext backend
    pub program: String,

    /// Pass `-layout` to preserve column alignment
    pub layout: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            backend: ExtractorBackend::default(),
            program: DEFAULT_PDFTOTEXT.to_string(),
            layout: true,
        }
    }
}

/// Top-level settings for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input_dir: PathBuf,

    /// Where redacted text is written; `None` writes next to each PDF
    pub output_dir: Option<PathBuf>,

    pub redaction: RedactionConfig,
    pub extractor: ExtractorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_DIR)),
            redaction: RedactionConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file.
    pub fn load(path: &Path) -> RedactorResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RedactorError::io(path, e))?;
        let settings = Self::from_yaml(&raw).map_err(|e| match e {
            RedactorError::InvalidInput { reason, .. } => RedactorError::Config {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parses settings from YAML text. Empty text yields the defaults.
    pub fn from_yaml(raw: &str) -> RedactorResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|e| RedactorError::InvalidInput {
            parameter: "settings".to_string(),
            reason: e.to_string(),
        })
    }
}
