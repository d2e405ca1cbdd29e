//! Extraction through poppler's `pdftotext`.

use super::{decode_dropping_invalid, ensure_exists, ExtractedText, TextExtractor};
use crate::config::DEFAULT_PDFTOTEXT;
use crate::error::{RedactorError, RedactorResult};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `pdftotext [-layout] <pdf> <scratch>/<stem>_temp.txt`.
#[derive(Debug, Clone)]
pub struct PdfToTextExtractor {
    program: String,
    layout: bool,
}

impl PdfToTextExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            layout: true,
        }
    }

    /// Toggles the `-layout` flag.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    /// Path of the intermediate text file for `pdf`.
    pub fn intermediate_path(pdf: &Path, scratch_dir: &Path) -> PathBuf {
        let stem = pdf
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        scratch_dir.join(format!("{}_temp.txt", stem))
    }
}

impl Default for PdfToTextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PDFTOTEXT)
    }
}

impl TextExtractor for PdfToTextExtractor {
    fn extract(&self, pdf: &Path, scratch_dir: &Path) -> RedactorResult<ExtractedText> {
        ensure_exists(pdf)?;

        let temp = Self::intermediate_path(pdf, scratch_dir);
        let mut cmd = Command::new(&self.program);
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.arg(pdf).arg(&temp);
        debug!("Running {:?}", cmd);

        let output = cmd.output().map_err(|e| RedactorError::ToolUnavailable {
            program: self.program.clone(),
            source: e,
        })?;

        if !output.status.success() {
            return Err(RedactorError::ExtractionFailed {
                path: pdf.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let bytes = std::fs::read(&temp).map_err(|e| RedactorError::io(&temp, e))?;

        Ok(ExtractedText {
            text: decode_dropping_invalid(&bytes),
            intermediate: Some(temp),
        })
    }

    fn name(&self) -> &str {
        "pdftotext"
    }
}
