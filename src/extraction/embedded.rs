//! In-process extraction for hosts without poppler.
//!
//! Output is not layout-preserving, so statement columns may not line up the
//! way `pdftotext -layout` renders them. The redaction rules do not depend on
//! layout.

use super::{ensure_exists, ExtractedText, TextExtractor};
use crate::error::{RedactorError, RedactorResult};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct EmbeddedExtractor;

impl EmbeddedExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for EmbeddedExtractor {
    fn extract(&self, pdf: &Path, _scratch_dir: &Path) -> RedactorResult<ExtractedText> {
        ensure_exists(pdf)?;

        let bytes = std::fs::read(pdf).map_err(|e| RedactorError::io(pdf, e))?;

        // pdf-extract can panic on malformed documents; keep that to this file.
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|_| RedactorError::TextExtraction {
                path: pdf.to_path_buf(),
                reason: "PDF parser panicked".to_string(),
            })?
            .map_err(|e| RedactorError::TextExtraction {
                path: pdf.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(ExtractedText {
            text,
            intermediate: None,
        })
    }

    fn name(&self) -> &str {
        "embedded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = EmbeddedExtractor::new()
            .extract(&dir.path().join("nope.pdf"), dir.path())
            .unwrap_err();
        assert!(matches!(err, RedactorError::InputNotFound { .. }));
    }
}
