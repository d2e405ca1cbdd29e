//! Text extraction from PDF statements.
//!
//! Extraction is a seam: the batch runner only sees [`TextExtractor`], so
//! the external `pdftotext` process can be swapped for the in-process
//! backend (or a test double).

pub mod embedded;
pub mod pdftotext;

pub use embedded::EmbeddedExtractor;
pub use pdftotext::PdfToTextExtractor;

use crate::config::{ExtractorBackend, ExtractorConfig};
use crate::error::{RedactorError, RedactorResult};
use std::path::{Path, PathBuf};

/// Raw text pulled out of one PDF.
#[derive(Debug, Clone, Default)]
pub struct ExtractedText {
    pub text: String,

    /// Intermediate artifact left on disk, if the backend wrote one
    pub intermediate: Option<PathBuf>,
}

/// Strategy for turning a PDF into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extracts the text of `pdf`.
    ///
    /// Backends that need an on-disk intermediate write it into
    /// `scratch_dir` and report it in [`ExtractedText::intermediate`]; the
    /// caller removes it once the redacted output is safely written.
    fn extract(&self, pdf: &Path, scratch_dir: &Path) -> RedactorResult<ExtractedText>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Builds the extractor selected by configuration.
pub fn from_config(config: &ExtractorConfig) -> Box<dyn TextExtractor> {
    match config.backend {
        ExtractorBackend::Pdftotext => Box::new(
            PdfToTextExtractor::new(config.program.clone()).with_layout(config.layout),
        ),
        ExtractorBackend::Embedded => Box::new(EmbeddedExtractor::new()),
    }
}

/// Fails with [`RedactorError::InputNotFound`] unless `pdf` exists.
pub(crate) fn ensure_exists(pdf: &Path) -> RedactorResult<()> {
    if pdf.exists() {
        Ok(())
    } else {
        Err(RedactorError::InputNotFound {
            path: pdf.to_path_buf(),
        })
    }
}

/// Decodes UTF-8, dropping byte sequences that are not valid UTF-8.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
