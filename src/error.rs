//! Error types for statement extraction and redaction.
//!
//! Every failure a single document can hit is one variant of
//! [`RedactorError`], so the batch runner can record it per file and move on.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for redaction operations.
pub type RedactorResult<T> = Result<T, RedactorError>;

/// Error type for all extraction, redaction and batch operations.
#[derive(Debug)]
pub enum RedactorError {
    /// Error occurred while reading or writing files
    Io { path: PathBuf, source: io::Error },

    /// Input PDF does not exist
    InputNotFound { path: PathBuf },

    /// The external extraction program could not be started
    ToolUnavailable { program: String, source: io::Error },

    /// The external extraction program exited unsuccessfully
    ExtractionFailed {
        path: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    /// In-process text extraction failed
    TextExtraction { path: PathBuf, reason: String },

    /// Operator-supplied pattern did not compile
    PatternError { pattern: String, reason: String },

    /// Invalid configuration or parameters
    InvalidInput { parameter: String, reason: String },

    /// Configuration file could not be loaded
    Config { path: PathBuf, reason: String },
}

impl RedactorError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for RedactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "IO error for path '{}': {}", path.display(), source)
            }
            Self::InputNotFound { path } => {
                write!(f, "PDF file not found: {}", path.display())
            }
            Self::ToolUnavailable { program, source } => {
                write!(f, "Could not run '{}': {}", program, source)
            }
            Self::ExtractionFailed { path, code, stderr } => {
                match code {
                    Some(c) => write!(
                        f,
                        "Extraction of '{}' exited with status {}",
                        path.display(),
                        c
                    )?,
                    None => write!(
                        f,
                        "Extraction of '{}' was terminated by a signal",
                        path.display()
                    )?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            Self::TextExtraction { path, reason } => {
                write!(
                    f,
                    "Text extraction failed for '{}': {}",
                    path.display(),
                    reason
                )
            }
            Self::PatternError { pattern, reason } => {
                write!(f, "Pattern error for '{}': {}", pattern, reason)
            }
            Self::InvalidInput { parameter, reason } => {
                write!(f, "Invalid input for '{}': {}", parameter, reason)
            }
            Self::Config { path, reason } => {
                write!(f, "Invalid config '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for RedactorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::ToolUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}
