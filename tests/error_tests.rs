//! Error display and source chaining.
//!
//! Batch failures are reported to the operator through these messages, so
//! each variant must name the file or pattern involved.

use statement_redactor::error::{RedactorError, RedactorResult};
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

#[test]
fn test_io_error_display() {
    let err = RedactorError::Io {
        path: PathBuf::from("/out/jan_redacted.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    let display = err.to_string();
    assert!(display.contains("/out/jan_redacted.txt"));
    assert!(display.contains("IO error"));
    assert!(display.contains("permission denied"));
    assert!(err.source().is_some());
}

#[test]
fn test_input_not_found_display() {
    let err = RedactorError::InputNotFound {
        path: PathBuf::from("statements/missing.pdf"),
    };
    assert_eq!(err.to_string(), "PDF file not found: statements/missing.pdf");
    assert!(err.source().is_none());
}

#[test]
fn test_tool_unavailable_chains_source() {
    let err = RedactorError::ToolUnavailable {
        program: "pdftotext".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    assert!(err.to_string().starts_with("Could not run 'pdftotext'"));
    let source = err.source().expect("io source");
    assert!(source.to_string().contains("No such file"));
}

#[test]
fn test_extraction_failed_without_stderr() {
    let err = RedactorError::ExtractionFailed {
        path: PathBuf::from("jan.pdf"),
        code: Some(3),
        stderr: "  \n".to_string(),
    };
    assert_eq!(err.to_string(), "Extraction of 'jan.pdf' exited with status 3");
}

#[test]
fn test_extraction_killed_by_signal() {
    let err = RedactorError::ExtractionFailed {
        path: PathBuf::from("jan.pdf"),
        code: None,
        stderr: String::new(),
    };
    assert!(err.to_string().contains("terminated by a signal"));
}

#[test]
fn test_pattern_error_display() {
    let err = RedactorError::PatternError {
        pattern: "[invalid(".to_string(),
        reason: "unclosed bracket".to_string(),
    };

    let display = err.to_string();
    assert!(display.contains("[invalid("));
    assert!(display.contains("unclosed bracket"));
    assert!(display.contains("Pattern error"));
}

#[test]
fn test_config_error_display() {
    let err = RedactorError::Config {
        path: PathBuf::from("redactor.yaml"),
        reason: "unknown variant `ocr`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid config 'redactor.yaml': unknown variant `ocr`"
    );
}

#[test]
fn test_result_alias_propagates() {
    fn inner() -> RedactorResult<()> {
        Err(RedactorError::InvalidInput {
            parameter: "settings".to_string(),
            reason: "bad".to_string(),
        })
    }

    fn outer() -> RedactorResult<u32> {
        inner()?;
        Ok(1)
    }

    assert!(matches!(outer(), Err(RedactorError::InvalidInput { .. })));
}
