//! Common test utilities and fixtures.
//!
//! Statement "PDFs" in these tests are plain text files; the fake
//! `pdftotext` below copies them to its output path the way the real tool
//! would write extracted text.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Marker that makes the fake extractor fail like a damaged PDF.
pub const CORRUPT_MARKER: &str = "%%CORRUPT%%";

/// A statement carrying every field the rule table masks.
pub const SAMPLE_STATEMENT: &str = "\
JANE Q CUSTOMER
742 Evergreen Terrace
Springfield, OR 97403
Account Number: 000123456789
Routing Number: 021000021
Customer Service: 1-800-935-9935
Email: jane.customer@example.com
Tax ID: 123-45-6789
Reference 12
";

pub const SAMPLE_NAME: &str = "Jane Q Customer";
pub const SAMPLE_ADDRESS_PATTERN: &str = r"742 Evergreen Terrace.*?\d{5}";

/// `SAMPLE_STATEMENT` redacted with `SAMPLE_NAME` and `SAMPLE_ADDRESS_PATTERN`.
pub const SAMPLE_REDACTED: &str = "\
CUSTOMER NAME
CUSTOMER ADDRESS
Account Number: XXXXXXXXX
Routing Number: XXXXXXXXX
Customer Service: 1-XXX-XXX-XXXX
Email: XXXXX@XXXXX.com
Tax ID: XXX-XX-XXXX
Reference 12
";

const FAKE_PDFTOTEXT: &str = r#"#!/bin/sh
if [ "$1" != "-layout" ]; then
    echo "expected -layout" >&2
    exit 99
fi
if grep -q '%%CORRUPT%%' "$2"; then
    echo "Syntax Error: corrupt statement" >&2
    exit 1
fi
cp "$2" "$3"
"#;

/// Path to a shell script standing in for `pdftotext -layout IN OUT`.
///
/// Written once per test binary so no test spawns it while another thread
/// still holds it open for writing.
#[cfg(unix)]
pub fn fake_pdftotext() -> &'static Path {
    use std::os::unix::fs::PermissionsExt;

    static SCRIPT: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = SCRIPT.get_or_init(|| {
        let dir = TempDir::new().expect("script dir");
        let path = dir.path().join("pdftotext");
        fs::write(&path, FAKE_PDFTOTEXT).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
        (dir, path)
    });
    path
}

/// Writes a fake statement PDF and returns its path.
pub fn write_statement(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("write statement");
    path
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
