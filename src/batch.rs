//! Directory batch processing.
//!
//! Each PDF is extracted, redacted and written before the next one starts.
//! A failure is recorded against its file and the batch moves on.

use crate::error::{RedactorError, RedactorResult};
use crate::extraction::TextExtractor;
use crate::redaction::{Redactor, RuleHit};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// A successfully redacted document.
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub hits: Vec<RuleHit>,
}

impl ProcessedFile {
    pub fn instances_redacted(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

/// Result of processing one input path.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: RedactorResult<ProcessedFile>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outputs written by successful files.
    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|p| p.output.as_path())
    }

    /// Failed inputs with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &RedactorError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }
}

/// Lists `*.pdf` files directly inside `dir`, sorted by path.
///
/// The extension must be exactly `pdf`, so `a.PDF` never shares
/// `a_redacted.txt` with `a.pdf`. Subdirectories are not entered.
pub fn discover_pdfs(dir: &Path) -> RedactorResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| RedactorError::io(dir, e))?;

    let mut pdfs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RedactorError::io(dir, e))?;
        let path = entry.path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext == "pdf");
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }

    pdfs.sort();
    Ok(pdfs)
}

/// Path of the redacted output for `pdf` inside `output_dir`.
pub fn output_path(pdf: &Path, output_dir: &Path) -> PathBuf {
    let stem = pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}_redacted.txt", stem))
}

/// Sequential extract, redact and write loop.
pub struct BatchRunner {
    extractor: Box<dyn TextExtractor>,
    redactor: Redactor,
    output_dir: Option<PathBuf>,
}

impl BatchRunner {
    /// Creates a runner writing next to each input PDF.
    pub fn new(extractor: Box<dyn TextExtractor>, redactor: Redactor) -> Self {
        Self {
            extractor,
            redactor,
            output_dir: None,
        }
    }

    /// Writes all output into `dir`, creating it when needed.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Processes every PDF in `input_dir`.
    ///
    /// Only an unreadable input directory is an error; per-file failures are
    /// recorded in the report.
    pub fn run(&self, input_dir: &Path) -> RedactorResult<BatchReport> {
        let pdfs = discover_pdfs(input_dir)?;

        if pdfs.is_empty() {
            warn!("No PDF files found in {}", input_dir.display());
            return Ok(BatchReport::default());
        }

        info!("Found {} PDF files in {}", pdfs.len(), input_dir.display());
        Ok(self.run_paths(&pdfs))
    }

    /// Processes an explicit list of paths in order.
    pub fn run_paths(&self, paths: &[PathBuf]) -> BatchReport {
        let mut report = BatchReport::default();

        for pdf in paths {
            let result = self.process_file(pdf);
            match &result {
                Ok(done) => info!(
                    "Saved redacted text to {} ({} redactions)",
                    done.output.display(),
                    done.instances_redacted()
                ),
                Err(e) => error!("Skipping {}: {}", pdf.display(), e),
            }
            report.outcomes.push(FileOutcome {
                input: pdf.clone(),
                result,
            });
        }

        info!(
            "Processing complete: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    /// Extracts, redacts and writes a single PDF.
    pub fn process_file(&self, pdf: &Path) -> RedactorResult<ProcessedFile> {
        info!("Processing: {}", display_name(pdf));

        let output_dir = self.resolve_output_dir(pdf);
        fs::create_dir_all(&output_dir).map_err(|e| RedactorError::io(&output_dir, e))?;

        let extracted = self.extractor.extract(pdf, &output_dir)?;
        let redacted = self.redactor.redact(&extracted.text);
        for hit in redacted.hits.iter().filter(|h| h.count > 0) {
            debug!("{}: {} x {}", display_name(pdf), hit.kind, hit.count);
        }

        let output = output_path(pdf, &output_dir);
        fs::write(&output, redacted.text.as_bytes()).map_err(|e| RedactorError::io(&output, e))?;

        if let Some(temp) = &extracted.intermediate {
            fs::remove_file(temp).map_err(|e| RedactorError::io(temp, e))?;
        }

        Ok(ProcessedFile {
            input: pdf.to_path_buf(),
            output,
            hits: redacted.hits,
        })
    }

    fn resolve_output_dir(&self, pdf: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => pdf
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractedText;
    use tempfile::TempDir;

    /// Treats the "PDF" as plain text.
    struct PlainTextExtractor;

    impl TextExtractor for PlainTextExtractor {
        fn extract(&self, pdf: &Path, _scratch_dir: &Path) -> RedactorResult<ExtractedText> {
            if !pdf.exists() {
                return Err(RedactorError::InputNotFound {
                    path: pdf.to_path_buf(),
                });
            }
            let text = fs::read_to_string(pdf).map_err(|e| RedactorError::io(pdf, e))?;
            Ok(ExtractedText {
                text,
                intermediate: None,
            })
        }

        fn name(&self) -> &str {
            "plain"
        }
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("in/jan.pdf"), Path::new("out")),
            PathBuf::from("out/jan_redacted.txt")
        );
    }

    #[test]
    fn test_discover_is_flat_and_lowercase_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.pdf"), "x").unwrap();
        fs::write(dir.path().join("a.PDF"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.pdf"), "x").unwrap();

        let found = discover_pdfs(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["b.pdf"]);
    }

    #[test]
    fn test_output_next_to_input_by_default() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("mar.pdf");
        fs::write(&pdf, "SSN 123-45-6789").unwrap();

        let runner = BatchRunner::new(Box::new(PlainTextExtractor), Redactor::with_defaults());
        let done = runner.process_file(&pdf).unwrap();

        assert_eq!(done.output, dir.path().join("mar_redacted.txt"));
        assert_eq!(fs::read_to_string(&done.output).unwrap(), "SSN XXX-XX-XXXX");
    }
}
