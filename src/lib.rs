//! Redacted text exports of PDF bank statements.
//!
//! Statements are converted to text with `pdftotext -layout`, then an
//! ordered table of regex rules masks account and routing numbers, the
//! customer's name and address, phone numbers, emails and SSNs.
//!
//! # Architecture
//!
//! - [`domain`]: field patterns, masks and rule identities
//! - [`redaction`]: the ordered rule table and [`Redactor`]
//! - [`extraction`]: PDF-to-text backends behind [`TextExtractor`]
//! - [`batch`]: per-directory processing with per-file outcomes
//! - [`config`]: YAML-loadable settings
//! - [`error`]: the crate error type
//!
//! # Quick Start
//!
//! ```
//! use statement_redactor::{RedactionConfig, Redactor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let redactor = Redactor::new(&RedactionConfig::default().with_name("Jane Doe"))?;
//! let text = redactor.redact_text("JANE DOE, jane@example.com, 555-123-4567");
//! assert_eq!(text, "CUSTOMER NAME, XXXXX@XXXXX.com, XXX-XXX-XXXX");
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch Processing
//!
//! ```no_run
//! use statement_redactor::{BatchRunner, PdfToTextExtractor, Redactor};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = BatchRunner::new(Box::new(PdfToTextExtractor::default()), Redactor::with_defaults())
//!     .with_output_dir("./redacted_texts");
//! let report = runner.run(Path::new("./chase_pdfs"))?;
//! println!("{} of {} statements redacted", report.succeeded(), report.total());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod extraction;
pub mod redaction;

pub use batch::{BatchReport, BatchRunner, FileOutcome, ProcessedFile};
pub use config::{ExtractorBackend, ExtractorConfig, RedactionConfig, Settings};
pub use domain::RuleKind;
pub use error::{RedactorError, RedactorResult};
pub use extraction::{EmbeddedExtractor, ExtractedText, PdfToTextExtractor, TextExtractor};
pub use redaction::{Redacted, RedactionRule, Redactor, Replacement, RuleHit};
