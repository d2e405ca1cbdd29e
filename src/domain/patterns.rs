//! Detection patterns for statement fields.
//!
//! Built-in patterns are compiled once and cached; operator-supplied
//! patterns (customer name and address) are compiled on demand.

use super::RuleKind;
use crate::error::{RedactorError, RedactorResult};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// `\d` is any Unicode decimal digit, so fullwidth and Arabic-Indic digits
// are masked too.
const DIGIT_RUN: &str = r"\b\d{9,12}\b";
// Labeled digits may already carry the digit-run mask by the time these run.
const LABELED_ACCOUNT: &str = r"Account\s*(?:Number|#)?\s*:?\s*(?:X{5})?\d+";
const LABELED_ROUTING: &str = r"Routing\s*(?:Number|#)?\s*:?\s*(?:X{5}\d{4}|\d{9})";
const PHONE: &str = r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b";
const EMAIL: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const SSN: &str = r"\b\d{3}-\d{2}-\d{4}\b";

/// Cached patterns for the fixed statement fields.
pub struct StatementPatterns;

impl StatementPatterns {
    pub fn digit_run() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            compile(RuleKind::DigitRun, DIGIT_RUN).expect("Valid digit run regex")
        });
        &PATTERN
    }

    pub fn labeled_account() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            compile(RuleKind::LabeledAccount, LABELED_ACCOUNT).expect("Valid account regex")
        });
        &PATTERN
    }

    pub fn labeled_routing() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            compile(RuleKind::LabeledRouting, LABELED_ROUTING).expect("Valid routing regex")
        });
        &PATTERN
    }

    pub fn phone() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| compile(RuleKind::Phone, PHONE).expect("Valid phone number regex"));
        &PATTERN
    }

    pub fn email() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| compile(RuleKind::Email, EMAIL).expect("Valid email regex"));
        &PATTERN
    }

    pub fn ssn() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| compile(RuleKind::Ssn, SSN).expect("Valid SSN regex"));
        &PATTERN
    }

    /// Builds an exact, case-insensitive matcher for a customer name.
    ///
    /// Returns `None` for an empty or whitespace-only name.
    pub fn customer_name(name: &str) -> Option<Regex> {
        if name.trim().is_empty() {
            return None;
        }
        // An escaped literal always compiles.
        compile(RuleKind::CustomerName, &regex::escape(name)).ok()
    }

    /// Compiles an operator-supplied address pattern.
    ///
    /// `.` matches newlines so an address may span statement lines.
    pub fn customer_address(pattern: &str) -> RedactorResult<Regex> {
        RegexBuilder::new(pattern)
            .case_insensitive(RuleKind::CustomerAddress.case_insensitive())
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| RedactorError::PatternError {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}

fn compile(kind: RuleKind, pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(kind.case_insensitive())
        .build()
}
