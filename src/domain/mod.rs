//! Domain models for statement redaction.
//!
//! This module names the sensitive fields found on bank statements, the
//! patterns that detect them and the masks that replace them.

pub mod mask;
pub mod patterns;

pub use mask::mask_digit_run;
pub use patterns::StatementPatterns;

use std::fmt;

/// Identity of one entry in the redaction rule table.
///
/// The variant order is the order rules are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Bare 9-12 digit runs (candidate account numbers)
    DigitRun,
    /// "Account Number: ..." labeled fields
    LabeledAccount,
    /// "Routing Number: ..." labeled fields
    LabeledRouting,
    /// The configured customer name
    CustomerName,
    /// The configured customer address pattern
    CustomerAddress,
    /// North American phone numbers
    Phone,
    /// Email addresses
    Email,
    /// Social security numbers
    Ssn,
}

impl RuleKind {
    /// All rule kinds in application order.
    pub const ORDERED: [RuleKind; 8] = [
        RuleKind::DigitRun,
        RuleKind::LabeledAccount,
        RuleKind::LabeledRouting,
        RuleKind::CustomerName,
        RuleKind::CustomerAddress,
        RuleKind::Phone,
        RuleKind::Email,
        RuleKind::Ssn,
    ];

    /// Short machine-friendly name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::DigitRun => "digit_run",
            Self::LabeledAccount => "account_number",
            Self::LabeledRouting => "routing_number",
            Self::CustomerName => "customer_name",
            Self::CustomerAddress => "customer_address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Ssn => "ssn",
        }
    }

    /// Whether the rule's pattern ignores letter case.
    ///
    /// Labeled fields and operator literals are matched case-insensitively;
    /// digit and symbol shaped patterns have no letters worth folding.
    pub fn case_insensitive(self) -> bool {
        matches!(
            self,
            Self::LabeledAccount | Self::LabeledRouting | Self::CustomerName | Self::CustomerAddress
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
