//! The ordered redaction rule table and the service that runs it.
//!
//! Rules run one after another over the whole text blob, each seeing the
//! output of the previous one, so their order changes the result. A pass
//! can leave placeholders that a rule then re-matches together with their
//! neighbours (two email masks run together, an SSN mask completing an
//! email domain), so the table is re-run until a pass changes nothing.

pub mod rule;

pub use rule::{RedactionRule, Replacement};

use crate::config::RedactionConfig;
use crate::domain::mask::{
    ACCOUNT_LABEL, ADDRESS_PLACEHOLDER, EMAIL_MASK, NAME_PLACEHOLDER, PHONE_MASK, ROUTING_LABEL,
    SSN_MASK,
};
use crate::domain::{mask_digit_run, RuleKind, StatementPatterns};
use crate::error::RedactorResult;
use log::warn;

/// Upper bound on table passes per call to [`Redactor::redact`].
pub const MAX_PASSES: usize = 8;

/// Substitutions made by one rule during a redaction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleHit {
    pub kind: RuleKind,
    pub count: usize,
}

/// Output of a redaction pass.
#[derive(Debug, Clone, Default)]
pub struct Redacted {
    /// Fully redacted text
    pub text: String,

    /// Per-rule substitution counts, in rule order
    pub hits: Vec<RuleHit>,
}

impl Redacted {
    /// Total substitutions across all rules.
    pub fn instances_redacted(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }

    /// Substitutions made by a given rule.
    pub fn count_for(&self, kind: RuleKind) -> usize {
        self.hits
            .iter()
            .filter(|h| h.kind == kind)
            .map(|h| h.count)
            .sum()
    }

    pub fn has_redactions(&self) -> bool {
        self.instances_redacted() > 0
    }
}

/// Applies the statement rule table to text.
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<RedactionRule>,
}

impl Redactor {
    /// Builds the rule table for the given configuration.
    ///
    /// Fails only if the configured address pattern does not compile.
    pub fn new(config: &RedactionConfig) -> RedactorResult<Self> {
        let name_rule = match config.name.as_deref().and_then(StatementPatterns::customer_name) {
            Some(pattern) => RedactionRule::new(
                RuleKind::CustomerName,
                pattern,
                Replacement::Literal(NAME_PLACEHOLDER),
            ),
            None => RedactionRule::inert(
                RuleKind::CustomerName,
                Replacement::Literal(NAME_PLACEHOLDER),
            ),
        };

        let address_rule = match config.address_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => RedactionRule::new(
                RuleKind::CustomerAddress,
                StatementPatterns::customer_address(pattern)?,
                Replacement::Literal(ADDRESS_PLACEHOLDER),
            ),
            _ => RedactionRule::inert(
                RuleKind::CustomerAddress,
                Replacement::Literal(ADDRESS_PLACEHOLDER),
            ),
        };

        let rules = vec![
            RedactionRule::new(
                RuleKind::DigitRun,
                StatementPatterns::digit_run().clone(),
                Replacement::Masked(mask_digit_run),
            ),
            RedactionRule::new(
                RuleKind::LabeledAccount,
                StatementPatterns::labeled_account().clone(),
                Replacement::Literal(ACCOUNT_LABEL),
            ),
            RedactionRule::new(
                RuleKind::LabeledRouting,
                StatementPatterns::labeled_routing().clone(),
                Replacement::Literal(ROUTING_LABEL),
            ),
            name_rule,
            address_rule,
            RedactionRule::new(
                RuleKind::Phone,
                StatementPatterns::phone().clone(),
                Replacement::Literal(PHONE_MASK),
            ),
            RedactionRule::new(
                RuleKind::Email,
                StatementPatterns::email().clone(),
                Replacement::Literal(EMAIL_MASK),
            ),
            RedactionRule::new(
                RuleKind::Ssn,
                StatementPatterns::ssn().clone(),
                Replacement::Literal(SSN_MASK),
            ),
        ];

        Ok(Self { rules })
    }

    /// Redactor with no customer name or address configured.
    pub fn with_defaults() -> Self {
        Self::new(&RedactionConfig::default()).expect("default config has no custom patterns")
    }

    /// The rule table in application order.
    pub fn rules(&self) -> &[RedactionRule] {
        &self.rules
    }

    /// Runs every rule over `text` in order, repeating the table until a
    /// pass makes no substitution.
    ///
    /// Hit counts are summed over all passes.
    pub fn redact(&self, text: &str) -> Redacted {
        let mut current = text.to_string();
        let mut hits: Vec<RuleHit> = self
            .rules
            .iter()
            .map(|rule| RuleHit {
                kind: rule.kind(),
                count: 0,
            })
            .collect();

        for pass in 1..=MAX_PASSES {
            let mut changed = false;
            for (rule, hit) in self.rules.iter().zip(hits.iter_mut()) {
                let (rewritten, count) = rule.apply(&current);
                if count > 0 {
                    current = rewritten.into_owned();
                    hit.count += count;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            if pass == MAX_PASSES {
                warn!("Redaction still changing text after {} passes", MAX_PASSES);
            }
        }

        Redacted {
            text: current,
            hits,
        }
    }

    /// Convenience wrapper returning only the redacted text.
    pub fn redact_text(&self, text: &str) -> String {
        self.redact(text).text
    }
}
