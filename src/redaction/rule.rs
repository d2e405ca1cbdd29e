//! A single entry of the redaction rule table.

use crate::domain::RuleKind;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;

/// How matched text is replaced.
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Fixed text, inserted verbatim (no `$group` expansion)
    Literal(&'static str),

    /// Text computed from the matched substring
    Masked(fn(&str) -> String),
}

impl Replacement {
    /// Produces the replacement for one matched substring.
    pub fn render(&self, matched: &str) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Masked(mask) => mask(matched),
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Masked(_) => f.write_str("Masked(..)"),
        }
    }
}

/// Pattern and replacement strategy for one kind of sensitive field.
///
/// A rule without a pattern is inert: it keeps its slot in the table but
/// never changes text.
#[derive(Debug, Clone)]
pub struct RedactionRule {
    kind: RuleKind,
    pattern: Option<Regex>,
    replacement: Replacement,
}

impl RedactionRule {
    pub fn new(kind: RuleKind, pattern: Regex, replacement: Replacement) -> Self {
        Self {
            kind,
            pattern: Some(pattern),
            replacement,
        }
    }

    /// Creates a rule that never matches.
    pub fn inert(kind: RuleKind, replacement: Replacement) -> Self {
        Self {
            kind,
            pattern: None,
            replacement,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn is_inert(&self) -> bool {
        self.pattern.is_none()
    }

    /// Applies the rule to `text`, returning the rewritten text and the
    /// number of substitutions that changed it.
    ///
    /// A match already equal to its replacement is not counted.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let Some(pattern) = &self.pattern else {
            return (Cow::Borrowed(text), 0);
        };

        let mut count = 0;
        let replacement = self.replacement;
        let rewritten = pattern.replace_all(text, |caps: &Captures<'_>| {
            let rendered = replacement.render(&caps[0]);
            if rendered != caps[0] {
                count += 1;
            }
            rendered
        });
        (rewritten, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_not_expanded() {
        let rule = RedactionRule::new(
            RuleKind::Email,
            Regex::new(r"(\w+)@x").unwrap(),
            Replacement::Literal("$1 gone"),
        );
        let (out, count) = rule.apply("me@x");
        assert_eq!(out, "$1 gone");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unchanged_match_not_counted() {
        let rule = RedactionRule::new(
            RuleKind::Ssn,
            Regex::new(r"X{3}-\d{2}|\d{3}-\d{2}").unwrap(),
            Replacement::Literal("XXX-00"),
        );
        let (out, count) = rule.apply("XXX-00 123-45");
        assert_eq!(out, "XXX-00 XXX-00");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_inert_rule_borrows_input() {
        let rule = RedactionRule::inert(RuleKind::CustomerAddress, Replacement::Literal("A"));
        let (out, count) = rule.apply("123 Main St");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(count, 0);
    }
}
