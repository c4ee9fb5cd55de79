//! Source identifier rule.

use eventforge_events::Event;

use crate::{Rule, SourcePolicy, ValidationError};

/// Checks that `event.source()` is a well-formed namespaced identifier.
///
/// Checks run in this order and the first violation is reported:
/// 1. length within the policy bounds (inclusive, counted in characters)
/// 2. no whitespace
/// 3. at least one namespace separator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRule {
    policy: SourcePolicy,
}

impl SourceRule {
    pub fn new(policy: SourcePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SourcePolicy {
        &self.policy
    }

    /// Checks a raw source string.
    pub fn check(&self, source: &str) -> Result<(), ValidationError> {
        let len = source.chars().count();
        if len < self.policy.min_len || len > self.policy.max_len {
            return Err(ValidationError::SourceLength {
                len,
                min: self.policy.min_len,
                max: self.policy.max_len,
            });
        }

        if source.chars().any(char::is_whitespace) {
            return Err(ValidationError::SourceWhitespace);
        }

        // Any one separator is enough.
        if !source.contains(self.policy.separators.as_slice()) {
            return Err(ValidationError::SourceNotNamespaced {
                separators: self.policy.separators.iter().collect(),
            });
        }

        Ok(())
    }
}

impl Rule for SourceRule {
    fn name(&self) -> &str {
        "source"
    }

    fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        self.check(event.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOO_LONG: &str = "this is way too long a source name that clearly exceeds one hundred characters in total length for testing";

    #[rstest]
    #[case::dot("svc.name")]
    #[case::dash("svc-name")]
    #[case::colon("svc:name")]
    #[case::slash("svc/name")]
    #[case::mixed("billing.service/eu-west:1")]
    #[case::min_length("a.bcd")]
    fn test_accepts(#[case] source: &str) {
        assert_eq!(SourceRule::default().check(source), Ok(()));
    }

    #[rstest]
    #[case::too_short("ab")]
    #[case::four_chars("a.bc")]
    #[case::too_long(TOO_LONG)]
    fn test_length_violation(#[case] source: &str) {
        let err = SourceRule::default().check(source).unwrap_err();
        assert_eq!(err.reason_code(), "source_length");
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let rule = SourceRule::default();
        let max = format!("a.{}", "b".repeat(98));
        assert_eq!(max.chars().count(), 100);
        assert_eq!(rule.check(&max), Ok(()));

        let over = format!("{max}c");
        assert!(matches!(
            rule.check(&over),
            Err(ValidationError::SourceLength { len: 101, .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        assert_eq!(SourceRule::default().check("ää.öö"), Ok(()));
    }

    #[rstest]
    #[case::space("svc name")]
    #[case::tab("svc\tname.x")]
    #[case::newline("svc.name\n")]
    fn test_whitespace_violation(#[case] source: &str) {
        assert_eq!(
            SourceRule::default().check(source),
            Err(ValidationError::SourceWhitespace)
        );
    }

    #[test]
    fn test_not_namespaced() {
        let err = SourceRule::default().check("svcname").unwrap_err();
        assert_eq!(
            err,
            ValidationError::SourceNotNamespaced {
                separators: ".-:/".to_string()
            }
        );
    }

    /// A single separator must be sufficient; requiring all of them at once
    /// rejects every realistic source.
    #[test]
    fn test_single_separator_regression() {
        let rule = SourceRule::default();
        for source in ["svc.name", "svc-name", "svc:name", "svc/name"] {
            assert_eq!(rule.check(source), Ok(()), "{source} should pass");
        }
    }

    #[test]
    fn test_length_reported_before_whitespace() {
        let err = SourceRule::default().check("a b").unwrap_err();
        assert_eq!(err.reason_code(), "source_length");
    }

    #[test]
    fn test_custom_policy() {
        let rule = SourceRule::new(SourcePolicy {
            min_len: 3,
            max_len: 8,
            separators: vec!['@'],
        });
        assert_eq!(rule.policy().separators, vec!['@']);
        assert_eq!(rule.check("a@b"), Ok(()));
        assert_eq!(rule.check("a.b").unwrap_err().reason_code(), "source_not_namespaced");
        assert_eq!(rule.check("a@bcdefgh").unwrap_err().reason_code(), "source_length");
    }
}
