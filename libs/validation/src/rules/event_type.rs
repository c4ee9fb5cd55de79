//! Event type format rule.

use eventforge_events::Event;

use crate::{Rule, ValidationError};

const SEPARATOR: char = '.';

/// Checks that `event.event_type()` follows `<domain>.<action>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeRule;

impl TypeRule {
    pub fn new() -> Self {
        Self
    }

    /// Checks a raw event type string.
    pub fn check(&self, event_type: &str) -> Result<(), ValidationError> {
        if !event_type.contains(SEPARATOR) {
            return Err(ValidationError::TypeMissingSeparator);
        }

        if event_type.starts_with(SEPARATOR) || event_type.ends_with(SEPARATOR) {
            return Err(ValidationError::TypeEdgeSeparator);
        }

        Ok(())
    }
}

impl Rule for TypeRule {
    fn name(&self) -> &str {
        "type"
    }

    fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        self.check(event.event_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("order.created")]
    #[case::nested("billing.invoice.paid")]
    #[case::snake("org_member.role_updated")]
    fn test_accepts(#[case] event_type: &str) {
        assert_eq!(TypeRule.check(event_type), Ok(()));
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            TypeRule.check("ordercreated"),
            Err(ValidationError::TypeMissingSeparator)
        );
    }

    #[rstest]
    #[case::leading(".order.created")]
    #[case::trailing("order.created.")]
    #[case::only_dot(".")]
    #[case::leading_single(".created")]
    fn test_edge_separator(#[case] event_type: &str) {
        assert_eq!(
            TypeRule.check(event_type),
            Err(ValidationError::TypeEdgeSeparator)
        );
    }
}
