//! Ordered, fail-fast rule composition.

use eventforge_events::Event;
use tracing::debug;

use crate::{Rule, SourceRule, TypeRule, ValidationConfig, ValidationError};

/// An ordered sequence of rules fixed at construction.
///
/// [`Pipeline::validate`] runs the rules in registration order and returns
/// the first failure unchanged; later rules are not invoked. A pipeline holds
/// no per-call state and can be shared across threads.
pub struct Pipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl Pipeline {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Creates a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Source rule followed by type rule, with default policies.
    pub fn standard() -> Self {
        Self::from_config(&ValidationConfig::default())
    }

    /// Source rule followed by type rule, using the configured source policy.
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::builder()
            .rule(SourceRule::new(config.source.clone()))
            .rule(TypeRule::new())
            .build()
    }

    /// Validates an event against every rule, stopping at the first failure.
    pub fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        for rule in &self.rules {
            if let Err(err) = rule.validate(event) {
                debug!(
                    event_id = %event.id(),
                    rule = rule.name(),
                    reason_code = err.reason_code(),
                    "Event rejected"
                );
                return Err(err);
            }
            debug!(event_id = %event.id(), rule = rule.name(), "Rule passed");
        }

        Ok(())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for constructing pipelines.
#[derive(Default)]
pub struct PipelineBuilder {
    rules: Vec<Box<dyn Rule>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; rules run in the order they are added.
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn boxed_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline::new(self.rules)
    }
}
