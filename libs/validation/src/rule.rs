//! The rule capability.

use std::sync::Arc;

use eventforge_events::Event;

use crate::ValidationError;

/// A stateless check over a single event.
///
/// Implementations must not keep per-event state; the same rule may be
/// invoked concurrently from many threads.
pub trait Rule: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns `Ok(())` if the event passes, or the reason it does not.
    fn validate(&self, event: &Event) -> Result<(), ValidationError>;
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        (**self).validate(event)
    }
}

/// A rule backed by a closure. See [`from_fn`].
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> std::fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&Event) -> Result<(), ValidationError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, event: &Event) -> Result<(), ValidationError> {
        (self.check)(event)
    }
}

/// Wraps a closure as a named [`Rule`].
///
/// ```ignore
/// let tenant = from_fn("tenant", |event| match event.metadata_value("tenant") {
///     Some(_) => Ok(()),
///     None => Err(ValidationError::rejected("tenant", "missing tenant metadata")),
/// });
/// ```
pub fn from_fn<F>(name: impl Into<String>, check: F) -> FnRule<F>
where
    F: Fn(&Event) -> Result<(), ValidationError> + Send + Sync,
{
    FnRule {
        name: name.into(),
        check,
    }
}
