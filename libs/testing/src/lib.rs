//! Test fixtures shared across eventforge crates.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use eventforge_events::{Event, Metadata, Payload};
use eventforge_validation::{Rule, ValidationError};

/// A fixed timestamp so fixtures are reproducible.
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn sample_payload() -> Payload {
    Payload::from([
        ("orderId".to_string(), serde_json::json!("ord-1001")),
        ("total".to_string(), serde_json::json!(129.5)),
    ])
}

pub fn sample_metadata() -> Metadata {
    Metadata::from([("tenant".to_string(), "acme".to_string())])
}

/// `order.created` from `billing.service`, version 1.
pub fn sample_event() -> Event {
    event_with("order.created", "billing.service")
}

/// A valid-to-construct event with the given type and source.
///
/// Panics if construction fails; use only with non-blank inputs.
pub fn event_with(event_type: &str, source: &str) -> Event {
    Event::create(
        event_type,
        fixed_timestamp(),
        source,
        &sample_payload(),
        1,
        &sample_metadata(),
    )
    .expect("fixture event must construct")
}

/// Shared, ordered log of rule invocations.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, name: &str) {
        self.0.lock().expect("call log poisoned").push(name.to_string());
    }

    /// Names of invoked rules, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().expect("call log poisoned").clone()
    }
}

/// A rule with a fixed outcome that records each invocation.
#[derive(Debug, Clone)]
pub struct RecordingRule {
    name: String,
    failure: Option<String>,
    log: CallLog,
}

impl RecordingRule {
    /// A rule that always passes.
    pub fn passing(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            failure: None,
            log: log.clone(),
        }
    }

    /// A rule that always fails with `reason`.
    pub fn failing(name: &str, reason: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            failure: Some(reason.to_string()),
            log: log.clone(),
        }
    }
}

impl Rule for RecordingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, _event: &Event) -> Result<(), ValidationError> {
        self.log.record(&self.name);
        match &self.failure {
            Some(reason) => Err(ValidationError::rejected(self.name.clone(), reason.clone())),
            None => Ok(()),
        }
    }
}
