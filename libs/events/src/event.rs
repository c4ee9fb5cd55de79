//! The event record and its builder.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use eventforge_id::EventId;
use serde::Serialize;

use crate::ConstructionError;

/// Event payload: string keys to arbitrary JSON values.
pub type Payload = BTreeMap<String, serde_json::Value>;

/// Event metadata: string keys to string values.
pub type Metadata = BTreeMap<String, String>;

/// An immutable record of one occurrence.
///
/// Serializes with the field names `id`, `type`, `occurredAt`, `source`,
/// `payload`, `version` and `metadata`. Deserialization goes through
/// [`EventRecord`](crate::EventRecord) so that construction checks always run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,

    #[serde(rename = "type")]
    event_type: String,

    occurred_at: DateTime<Utc>,

    source: String,

    payload: Payload,

    version: i32,

    metadata: Metadata,
}

impl Event {
    /// Creates an event with a freshly generated ID.
    ///
    /// `payload` and `metadata` are copied; later changes to the caller's
    /// maps do not affect the returned event.
    pub fn create(
        event_type: &str,
        occurred_at: DateTime<Utc>,
        source: &str,
        payload: &Payload,
        version: i32,
        metadata: &Metadata,
    ) -> Result<Self, ConstructionError> {
        Self::with_id(
            EventId::new(),
            event_type,
            occurred_at,
            source,
            payload,
            version,
            metadata,
        )
    }

    /// Creates an event with empty metadata.
    pub fn create_without_metadata(
        event_type: &str,
        occurred_at: DateTime<Utc>,
        source: &str,
        payload: &Payload,
        version: i32,
    ) -> Result<Self, ConstructionError> {
        Self::create(
            event_type,
            occurred_at,
            source,
            payload,
            version,
            &Metadata::new(),
        )
    }

    /// Creates a new event builder.
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub(crate) fn with_id(
        id: EventId,
        event_type: &str,
        occurred_at: DateTime<Utc>,
        source: &str,
        payload: &Payload,
        version: i32,
        metadata: &Metadata,
    ) -> Result<Self, ConstructionError> {
        if is_blank(event_type) {
            return Err(ConstructionError::BlankType);
        }
        if is_blank(source) {
            return Err(ConstructionError::BlankSource);
        }
        if version <= 0 {
            return Err(ConstructionError::NonPositiveVersion { version });
        }

        Ok(Self {
            id,
            event_type: event_type.to_owned(),
            occurred_at,
            source: source.to_owned(),
            payload: payload.clone(),
            version,
            metadata: metadata.clone(),
        })
    }

    /// Globally unique identifier assigned at construction.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Taxonomy key, e.g. `order.created`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Identifier of the producer.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Schema version, always positive.
    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up a single metadata value.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Builder for constructing events.
///
/// Unset required fields are reported as
/// [`ConstructionError::MissingField`] by [`EventBuilder::build`].
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event_type: Option<String>,
    occurred_at: Option<DateTime<Utc>>,
    source: Option<String>,
    payload: Option<Payload>,
    version: i32,
    metadata: Metadata,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            event_type: None,
            occurred_at: None,
            source: None,
            payload: None,
            version: 1,
            metadata: Metadata::new(),
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn occurred_at(mut self, ts: DateTime<Utc>) -> Self {
        self.occurred_at = Some(ts);
        self
    }

    /// Sets the timestamp to the current time.
    pub fn occurred_now(self) -> Self {
        self.occurred_at(Utc::now())
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Adds one payload entry, starting an empty payload if none was set.
    pub fn payload_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.payload
            .get_or_insert_with(Payload::new)
            .insert(key.into(), value);
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Builds the event, checking every construction precondition.
    pub fn build(self) -> Result<Event, ConstructionError> {
        let event_type = self
            .event_type
            .ok_or(ConstructionError::MissingField("type"))?;
        let occurred_at = self
            .occurred_at
            .ok_or(ConstructionError::MissingField("occurredAt"))?;
        let source = self.source.ok_or(ConstructionError::MissingField("source"))?;
        let payload = self
            .payload
            .ok_or(ConstructionError::MissingField("payload"))?;

        Event::create(
            &event_type,
            occurred_at,
            &source,
            &payload,
            self.version,
            &self.metadata,
        )
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Payload {
        Payload::from([("orderId".to_string(), json!("ord-42"))])
    }

    #[test]
    fn test_create_sets_fields() {
        let ts = Utc::now();
        let metadata = Metadata::from([("tenant".to_string(), "acme".to_string())]);
        let event =
            Event::create("order.created", ts, "billing.service", &payload(), 3, &metadata)
                .unwrap();

        assert_eq!(event.event_type(), "order.created");
        assert_eq!(event.occurred_at(), ts);
        assert_eq!(event.source(), "billing.service");
        assert_eq!(event.payload().get("orderId"), Some(&json!("ord-42")));
        assert_eq!(event.version(), 3);
        assert_eq!(event.metadata_value("tenant"), Some("acme"));
    }

    #[test]
    fn test_create_without_metadata_defaults_to_empty() {
        let event =
            Event::create_without_metadata("order.created", Utc::now(), "billing", &payload(), 1)
                .unwrap();
        assert!(event.metadata().is_empty());
    }

    #[test]
    fn test_empty_payload_is_allowed() {
        let event = Event::create_without_metadata(
            "order.created",
            Utc::now(),
            "billing",
            &Payload::new(),
            1,
        )
        .unwrap();
        assert!(event.payload().is_empty());
    }

    #[test]
    fn test_blank_type_rejected() {
        let err = Event::create_without_metadata("  \t", Utc::now(), "billing", &payload(), 1)
            .unwrap_err();
        assert_eq!(err, ConstructionError::BlankType);
        assert_eq!(err.field(), "type");
    }

    #[test]
    fn test_non_positive_version_rejected() {
        let err = Event::create_without_metadata("a.b", Utc::now(), "billing", &payload(), 0)
            .unwrap_err();
        assert_eq!(err, ConstructionError::NonPositiveVersion { version: 0 });
        assert_eq!(err.reason_code(), "non_positive_version");
    }

    #[test]
    fn test_ids_differ_per_construction() {
        let a = Event::create_without_metadata("a.b", Utc::now(), "svc.a", &payload(), 1).unwrap();
        let b = Event::create_without_metadata("a.b", Utc::now(), "svc.a", &payload(), 1).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_builder_defaults_version_to_one() {
        let event = Event::builder()
            .event_type("order.created")
            .occurred_now()
            .source("billing.service")
            .payload_entry("total", json!(12))
            .build()
            .unwrap();
        assert_eq!(event.version(), 1);
        assert_eq!(event.payload().get("total"), Some(&json!(12)));
    }

    #[test]
    fn test_builder_missing_payload() {
        let err = Event::builder()
            .event_type("order.created")
            .occurred_now()
            .source("billing.service")
            .build()
            .unwrap_err();
        assert_eq!(err, ConstructionError::MissingField("payload"));
        assert!(err.is_missing());
    }

    #[test]
    fn test_builder_missing_timestamp() {
        let err = Event::builder()
            .event_type("order.created")
            .source("billing.service")
            .payload(payload())
            .build()
            .unwrap_err();
        assert_eq!(err, ConstructionError::MissingField("occurredAt"));
    }

    #[test]
    fn test_serialized_field_names() {
        let event =
            Event::create_without_metadata("order.created", Utc::now(), "billing", &payload(), 2)
                .unwrap();
        let value = serde_json::to_value(&event).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "id",
            "type",
            "occurredAt",
            "source",
            "payload",
            "version",
            "metadata",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["id"], json!(event.id().to_string()));
    }
}
