//! Plain record form of an event, for transport and persistence layers.

use chrono::{DateTime, Utc};
use eventforge_id::EventId;
use serde::{Deserialize, Serialize};

use crate::{ConstructionError, Event, Metadata, Payload};

/// Unchecked, field-by-field representation of an event.
///
/// Absent fields deserialize as `None`, except `metadata`, which defaults to
/// an empty map when absent and is `None` only for an explicit `null`.
/// Converting into an [`Event`] re-runs every construction check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Existing event ID; a fresh one is generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub payload: Option<Payload>,

    #[serde(default)]
    pub version: Option<i32>,

    #[serde(default = "empty_metadata")]
    pub metadata: Option<Metadata>,
}

fn empty_metadata() -> Option<Metadata> {
    Some(Metadata::new())
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id().to_string()),
            event_type: Some(event.event_type().to_owned()),
            occurred_at: Some(event.occurred_at()),
            source: Some(event.source().to_owned()),
            payload: Some(event.payload().clone()),
            version: Some(event.version()),
            metadata: Some(event.metadata().clone()),
        }
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = ConstructionError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let id = match record.id.as_deref() {
            Some(raw) => EventId::parse(raw)?,
            None => EventId::new(),
        };
        let event_type = record
            .event_type
            .ok_or(ConstructionError::MissingField("type"))?;
        let occurred_at = record
            .occurred_at
            .ok_or(ConstructionError::MissingField("occurredAt"))?;
        let source = record
            .source
            .ok_or(ConstructionError::MissingField("source"))?;
        let payload = record
            .payload
            .ok_or(ConstructionError::MissingField("payload"))?;
        let version = record
            .version
            .ok_or(ConstructionError::MissingField("version"))?;
        let metadata = record
            .metadata
            .ok_or(ConstructionError::MissingField("metadata"))?;

        Event::with_id(
            id,
            &event_type,
            occurred_at,
            &source,
            &payload,
            version,
            &metadata,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<Event, ConstructionError> {
        let record: EventRecord = serde_json::from_value(value).unwrap();
        Event::try_from(record)
    }

    #[test]
    fn test_record_without_id_gets_fresh_id() {
        let event = parse(json!({
            "type": "order.created",
            "occurredAt": "2024-05-01T12:00:00Z",
            "source": "billing.service",
            "payload": {"orderId": 7},
            "version": 1
        }))
        .unwrap();

        assert_eq!(event.event_type(), "order.created");
        assert!(event.metadata().is_empty());
    }

    #[test]
    fn test_record_roundtrip_preserves_id() {
        let original = Event::builder()
            .event_type("order.shipped")
            .occurred_now()
            .source("fulfilment:eu")
            .payload_entry("carrier", json!("dhl"))
            .metadata_entry("trace", "abc")
            .version(4)
            .build()
            .unwrap();

        let json = serde_json::to_string(&EventRecord::from(&original)).unwrap();
        let record: EventRecord = serde_json::from_str(&json).unwrap();
        let restored = Event::try_from(record).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_null_payload_rejected() {
        let err = parse(json!({
            "type": "order.created",
            "occurredAt": "2024-05-01T12:00:00Z",
            "source": "billing.service",
            "payload": null,
            "version": 1
        }))
        .unwrap_err();
        assert_eq!(err, ConstructionError::MissingField("payload"));
    }

    #[test]
    fn test_null_metadata_rejected() {
        let err = parse(json!({
            "type": "order.created",
            "occurredAt": "2024-05-01T12:00:00Z",
            "source": "billing.service",
            "payload": {},
            "version": 1,
            "metadata": null
        }))
        .unwrap_err();
        assert_eq!(err, ConstructionError::MissingField("metadata"));
    }

    #[test]
    fn test_missing_version_rejected() {
        let err = parse(json!({
            "type": "order.created",
            "occurredAt": "2024-05-01T12:00:00Z",
            "source": "billing.service",
            "payload": {}
        }))
        .unwrap_err();
        assert_eq!(err, ConstructionError::MissingField("version"));
    }

    #[test]
    fn test_malformed_id_rejected() {
        let err = parse(json!({
            "id": "ord_123",
            "type": "order.created",
            "occurredAt": "2024-05-01T12:00:00Z",
            "source": "billing.service",
            "payload": {},
            "version": 1
        }))
        .unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidId(_)));
        assert_eq!(err.field(), "id");
    }
}
