//! Event identifier.

use uuid::Uuid;

use crate::IdError;

/// Globally unique event identifier, formatted as `evt_{uuid}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(Uuid);

impl EventId {
    /// The prefix for event IDs.
    pub const PREFIX: &'static str = "evt";

    /// Creates a new ID with a fresh random UUID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }

    /// Parses an ID from a string.
    ///
    /// The string must be in the format `evt_{uuid}` with the UUID in
    /// lowercase hyphenated form.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some((prefix, uuid_str)) = s.split_once('_') else {
            return Err(IdError::MissingSeparator);
        };

        if prefix != Self::PREFIX {
            return Err(IdError::InvalidPrefix {
                expected: Self::PREFIX,
                actual: prefix.to_string(),
            });
        }

        let uuid = Uuid::parse_str(uuid_str).map_err(|e| IdError::InvalidUuid(e.to_string()))?;

        if uuid.hyphenated().to_string() != uuid_str {
            return Err(IdError::InvalidUuid(format!(
                "non-canonical form '{}'",
                uuid_str
            )));
        }

        if uuid.is_nil() {
            return Err(IdError::Nil);
        }

        Ok(Self(uuid))
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0.hyphenated())
    }
}

impl std::str::FromStr for EventId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<Uuid> for EventId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
