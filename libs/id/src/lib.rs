//! # eventforge-id
//!
//! Typed identifiers for eventforge records.
//!
//! ## Design Principles
//!
//! - IDs are system-generated at construction time, never caller-chosen
//! - All IDs have a canonical string representation with strict parsing
//! - IDs are typed to prevent mixing different record kinds
//!
//! ## ID Format
//!
//! IDs use a prefixed format: `{prefix}_{uuid}`, where the UUID is a random
//! (v4) UUID in its lowercase hyphenated form.
//!
//! Example: `evt_3f2b8c1e-9a4d-4e57-b0c6-2d7e1f9a8b30`

mod error;
mod types;

pub use error::IdError;
pub use types::*;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
