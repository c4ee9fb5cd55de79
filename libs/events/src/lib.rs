//! # eventforge-events
//!
//! The immutable event record accepted by eventforge.
//!
//! ## Design Principles
//!
//! - Events are immutable: fields are private and exposed through accessors only
//! - Every event gets a fresh, system-generated [`EventId`]
//! - Construction enforces structural integrity (no blank type or source,
//!   positive version); format rules live in `eventforge-validation`
//! - Payload and metadata are copied at construction, so the caller's maps
//!   never alias the stored event
//!
//! ## Constructing Events
//!
//! - [`Event::create`] / [`Event::create_without_metadata`] for direct construction
//! - [`Event::builder`] when fields are assembled incrementally
//! - [`EventRecord`] + `Event::try_from` when reconstructing from an external
//!   representation (re-runs every construction check)

mod error;
mod event;
mod record;

pub use error::ConstructionError;
pub use event::*;
pub use record::EventRecord;

pub use eventforge_id::EventId;
