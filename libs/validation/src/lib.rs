//! # eventforge-validation
//!
//! Structural validation of [`Event`]s before they are accepted downstream.
//!
//! ## Design Principles
//!
//! - A [`Rule`] is a stateless check: `validate(&Event) -> Result<(), ValidationError>`
//! - A [`Pipeline`] runs its rules in registration order and stops at the
//!   first failure, so each call reports exactly one reason
//! - Rules and pipelines hold only fixed configuration and are `Send + Sync`
//!
//! ## Provided Rules
//!
//! - [`SourceRule`]: the source is a namespaced identifier of bounded length
//! - [`TypeRule`]: the type follows `<domain>.<action>`
//!
//! ## Example
//!
//! ```ignore
//! let pipeline = Pipeline::standard();
//! pipeline.validate(&event)?;
//! ```

mod config;
mod error;
mod pipeline;
mod rule;
mod rules;

pub use config::{
    ConfigError, SourcePolicy, ValidationConfig, ENV_SOURCE_MAX_LEN, ENV_SOURCE_MIN_LEN,
    ENV_SOURCE_SEPARATORS,
};
pub use error::ValidationError;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use rule::{from_fn, FnRule, Rule};
pub use rules::{SourceRule, TypeRule};

pub use eventforge_events::Event;
