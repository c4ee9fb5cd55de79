//! Built-in rules.

mod event_type;
mod source;

pub use event_type::TypeRule;
pub use source::SourceRule;
