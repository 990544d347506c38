//! Generic utility primitives with zero domain knowledge.
//!
//! - `template` - String template rendering

pub mod template;
