//! Storage trait definitions.

mod context;

pub use context::{DataContext, LoadOutcome};
