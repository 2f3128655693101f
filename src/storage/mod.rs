//! Storage layer abstraction.
//!
//! This module separates the repository's CRUD contract from the persistence
//! mechanism:
//! - **Traits**: the [`DataContext`] seam a backend must implement
//! - **Persistence**: provided backends (JSON file, volatile in-memory)

pub mod persistence;
pub mod traits;

pub use persistence::{JsonFileContext, MemoryContext};
pub use traits::{DataContext, LoadOutcome};
