//! # Shelf
//!
//! An identity-keyed record repository with pluggable JSON file persistence.
//!
//! Shelf keeps a homogeneous collection of records entirely in memory while a
//! [`Repository`] is alive, and persists the whole collection as a single JSON
//! document at explicit load/save boundaries. The persistence mechanism sits
//! behind the [`DataContext`] seam, so the CRUD contract is independent of the
//! backing store.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shelf::{JsonFileRepository, models::Consumable};
//!
//! let mut repo = JsonFileRepository::<Consumable>::open("consumables.json")?;
//! repo.add(Consumable::new("HealthPotion", 10, 0, 0));
//! repo.save()?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

// Module declarations
pub mod models;
pub mod observability;
pub mod repository;
pub mod storage;

// Re-exports for convenience
pub use models::{Record, RecordId};
pub use repository::{AutoSave, JsonFileRepository, Repository};
pub use storage::{DataContext, JsonFileContext, LoadOutcome, MemoryContext};

/// Error type for shelf operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// All in-memory CRUD is infallible; these errors arise only at the load/save
/// boundary. An absent store on load is not an error (see
/// [`storage::LoadOutcome::StoreMissing`]) — only a store that exists but
/// cannot be understood, or an I/O failure, is fatal.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The backing store exists but could not be parsed, or a record in it
    /// failed to deserialize.
    ///
    /// Raised when:
    /// - The store file is not valid JSON
    /// - The document lacks the collection field
    /// - An element is missing a required record field
    ///
    /// Deliberately distinct from an absent store: a corrupt store must never
    /// silently produce a partial or empty collection.
    #[error("malformed store '{path}': {cause}")]
    MalformedStore {
        /// Path of the offending store file.
        path: PathBuf,
        /// The underlying parse or mapping failure.
        cause: String,
    },

    /// An I/O operation on the backing store failed.
    ///
    /// Raised when:
    /// - Reading an existing store file fails
    /// - Creating the store's parent directory fails
    /// - Writing the serialized document fails (disk full, permissions)
    #[error("store operation '{operation}' failed for '{path}': {source}")]
    StoreIo {
        /// The operation that failed.
        operation: String,
        /// Path of the store file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for shelf operations.
pub type Result<T> = std::result::Result<T, Error>;
