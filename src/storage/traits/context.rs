//! Data context trait.

use crate::Result;
use crate::models::Record;

/// Outcome of a [`DataContext::load`] call.
///
/// An absent backing store is a first-run condition, not a failure, so it is
/// reported here rather than through the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store existed and this many records were loaded.
    Loaded(usize),
    /// No backing store exists yet; the collection starts empty.
    StoreMissing,
}

/// Trait for data context backends.
///
/// A data context owns the in-memory collection for one record type and the
/// act of moving it to and from durable storage. All CRUD happens against the
/// live collection; persistence is a whole-collection replace at the load and
/// save boundaries, with no merge or incremental write.
pub trait DataContext<R: Record>: Send {
    /// Replaces the in-memory collection from the backing store.
    ///
    /// If the store does not exist, the collection is left empty and
    /// [`LoadOutcome::StoreMissing`] is returned. A store that exists but
    /// cannot be parsed is an error, never an empty collection.
    fn load(&mut self) -> Result<LoadOutcome>;

    /// Writes the entire current collection to the backing store, fully
    /// overwriting prior contents.
    fn save(&mut self) -> Result<()>;

    /// Returns the live collection.
    fn records(&self) -> &[R];

    /// Returns the live collection for mutation.
    ///
    /// Only [`crate::Repository`] should reach for this; it is the repository
    /// that enforces the one-record-per-id invariant, not the storage layer.
    fn records_mut(&mut self) -> &mut Vec<R>;

    /// Returns the number of records currently in memory.
    fn count(&self) -> usize {
        self.records().len()
    }
}
