//! Volatile in-memory data context.
//!
//! A backend with no durable store, for tests and for callers that want the
//! repository semantics without persistence. Load reports the store as
//! missing on an unseeded context; save keeps the collection as the only
//! copy.

use crate::Result;
use crate::models::Record;
use crate::storage::traits::{DataContext, LoadOutcome};

/// Data context holding its collection only in memory.
#[derive(Debug)]
pub struct MemoryContext<R> {
    records: Vec<R>,
    seeded: bool,
}

impl<R> Default for MemoryContext<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            seeded: false,
        }
    }
}

impl<R: Record> MemoryContext<R> {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context pre-populated with records, as if a store existed.
    #[must_use]
    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            records,
            seeded: true,
        }
    }
}

impl<R: Record + Send> DataContext<R> for MemoryContext<R> {
    fn load(&mut self) -> Result<LoadOutcome> {
        if self.seeded {
            Ok(LoadOutcome::Loaded(self.records.len()))
        } else {
            Ok(LoadOutcome::StoreMissing)
        }
    }

    fn save(&mut self) -> Result<()> {
        // The live collection is the store.
        self.seeded = true;
        Ok(())
    }

    fn records(&self) -> &[R] {
        &self.records
    }

    fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }
}
