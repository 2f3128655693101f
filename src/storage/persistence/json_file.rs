//! JSON-file-backed data context.
//!
//! Stores the whole collection as one JSON document with a single
//! `"dataContext"` array field:
//!
//! ```json
//! { "dataContext": [
//!     {"id": "HealthPotion", "healthGain": 10, "manaGain": 0, "staminaGain": 0}
//! ] }
//! ```
//!
//! Load and save are whole-document operations. An absent file on load is the
//! first-run case and yields an empty collection; a present-but-unparsable
//! file is fatal for the load, so corruption is never mistaken for emptiness.

use crate::models::Record;
use crate::storage::traits::{DataContext, LoadOutcome};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk document format: one object with one array field.
#[derive(Debug, Deserialize)]
struct StoredCollection<R> {
    #[serde(rename = "dataContext")]
    data_context: Vec<R>,
}

/// Borrowing view of [`StoredCollection`] for serialization.
#[derive(Debug, Serialize)]
struct StoredCollectionRef<'a, R> {
    #[serde(rename = "dataContext")]
    data_context: &'a [R],
}

/// Data context persisting to a single JSON file.
#[derive(Debug)]
pub struct JsonFileContext<R> {
    /// Path of the backing file.
    path: PathBuf,
    /// The live collection.
    records: Vec<R>,
}

impl<R: Record> JsonFileContext<R> {
    /// Creates a new context for the given file path.
    ///
    /// Nothing is read until [`DataContext::load`] is called; the file may
    /// not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, operation: &str, source: std::io::Error) -> Error {
        Error::StoreIo {
            operation: operation.to_string(),
            path: self.path.clone(),
            source,
        }
    }
}

impl<R: Record + Send> DataContext<R> for JsonFileContext<R> {
    fn load(&mut self) -> Result<LoadOutcome> {
        self.records.clear();

        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
            return Ok(LoadOutcome::StoreMissing);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| self.io_error("read_store", e))?;

        let document: StoredCollection<R> =
            serde_json::from_str(&raw).map_err(|e| Error::MalformedStore {
                path: self.path.clone(),
                cause: e.to_string(),
            })?;

        self.records = document.data_context;
        tracing::debug!(
            path = %self.path.display(),
            count = self.records.len(),
            "loaded store"
        );
        Ok(LoadOutcome::Loaded(self.records.len()))
    }

    fn save(&mut self) -> Result<()> {
        // Missing parent directory is create-or-fail, not log-and-hope.
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error("create_store_dir", e))?;
        }

        let document = StoredCollectionRef {
            data_context: &self.records,
        };
        let json = serde_json::to_string_pretty(&document).map_err(|e| Error::MalformedStore {
            path: self.path.clone(),
            cause: e.to_string(),
        })?;

        fs::write(&self.path, json).map_err(|e| self.io_error("write_store", e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = self.records.len(),
            "saved store"
        );
        Ok(())
    }

    fn records(&self) -> &[R] {
        &self.records
    }

    fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }
}
