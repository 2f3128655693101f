//! Identity-keyed CRUD over a data context.
//!
//! A [`Repository`] wraps a [`DataContext`], eagerly loads the collection on
//! construction, serves all CRUD from memory, and writes the whole collection
//! back on an explicit [`Repository::save`]. It is the repository, not the
//! storage layer, that enforces the one-record-per-id invariant.

use crate::Result;
use crate::models::Record;
use crate::storage::persistence::JsonFileContext;
use crate::storage::traits::{DataContext, LoadOutcome};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

/// CRUD façade over a generic data context.
///
/// Add and update share upsert semantics: any record already present under
/// the incoming id is removed and the new record is appended at the tail.
/// "Add" always means "now present with this id, at tail position" — the
/// reordering on replace is intentional, not incidental.
#[derive(Debug)]
pub struct Repository<R, C> {
    context: C,
    _record: PhantomData<R>,
}

impl<R: Record, C: DataContext<R>> Repository<R, C> {
    /// Constructs a repository and eagerly loads the collection.
    ///
    /// A missing backing store is the first-run case and yields an empty
    /// repository. A store that exists but cannot be parsed, or that cannot
    /// be read, fails construction.
    pub fn new(mut context: C) -> Result<Self> {
        match context.load()? {
            LoadOutcome::Loaded(count) => {
                tracing::debug!(count, "repository loaded");
            },
            LoadOutcome::StoreMissing => {
                tracing::debug!("no backing store yet, repository starts empty");
            },
        }
        Ok(Self {
            context,
            _record: PhantomData,
        })
    }

    /// Returns the record with the given id, if present.
    ///
    /// Linear scan; the uniqueness invariant guarantees at most one match.
    pub fn get_by_id(&self, id: &str) -> Option<&R> {
        self.context.records().iter().find(|r| *r.id() == *id)
    }

    /// Inserts the record, replacing any existing record with the same id.
    ///
    /// On replace the record moves to the tail of the collection. Afterwards
    /// `get_by_id(record.id())` returns exactly this record.
    pub fn add(&mut self, record: R) {
        if self.remove_by_id(record.id().as_str()) {
            tracing::debug!(id = %record.id(), "replacing record already in collection");
        }
        self.context.records_mut().push(record);
    }

    /// Replaces the whole record under its id; same semantics as [`Self::add`].
    ///
    /// There is no partial-field merge. The two names exist for interface
    /// clarity, not for divergent behavior.
    pub fn update(&mut self, record: R) {
        self.add(record);
    }

    /// Removes the record matching the given record's id.
    ///
    /// Returns whether anything was removed; an absent id is a no-op.
    pub fn remove(&mut self, record: &R) -> bool {
        self.remove_by_id(record.id().as_str())
    }

    /// Removes the record with the given id, if present.
    ///
    /// Removal shrinks the collection; the id is absent from all subsequent
    /// [`Self::get_by_id`] calls until re-added.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let records = self.context.records_mut();
        let before = records.len();
        records.retain(|r| *r.id() != *id);
        records.len() < before
    }

    /// Returns the number of records currently in memory.
    pub fn count(&self) -> usize {
        self.context.count()
    }

    /// Returns `true` if the repository holds no records.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns a read-only snapshot of the collection, in order.
    ///
    /// Callers cannot mutate through this view, so the uniqueness invariant
    /// cannot be bypassed.
    pub fn records(&self) -> &[R] {
        self.context.records()
    }

    /// Iterates over the collection in order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records().iter()
    }

    /// Writes the entire collection to the backing store.
    ///
    /// Persistence is explicit: nothing is written until this is called (or
    /// an [`Self::autosave`] guard is dropped).
    pub fn save(&mut self) -> Result<()> {
        self.context.save()
    }

    /// Returns a guard that saves the repository when dropped.
    ///
    /// The guard derefs to the repository, so CRUD goes through it
    /// unchanged. A save failure in the drop path can only be logged; call
    /// [`Self::save`] directly where the caller must observe the error.
    pub fn autosave(&mut self) -> AutoSave<'_, R, C> {
        AutoSave { repository: self }
    }
}

impl<'a, R: Record, C: DataContext<R>> IntoIterator for &'a Repository<R, C> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scoped guard that saves its repository on drop, on all exit paths.
pub struct AutoSave<'a, R: Record, C: DataContext<R>> {
    repository: &'a mut Repository<R, C>,
}

impl<R: Record, C: DataContext<R>> Deref for AutoSave<'_, R, C> {
    type Target = Repository<R, C>;

    fn deref(&self) -> &Self::Target {
        self.repository
    }
}

impl<R: Record, C: DataContext<R>> DerefMut for AutoSave<'_, R, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.repository
    }
}

impl<R: Record, C: DataContext<R>> Drop for AutoSave<'_, R, C> {
    fn drop(&mut self) {
        if let Err(e) = self.repository.save() {
            tracing::error!(error = %e, "autosave failed on drop");
        }
    }
}

/// Repository backed by a single JSON file.
pub type JsonFileRepository<R> = Repository<R, JsonFileContext<R>>;

impl<R: Record + Send> JsonFileRepository<R> {
    /// Opens (and eagerly loads) a repository stored at the given file path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::new(JsonFileContext::new(path))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::Consumable;
    use crate::storage::persistence::MemoryContext;

    fn repo_with(records: Vec<Consumable>) -> Repository<Consumable, MemoryContext<Consumable>> {
        Repository::new(MemoryContext::seeded(records)).unwrap()
    }

    fn empty_repo() -> Repository<Consumable, MemoryContext<Consumable>> {
        Repository::new(MemoryContext::new()).unwrap()
    }

    #[test]
    fn test_add_new_increments_count() {
        let mut repo = empty_repo();
        repo.add(Consumable::new("HealthPotion", 10, 0, 0));
        assert_eq!(repo.count(), 1);
        repo.add(Consumable::new("ManaPotion", 0, 10, 0));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_add_existing_replaces_record() {
        let mut repo = repo_with(vec![
            Consumable::new("HealthPotion", 10, 0, 0),
            Consumable::new("ManaPotion", 0, 10, 0),
        ]);

        repo.add(Consumable::new("HealthPotion", 25, 0, 0));

        assert_eq!(repo.count(), 2);
        let potion = repo.get_by_id("HealthPotion").unwrap();
        assert_eq!(potion.health_gain, 25);
    }

    #[test]
    fn test_add_existing_moves_record_to_tail() {
        let mut repo = repo_with(vec![
            Consumable::new("HealthPotion", 10, 0, 0),
            Consumable::new("ManaPotion", 0, 10, 0),
        ]);

        repo.add(Consumable::new("HealthPotion", 25, 0, 0));

        let ids: Vec<&str> = repo.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["ManaPotion", "HealthPotion"]);
    }

    #[test]
    fn test_update_is_upsert() {
        let mut repo = empty_repo();
        repo.update(Consumable::new("Bread", 2, 0, 1));
        assert_eq!(repo.count(), 1);

        repo.update(Consumable::new("Bread", 3, 0, 1));
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.get_by_id("Bread").unwrap().health_gain, 3);
    }

    #[test]
    fn test_get_by_id_absent_is_none() {
        let repo = empty_repo();
        assert!(repo.get_by_id("Nothing").is_none());
    }

    #[test]
    fn test_remove_shrinks_collection() {
        let potion = Consumable::new("HealthPotion", 10, 0, 0);
        let mut repo = repo_with(vec![potion.clone()]);

        assert!(repo.remove(&potion));
        assert_eq!(repo.count(), 0);
        assert!(repo.get_by_id("HealthPotion").is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let potion = Consumable::new("HealthPotion", 10, 0, 0);
        let mut repo = repo_with(vec![potion.clone()]);

        assert!(repo.remove(&potion));
        assert!(!repo.remove(&potion));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_remove_matches_by_id_only() {
        let mut repo = repo_with(vec![Consumable::new("HealthPotion", 10, 0, 0)]);

        // Same id, different payload: identity is the id alone.
        let other = Consumable::new("HealthPotion", 999, 9, 9);
        assert!(repo.remove(&other));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_records_is_ordered_snapshot() {
        let mut repo = empty_repo();
        repo.add(Consumable::new("A", 1, 0, 0));
        repo.add(Consumable::new("B", 2, 0, 0));
        repo.add(Consumable::new("C", 3, 0, 0));

        let ids: Vec<&str> = repo.records().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_into_iterator() {
        let mut repo = empty_repo();
        repo.add(Consumable::new("A", 1, 0, 0));
        repo.add(Consumable::new("B", 0, 2, 0));

        let total: i32 = (&repo).into_iter().map(|c| c.health_gain + c.mana_gain).sum();
        assert_eq!(total, 3);
    }
}
