//! Generic record store: one loaded table plus its persistence boundary.
//!
//! # Invariants
//! - Every mutation validates first; a rejected mutation changes nothing.
//! - Every successful mutation rewrites the whole backing file.
//! - A failed write leaves the in-memory table as it was.
//! - Mutations that match no row do not touch the backing file.

use crate::model::record::{Record, RecordId};
use crate::repo::csv_repo::{StoreError, StoreResult, TableRepository};
use crate::repo::table::{ListFilter, RecordKey, Table};
use log::{info, warn};

/// Loaded dataset and the repository it is persisted through.
#[derive(Debug)]
pub struct RecordStore<R: Record, S: TableRepository<R>> {
    repo: S,
    table: Table<R>,
}

impl<R: Record, S: TableRepository<R>> RecordStore<R, S> {
    /// Loads the table through `repo`. A missing backing file yields an
    /// empty store.
    pub fn load(repo: S) -> StoreResult<Self> {
        let table = repo.load()?;
        Ok(Self { repo, table })
    }

    /// Discards in-memory state and reads the backing file again.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.table = self.repo.load()?;
        Ok(())
    }

    pub fn table(&self) -> &Table<R> {
        &self.table
    }

    pub fn list(&self, filter: &ListFilter) -> Vec<&R> {
        self.table.filter(filter)
    }

    pub fn next_id(&self) -> RecordId {
        self.table.next_id()
    }

    /// Appends `record` as-is and persists.
    pub fn insert(&mut self, record: R) -> StoreResult<RecordId> {
        if let Err(err) = record.validate() {
            warn!(
                "event=record_create module=service status=rejected dataset={} reason={}",
                R::DATASET,
                err
            );
            return Err(err.into());
        }

        let id = record.id();
        let mut staged = self.table.clone();
        staged.append(record);
        self.commit(staged)?;
        info!(
            "event=record_create module=service status=ok dataset={} id={}",
            R::DATASET,
            id
        );
        Ok(id)
    }

    /// Replaces the first row matching `key` and persists.
    ///
    /// Returns `Ok(false)` without writing when no row matches.
    pub fn update(&mut self, key: &RecordKey, record: R) -> StoreResult<bool> {
        self.modify(key, |row| *row = record)
    }

    /// Applies `apply` to a copy of the first row matching `key`, validates
    /// the result, then stores it and persists.
    pub fn modify<F>(&mut self, key: &RecordKey, apply: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut R),
    {
        let Some(mut candidate) = self.table.find(key).cloned() else {
            info!(
                "event=record_update module=service status=not_found dataset={} key={:?}",
                R::DATASET,
                key
            );
            return Ok(false);
        };

        apply(&mut candidate);
        if let Err(err) = candidate.validate() {
            warn!(
                "event=record_update module=service status=rejected dataset={} reason={}",
                R::DATASET,
                err
            );
            return Err(StoreError::from(err));
        }

        let mut staged = self.table.clone();
        staged.update_in_place(key, candidate);
        self.commit(staged)?;
        info!(
            "event=record_update module=service status=ok dataset={} key={:?}",
            R::DATASET,
            key
        );
        Ok(true)
    }

    /// Removes every row matching `key` and persists when anything was removed.
    pub fn delete(&mut self, key: &RecordKey) -> StoreResult<usize> {
        let mut staged = self.table.clone();
        let removed = staged.remove_where(|row| key.matches(row));
        if removed > 0 {
            self.commit(staged)?;
        }
        info!(
            "event=record_delete module=service status=ok dataset={} key={:?} removed={}",
            R::DATASET,
            key,
            removed
        );
        Ok(removed)
    }

    /// Rewrites the backing file from the in-memory table.
    pub fn save(&self) -> StoreResult<()> {
        self.repo.save(&self.table)
    }

    /// Persists `staged` and adopts it only once the write succeeded.
    fn commit(&mut self, staged: Table<R>) -> StoreResult<()> {
        self.repo.save(&staged)?;
        self.table = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::model::catalog::{CatalogDraft, CatalogEntry};
    use crate::model::record::RecordValidationError;
    use crate::repo::csv_repo::{StoreError, StoreResult, TableRepository};
    use crate::repo::table::{RecordKey, Table};
    use std::cell::{Cell, RefCell};
    use std::io;
    use std::path::PathBuf;

    /// Keeps the "persisted" table in memory and counts saves.
    #[derive(Default)]
    struct MemoryRepository {
        stored: RefCell<Table<CatalogEntry>>,
        saves: Cell<usize>,
    }

    impl TableRepository<CatalogEntry> for &MemoryRepository {
        fn load(&self) -> StoreResult<Table<CatalogEntry>> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, table: &Table<CatalogEntry>) -> StoreResult<()> {
            *self.stored.borrow_mut() = table.clone();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    /// Loads its seed rows and fails every write.
    struct ReadOnlyRepository(Vec<CatalogEntry>);

    impl TableRepository<CatalogEntry> for ReadOnlyRepository {
        fn load(&self) -> StoreResult<Table<CatalogEntry>> {
            Ok(Table::from_rows(self.0.clone()))
        }

        fn save(&self, _table: &Table<CatalogEntry>) -> StoreResult<()> {
            Err(StoreError::Io {
                path: PathBuf::from("catalog.csv"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn insert_persists_through_repository() {
        let repo = MemoryRepository::default();
        let mut store = RecordStore::load(&repo).unwrap();

        let id = store.insert(CatalogDraft::new("Monster").into_entry(1)).unwrap();

        assert_eq!(id, 1);
        assert_eq!(repo.saves.get(), 1);
        assert_eq!(repo.stored.borrow().len(), 1);
    }

    #[test]
    fn rejected_insert_leaves_table_and_repository_untouched() {
        let repo = MemoryRepository::default();
        let mut store = RecordStore::load(&repo).unwrap();

        let err = store.insert(CatalogDraft::new("  ").into_entry(1)).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Validation(RecordValidationError::EmptyName)
        ));
        assert!(store.table().is_empty());
        assert_eq!(repo.saves.get(), 0);
    }

    #[test]
    fn unmatched_update_and_delete_do_not_save() {
        let repo = MemoryRepository::default();
        let mut store = RecordStore::load(&repo).unwrap();

        let updated = store
            .update(&RecordKey::name("Nope"), CatalogDraft::new("X").into_entry(1))
            .unwrap();
        let removed = store.delete(&RecordKey::name("Nope")).unwrap();

        assert!(!updated);
        assert_eq!(removed, 0);
        assert_eq!(repo.saves.get(), 0);
    }

    #[test]
    fn modify_rejects_invalid_result() {
        let repo = MemoryRepository::default();
        let mut store = RecordStore::load(&repo).unwrap();
        store.insert(CatalogDraft::new("Monster").into_entry(1)).unwrap();

        let err = store
            .modify(&RecordKey::Id(1), |row| row.name.clear())
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.table().rows()[0].name, "Monster");
    }

    #[test]
    fn failed_write_keeps_table_in_step_with_file() {
        let mut store = RecordStore::load(ReadOnlyRepository(Vec::new())).unwrap();

        let err = store
            .insert(CatalogDraft::new("Monster").into_entry(1))
            .unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(store.table().is_empty());
    }

    #[test]
    fn failed_write_rolls_back_update_and_delete() {
        let seed = vec![CatalogDraft::new("Monster").into_entry(1)];
        let mut store = RecordStore::load(ReadOnlyRepository(seed)).unwrap();

        let updated = store.update(&RecordKey::Id(1), CatalogDraft::new("Pluto").into_entry(1));
        let removed = store.delete(&RecordKey::Id(1));

        assert!(matches!(updated, Err(StoreError::Io { .. })));
        assert!(matches!(removed, Err(StoreError::Io { .. })));
        assert_eq!(store.table().rows()[0].name, "Monster");
        assert_eq!(store.table().len(), 1);
    }
}
