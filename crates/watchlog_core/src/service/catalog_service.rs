//! Catalog use-cases.

use crate::model::catalog::{CatalogDraft, CatalogEntry};
use crate::model::record::RecordId;
use crate::repo::csv_repo::{CsvTableRepository, StoreResult, TableRepository};
use crate::repo::table::RecordKey;
use crate::service::record_store::RecordStore;

/// Catalog store persisted through `S` (CSV by default).
pub type CatalogStore<S = CsvTableRepository<CatalogEntry>> = RecordStore<CatalogEntry, S>;

impl<S: TableRepository<CatalogEntry>> RecordStore<CatalogEntry, S> {
    /// Creates a catalog row from form input and returns its `List` id.
    ///
    /// # Contract
    /// - Uses `draft.list_id` when given, otherwise `next_id()`.
    /// - Does not reject duplicate ids or names.
    pub fn create(&mut self, draft: CatalogDraft) -> StoreResult<RecordId> {
        let fallback_id = self.next_id();
        self.insert(draft.into_entry(fallback_id))
    }

    /// Replaces every field of the first row named exactly `name`.
    pub fn edit_by_name(&mut self, name: &str, entry: CatalogEntry) -> StoreResult<bool> {
        self.update(&RecordKey::name(name), entry)
    }
}
