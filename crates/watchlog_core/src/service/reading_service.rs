//! Reading-list use-cases.

use crate::model::reading::{ReadingDraft, ReadingItem};
use crate::model::record::RecordId;
use crate::repo::csv_repo::{CsvTableRepository, StoreResult, TableRepository};
use crate::service::record_store::RecordStore;

/// Reading store persisted through `S` (CSV by default).
pub type ReadingStore<S = CsvTableRepository<ReadingItem>> = RecordStore<ReadingItem, S>;

impl<S: TableRepository<ReadingItem>> RecordStore<ReadingItem, S> {
    /// Creates a reading item with the next free `ID`, filling blank
    /// genre/description/progress with their defaults.
    pub fn create(&mut self, draft: ReadingDraft) -> StoreResult<RecordId> {
        let id = self.next_id();
        self.insert(draft.into_item(id))
    }
}
