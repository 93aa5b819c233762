//! Seasonal watch-list use-cases that touch only the seasonal table.
//!
//! Inserts go through `Tracker::add_to_season`, which also maintains the
//! catalog.

use crate::model::seasonal::SeasonalEntry;
use crate::repo::csv_repo::{CsvTableRepository, StoreResult, TableRepository};
use crate::repo::table::RecordKey;
use crate::service::record_store::RecordStore;

/// Seasonal store persisted through `S` (CSV by default).
pub type SeasonalStore<S = CsvTableRepository<SeasonalEntry>> = RecordStore<SeasonalEntry, S>;

impl<S: TableRepository<SeasonalEntry>> RecordStore<SeasonalEntry, S> {
    /// Sets the watched-episode count of the first row named exactly `name`.
    ///
    /// The count is stored as given, even past the season's total.
    pub fn set_watched(&mut self, name: &str, watched: u32) -> StoreResult<bool> {
        self.modify(&RecordKey::name(name), |entry| {
            entry.watched_episodes = watched;
        })
    }
}
