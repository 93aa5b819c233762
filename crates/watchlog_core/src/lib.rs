//! Record stores for a personal anime/manga/book tracker.
//!
//! Three CSV-backed datasets (catalog, seasonal watch-list, reading list)
//! are loaded into typed tables, transformed in memory and rewritten whole.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{CatalogDraft, CatalogEntry, Category, CATALOG_COLUMNS};
pub use model::reading::{ReadingDraft, ReadingItem, ReadingKind, READING_COLUMNS};
pub use model::record::{Record, RecordId, RecordValidationError};
pub use model::seasonal::{SeasonalDraft, SeasonalEntry, SEASONAL_COLUMNS};
pub use repo::csv_repo::{CsvTableRepository, StoreError, StoreResult, TableRepository};
pub use repo::table::{genre_counts, GenreCount, ListFilter, NameMatch, RecordKey, Table};
pub use service::catalog_service::CatalogStore;
pub use service::reading_service::ReadingStore;
pub use service::record_store::RecordStore;
pub use service::seasonal_service::SeasonalStore;
pub use service::tracker::{SeasonalInsert, Tracker};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
