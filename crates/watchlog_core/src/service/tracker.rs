//! Tracker: the store object handed to the presentation layer.
//!
//! # Responsibility
//! - Open the catalog, seasonal and reading stores from one `TrackerConfig`.
//! - Expose per-dataset use-cases under one handle.
//! - Keep the catalog in step with seasonal inserts.
//!
//! # Invariants
//! - A seasonal insert whose name is not catalogued (case-insensitive)
//!   creates the catalog row first; otherwise only the seasonal table grows.
//! - A rejected draft writes neither file.

use crate::config::TrackerConfig;
use crate::model::catalog::{CatalogDraft, CatalogEntry};
use crate::model::reading::{ReadingDraft, ReadingItem};
use crate::model::record::RecordId;
use crate::model::seasonal::SeasonalDraft;
use crate::repo::csv_repo::{CsvTableRepository, StoreResult};
use crate::repo::table::{NameMatch, RecordKey};
use crate::service::catalog_service::CatalogStore;
use crate::service::reading_service::ReadingStore;
use crate::service::seasonal_service::SeasonalStore;
use log::{info, warn};

/// Outcome of `Tracker::add_to_season`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalInsert {
    /// `List` id written on the seasonal row.
    pub list_id: RecordId,
    /// Whether a catalog row was created for this name.
    pub catalog_created: bool,
}

/// All three datasets, loaded for one interaction cycle.
#[derive(Debug)]
pub struct Tracker {
    config: TrackerConfig,
    catalog: CatalogStore,
    seasonal: SeasonalStore,
    reading: ReadingStore,
}

impl Tracker {
    /// Loads every dataset named by `config`.
    pub fn open(config: TrackerConfig) -> StoreResult<Self> {
        let catalog = CatalogStore::load(CsvTableRepository::new(&config.catalog_path))?;
        let seasonal = SeasonalStore::load(CsvTableRepository::new(&config.seasonal_path))?;
        let reading = ReadingStore::load(CsvTableRepository::new(&config.reading_path))?;
        info!(
            "event=tracker_open module=service status=ok catalog_rows={} seasonal_rows={} reading_rows={}",
            catalog.table().len(),
            seasonal.table().len(),
            reading.table().len()
        );

        Ok(Self {
            config,
            catalog,
            seasonal,
            reading,
        })
    }

    /// Re-reads all three backing files.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.catalog.reload()?;
        self.seasonal.reload()?;
        self.reading.reload()?;
        Ok(())
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn seasonal(&self) -> &SeasonalStore {
        &self.seasonal
    }

    pub fn reading(&self) -> &ReadingStore {
        &self.reading
    }

    pub fn add_catalog_entry(&mut self, draft: CatalogDraft) -> StoreResult<RecordId> {
        self.catalog.create(draft)
    }

    /// Replaces the first catalog row named exactly `name`; `Ok(false)` when
    /// there is none.
    pub fn edit_catalog_entry(&mut self, name: &str, entry: CatalogEntry) -> StoreResult<bool> {
        self.catalog.edit_by_name(name, entry)
    }

    /// Removes every catalog row named exactly `name`.
    pub fn remove_catalog_entry(&mut self, name: &str) -> StoreResult<usize> {
        self.catalog.delete(&RecordKey::name(name))
    }

    /// Adds a seasonal row, cataloguing the name first when it is new.
    ///
    /// # Contract
    /// - The catalog lookup trims and lowercases the draft name.
    /// - The seasonal row always gets the catalog's `next_id()` taken before
    ///   the insert; a new catalog row shares it, a matched one keeps its own.
    /// - Duplicate seasonal rows for the same name are allowed.
    pub fn add_to_season(&mut self, draft: SeasonalDraft) -> StoreResult<SeasonalInsert> {
        if let Err(err) = draft.validate() {
            warn!(
                "event=season_add module=service status=rejected reason={}",
                err
            );
            return Err(err.into());
        }

        let list_id = self.catalog.next_id();
        let catalog_created = self
            .catalog
            .table()
            .find_by_name(&draft.name, NameMatch::IgnoreCase)
            .is_none();
        if catalog_created {
            self.catalog.insert(draft.catalog_entry(list_id))?;
        }

        self.seasonal.insert(draft.into_entry(list_id))?;
        info!(
            "event=season_add module=service status=ok list_id={} catalog_created={}",
            list_id, catalog_created
        );
        Ok(SeasonalInsert {
            list_id,
            catalog_created,
        })
    }

    /// Updates watch progress of the first seasonal row named exactly `name`.
    pub fn set_watched(&mut self, name: &str, watched: u32) -> StoreResult<bool> {
        self.seasonal.set_watched(name, watched)
    }

    /// Removes every seasonal row named exactly `name`. The catalog is kept.
    pub fn remove_from_season(&mut self, name: &str) -> StoreResult<usize> {
        self.seasonal.delete(&RecordKey::name(name))
    }

    pub fn add_reading_item(&mut self, draft: ReadingDraft) -> StoreResult<RecordId> {
        self.reading.create(draft)
    }

    /// Replaces the first reading item with `ID == id`.
    pub fn edit_reading_item(&mut self, id: RecordId, item: ReadingItem) -> StoreResult<bool> {
        self.reading.update(&RecordKey::Id(id), item)
    }

    /// Removes every reading item named exactly `name`.
    pub fn remove_reading_item(&mut self, name: &str) -> StoreResult<usize> {
        self.reading.delete(&RecordKey::name(name))
    }
}
