//! Seasonal watch-list dataset.
//!
//! A seasonal row repeats the catalog columns and adds per-season progress.
//! Rows are flat: serde flattening is not supported by the CSV reader.
//!
//! # Invariants
//! - `total_episodes >= 1`.
//! - `watched_episodes` is not bounded by `total_episodes`.

use crate::model::catalog::{CatalogEntry, Category};
use crate::model::record::{
    lenient_int, or_default, require_id, require_name, Record, RecordId, RecordValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header row of the seasonal file: catalog columns plus progress columns.
pub const SEASONAL_COLUMNS: &[&str] = &[
    "List",
    "Name",
    "Note",
    "Categoria",
    "Genero",
    "Descrição",
    "Temporada",
    "Episodios",
    "Assistido",
    "Atualizado",
];

pub const DEFAULT_SEASON_NOTE: &str = "6.0";
pub const DEFAULT_SEASON_GENRE: &str = "Desconhecido";
pub const DEFAULT_SEASON_DESCRIPTION: &str = "anime novo";
pub const DEFAULT_SEASON_LABEL: &str = "Não especificado";

/// One row of the seasonal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalEntry {
    #[serde(rename = "List", deserialize_with = "lenient_int")]
    pub list_id: RecordId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Note")]
    pub note: String,
    #[serde(rename = "Categoria")]
    pub category: Category,
    #[serde(rename = "Genero")]
    pub genre: String,
    #[serde(rename = "Descrição")]
    pub description: String,
    /// Free-form season label, e.g. `Verão 2025`.
    #[serde(rename = "Temporada")]
    pub season: String,
    #[serde(rename = "Episodios", deserialize_with = "lenient_int")]
    pub total_episodes: u32,
    #[serde(rename = "Assistido", deserialize_with = "lenient_int")]
    pub watched_episodes: u32,
    #[serde(rename = "Atualizado")]
    pub updated: NaiveDate,
}

impl Record for SeasonalEntry {
    const DATASET: &'static str = "seasonal";
    const COLUMNS: &'static [&'static str] = SEASONAL_COLUMNS;

    fn id(&self) -> RecordId {
        self.list_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.list_id)?;
        require_name(&self.name)?;
        if self.total_episodes == 0 {
            return Err(RecordValidationError::NoEpisodes);
        }
        Ok(())
    }
}

/// User-entered fields for the seasonal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalDraft {
    pub name: String,
    pub note: String,
    pub category: Category,
    pub genre: String,
    pub season: String,
    pub total_episodes: u32,
    pub watched_episodes: u32,
    pub updated: NaiveDate,
}

impl SeasonalDraft {
    /// Starts a draft with the form defaults: 12 episodes, none watched.
    pub fn new(name: impl Into<String>, updated: NaiveDate) -> Self {
        Self {
            name: name.into(),
            note: String::new(),
            category: Category::Anime,
            genre: String::new(),
            season: String::new(),
            total_episodes: 12,
            watched_episodes: 0,
            updated,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), RecordValidationError> {
        require_name(&self.name)?;
        if self.total_episodes == 0 {
            return Err(RecordValidationError::NoEpisodes);
        }
        Ok(())
    }

    /// Catalog row created when the name is not catalogued yet.
    pub(crate) fn catalog_entry(&self, list_id: RecordId) -> CatalogEntry {
        CatalogEntry {
            list_id,
            name: self.name.clone(),
            note: or_default(self.note.clone(), DEFAULT_SEASON_NOTE),
            category: self.category,
            genre: or_default(self.genre.clone(), DEFAULT_SEASON_GENRE),
            description: DEFAULT_SEASON_DESCRIPTION.to_string(),
        }
    }

    pub(crate) fn into_entry(self, list_id: RecordId) -> SeasonalEntry {
        let catalog = self.catalog_entry(list_id);
        SeasonalEntry {
            list_id,
            name: catalog.name,
            note: catalog.note,
            category: catalog.category,
            genre: catalog.genre,
            description: catalog.description,
            season: or_default(self.season, DEFAULT_SEASON_LABEL),
            total_episodes: self.total_episodes,
            watched_episodes: self.watched_episodes,
            updated: self.updated,
        }
    }
}
