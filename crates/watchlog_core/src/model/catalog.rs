//! Catalog dataset: the master list of anime and other media.
//!
//! # Invariants
//! - `list_id` is the row identity; `name` is only a lookup key and may repeat.
//! - Category labels are persisted in Portuguese (`Mangá`, `Filme`, ...).

use crate::model::record::{lenient_int, Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Header row of the catalog file.
pub const CATALOG_COLUMNS: &[&str] = &["List", "Name", "Note", "Categoria", "Genero", "Descrição"];

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Media category of a catalog row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Anime")]
    Anime,
    #[serde(rename = "Mangá", alias = "Manga")]
    Manga,
    #[serde(rename = "Filme", alias = "Movie")]
    Movie,
    #[serde(rename = "Desenho", alias = "Cartoon")]
    Cartoon,
    #[serde(rename = "Outro", alias = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Anime,
        Category::Manga,
        Category::Movie,
        Category::Cartoon,
        Category::Other,
    ];

    /// Persisted label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Anime => "Anime",
            Self::Manga => "Mangá",
            Self::Movie => "Filme",
            Self::Cartoon => "Desenho",
            Self::Other => "Outro",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
            Self::Movie => "movie",
            Self::Cartoon => "cartoon",
            Self::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the persisted label or the English name, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label().to_lowercase() == needle || category.english() == needle
            })
            .ok_or_else(|| {
                format!("unknown category `{value}`; expected anime|manga|movie|cartoon|other")
            })
    }
}

/// One row of the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "List", deserialize_with = "lenient_int")]
    pub list_id: RecordId,
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-form rating text such as `7.5`.
    #[serde(rename = "Note")]
    pub note: String,
    #[serde(rename = "Categoria")]
    pub category: Category,
    #[serde(rename = "Genero")]
    pub genre: String,
    #[serde(rename = "Descrição")]
    pub description: String,
}

impl CatalogEntry {
    /// Returns the description cut to 100 characters, with `...` appended
    /// when it was longer.
    pub fn description_preview(&self) -> String {
        if self.description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
            return self.description.clone();
        }
        let mut preview: String = self
            .description
            .chars()
            .take(DESCRIPTION_PREVIEW_CHARS)
            .collect();
        preview.push_str("...");
        preview
    }
}

impl Record for CatalogEntry {
    const DATASET: &'static str = "catalog";
    const COLUMNS: &'static [&'static str] = CATALOG_COLUMNS;

    fn id(&self) -> RecordId {
        self.list_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn genre(&self) -> &str {
        &self.genre
    }
}

/// User-entered fields for a new catalog row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDraft {
    /// Explicit identity; `None` assigns the next free one.
    pub list_id: Option<RecordId>,
    pub name: String,
    pub note: String,
    pub category: Category,
    pub genre: String,
    pub description: String,
}

impl CatalogDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds the row using `fallback_id` unless an explicit id was given.
    pub(crate) fn into_entry(self, fallback_id: RecordId) -> CatalogEntry {
        CatalogEntry {
            list_id: self.list_id.unwrap_or(fallback_id),
            name: self.name,
            note: self.note,
            category: self.category,
            genre: self.genre,
            description: self.description,
        }
    }
}
