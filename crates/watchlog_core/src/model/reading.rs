//! Reading-list dataset, tracked independently of the anime catalog.

use crate::model::record::{lenient_int, or_default, Record, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Header row of the reading file.
pub const READING_COLUMNS: &[&str] = &["ID", "Nome", "Tipo", "Gênero", "Descrição", "Progresso"];

pub const DEFAULT_READING_GENRE: &str = "Desconhecido";
pub const DEFAULT_READING_DESCRIPTION: &str = "Sem descrição";
pub const DEFAULT_READING_PROGRESS: &str = "Em progresso";

/// Kind of reading material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingKind {
    #[default]
    #[serde(rename = "Mangá", alias = "Manga")]
    Manga,
    #[serde(rename = "Livro", alias = "Book")]
    Book,
}

impl ReadingKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Manga => "Mangá",
            Self::Book => "Livro",
        }
    }
}

impl Display for ReadingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReadingKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mangá" | "manga" => Ok(Self::Manga),
            "livro" | "book" => Ok(Self::Book),
            _ => Err(format!("unknown reading type `{value}`; expected manga|book")),
        }
    }
}

/// One row of the reading file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingItem {
    #[serde(rename = "ID", deserialize_with = "lenient_int")]
    pub id: RecordId,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Tipo")]
    pub kind: ReadingKind,
    #[serde(rename = "Gênero")]
    pub genre: String,
    #[serde(rename = "Descrição")]
    pub description: String,
    /// Free-form progress text, e.g. `cap. 40` or `Em progresso`.
    #[serde(rename = "Progresso")]
    pub progress: String,
}

impl Record for ReadingItem {
    const DATASET: &'static str = "reading";
    const COLUMNS: &'static [&'static str] = READING_COLUMNS;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn genre(&self) -> &str {
        &self.genre
    }
}

/// User-entered fields for a new reading item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingDraft {
    pub name: String,
    pub kind: ReadingKind,
    pub genre: String,
    pub description: String,
    pub progress: String,
}

impl ReadingDraft {
    pub fn new(name: impl Into<String>, kind: ReadingKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub(crate) fn into_item(self, id: RecordId) -> ReadingItem {
        ReadingItem {
            id,
            name: self.name,
            kind: self.kind,
            genre: or_default(self.genre, DEFAULT_READING_GENRE),
            description: or_default(self.description, DEFAULT_READING_DESCRIPTION),
            progress: or_default(self.progress, DEFAULT_READING_PROGRESS),
        }
    }
}
