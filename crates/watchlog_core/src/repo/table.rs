//! In-memory table and the pure row-level transforms applied to it.
//!
//! # Responsibility
//! - Hold the rows of one dataset in persisted order.
//! - Provide lookup/update/remove/filter transforms without doing any I/O.
//!
//! # Invariants
//! - `append` never checks for duplicate identity or name.
//! - `update_in_place` touches at most the first matching row.
//! - `remove_where` drops every matching row.

use crate::model::record::{Record, RecordId};
use std::collections::{BTreeMap, BTreeSet};

/// How a name lookup compares against stored names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Byte-for-byte equality; used by edit/remove flows.
    Exact,
    /// Trimmed, lowercased query against lowercased names; used by
    /// seasonal dedup-on-insert.
    IgnoreCase,
}

impl NameMatch {
    fn matches(self, stored: &str, query: &str) -> bool {
        match self {
            Self::Exact => stored == query,
            Self::IgnoreCase => stored.to_lowercase() == query.trim().to_lowercase(),
        }
    }
}

/// Row selector for update/delete operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Id(RecordId),
    /// Exact name match.
    Name(String),
}

impl RecordKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Id(id) => record.id() == *id,
            Self::Name(name) => record.name() == name,
        }
    }
}

/// Multi-select search: a row passes when its name is in `names` and its
/// genre is in `genres`. An empty set does not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub names: BTreeSet<String>,
    pub genres: BTreeSet<String>,
}

impl ListFilter {
    pub fn by_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn by_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn accepts<R: Record>(&self, record: &R) -> bool {
        (self.names.is_empty() || self.names.contains(record.name()))
            && (self.genres.is_empty() || self.genres.contains(record.genre()))
    }
}

/// Number of rows sharing one genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Counts rows per genre, most frequent first, ties ordered by genre.
/// Blank genres are not counted.
pub fn genre_counts<'a, R, I>(rows: I) -> Vec<GenreCount>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut counts = BTreeMap::<&str, usize>::new();
    for row in rows {
        if row.genre().trim().is_empty() {
            continue;
        }
        *counts.entry(row.genre()).or_default() += 1;
    }

    let mut result: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();
    // BTreeMap iteration is genre-ascending and sort_by is stable.
    result.sort_by(|left, right| right.count.cmp(&left.count));
    result
}

/// Rows of one dataset, in persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Declared column schema of this dataset.
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `max(id) + 1`, or `1` for an empty table.
    pub fn next_id(&self) -> RecordId {
        self.rows
            .iter()
            .map(Record::id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn append(&mut self, record: R) {
        self.rows.push(record);
    }

    pub fn find_by_name(&self, name: &str, mode: NameMatch) -> Option<&R> {
        self.rows.iter().find(|row| mode.matches(row.name(), name))
    }

    pub fn find(&self, key: &RecordKey) -> Option<&R> {
        self.rows.iter().find(|row| key.matches(*row))
    }

    /// Replaces every field of the first row matching `key`.
    ///
    /// Returns `false` and leaves the table untouched when nothing matches.
    pub fn update_in_place(&mut self, key: &RecordKey, record: R) -> bool {
        self.update_with(key, |row| *row = record)
    }

    /// Applies `apply` to the first row matching `key`.
    pub fn update_with<F>(&mut self, key: &RecordKey, apply: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        match self.rows.iter_mut().find(|row| key.matches(&**row)) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }

    /// Drops all rows satisfying `predicate` and returns how many were dropped.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&R) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    pub fn filter(&self, filter: &ListFilter) -> Vec<&R> {
        self.rows.iter().filter(|row| filter.accepts(*row)).collect()
    }

    /// Sorted unique non-blank names.
    pub fn distinct_names(&self) -> Vec<String> {
        distinct(self.rows.iter().map(Record::name))
    }

    /// Sorted unique non-blank genres.
    pub fn distinct_genres(&self) -> Vec<String> {
        distinct(self.rows.iter().map(Record::genre))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{genre_counts, GenreCount, ListFilter, NameMatch, RecordKey, Table};
    use crate::model::catalog::{CatalogDraft, CatalogEntry};

    fn entry(id: u32, name: &str, genre: &str) -> CatalogEntry {
        let mut draft = CatalogDraft::new(name);
        draft.genre = genre.to_string();
        draft.into_entry(id)
    }

    fn sample() -> Table<CatalogEntry> {
        Table::from_rows(vec![
            entry(1, "Naruto", "Action"),
            entry(2, "Mushishi", "Slice of Life"),
            entry(5, "Bleach", "Action"),
            entry(3, "Naruto", "Adventure"),
        ])
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(Table::<CatalogEntry>::new().next_id(), 1);
        assert_eq!(sample().next_id(), 6);
    }

    #[test]
    fn find_by_name_respects_match_mode() {
        let table = sample();
        assert!(table.find_by_name("naruto", NameMatch::Exact).is_none());

        let found = table
            .find_by_name("  NARUTO ", NameMatch::IgnoreCase)
            .unwrap();
        assert_eq!(found.list_id, 1);
    }

    #[test]
    fn update_in_place_only_touches_first_match() {
        let mut table = sample();
        let replacement = entry(9, "Naruto Shippuden", "Action");

        assert!(table.update_in_place(&RecordKey::name("Naruto"), replacement.clone()));
        assert_eq!(table.rows()[0], replacement);
        assert_eq!(table.rows()[3].name, "Naruto");
        assert_eq!(table.rows()[3].list_id, 3);
    }

    #[test]
    fn update_with_missing_key_is_noop() {
        let mut table = sample();
        let before = table.clone();
        assert!(!table.update_in_place(&RecordKey::Id(42), entry(42, "Ghost", "")));
        assert_eq!(table, before);
    }

    #[test]
    fn remove_where_drops_every_match() {
        let mut table = sample();
        let removed = table.remove_where(|row| RecordKey::name("Naruto").matches(row));

        assert_eq!(removed, 2);
        let names: Vec<_> = table.rows().iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Mushishi", "Bleach"]);
    }

    #[test]
    fn filter_combines_name_and_genre_sets() {
        let table = sample();

        assert_eq!(table.filter(&ListFilter::default()).len(), 4);
        assert_eq!(table.filter(&ListFilter::by_genres(["Action"])).len(), 2);

        let mut both = ListFilter::by_names(["Naruto", "Mushishi"]);
        both.genres.insert("Action".to_string());
        let rows = table.filter(&both);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].list_id, 1);
    }

    #[test]
    fn distinct_values_are_sorted_and_unique() {
        let mut table = sample();
        table.append(entry(6, "Blank genre", "  "));

        assert_eq!(
            table.distinct_names(),
            vec!["Blank genre", "Bleach", "Mushishi", "Naruto"]
        );
        assert_eq!(
            table.distinct_genres(),
            vec!["Action", "Adventure", "Slice of Life"]
        );
    }

    #[test]
    fn genre_counts_orders_by_frequency_then_genre() {
        let table = sample();
        let counts = genre_counts(table.rows());
        assert_eq!(
            counts,
            vec![
                GenreCount {
                    genre: "Action".to_string(),
                    count: 2
                },
                GenreCount {
                    genre: "Adventure".to_string(),
                    count: 1
                },
                GenreCount {
                    genre: "Slice of Life".to_string(),
                    count: 1
                },
            ]
        );
    }
}
