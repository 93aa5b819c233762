use chrono::NaiveDate;
use watchlog_core::{
    CatalogDraft, RecordValidationError, SeasonalDraft, SeasonalInsert, StoreError, Tracker,
    TrackerConfig,
};

fn open(dir: &tempfile::TempDir) -> Tracker {
    Tracker::open(TrackerConfig::in_dir(dir.path())).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

fn season_draft(name: &str) -> SeasonalDraft {
    SeasonalDraft {
        total_episodes: 12,
        watched_episodes: 0,
        ..SeasonalDraft::new(name, day())
    }
}

#[test]
fn new_name_is_added_to_catalog_and_season() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);

    let outcome = tracker.add_to_season(season_draft("X")).unwrap();

    assert_eq!(
        outcome,
        SeasonalInsert {
            list_id: 1,
            catalog_created: true
        }
    );
    let reopened = open(&dir);
    let catalog = reopened.catalog().table().rows();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].name, "X");
    assert_eq!(catalog[0].note, "6.0");
    assert_eq!(catalog[0].genre, "Desconhecido");
    assert_eq!(catalog[0].description, "anime novo");

    let seasonal = reopened.seasonal().table().rows();
    assert_eq!(seasonal.len(), 1);
    assert_eq!(seasonal[0].list_id, 1);
    assert_eq!(seasonal[0].season, "Não especificado");
    assert_eq!(seasonal[0].updated, day());
}

#[test]
fn case_insensitive_duplicate_only_grows_season() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);

    tracker.add_to_season(season_draft("X")).unwrap();
    let second = tracker.add_to_season(season_draft("x")).unwrap();

    assert!(!second.catalog_created);
    assert_eq!(second.list_id, 2);
    let reopened = open(&dir);
    assert_eq!(reopened.catalog().table().len(), 1);
    assert_eq!(reopened.seasonal().table().len(), 2);
    let seasonal = reopened.seasonal().table().rows();
    assert_eq!(seasonal[1].name, "x");
    assert_eq!(seasonal[1].list_id, 2);
    assert_eq!(reopened.catalog().table().rows()[0].list_id, 1);
}

#[test]
fn matched_catalog_entry_still_takes_next_seasonal_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.add_catalog_entry(CatalogDraft::new("Other")).unwrap();
    tracker.add_catalog_entry(CatalogDraft::new("Frieren")).unwrap();
    let catalog_before = std::fs::read(&tracker.config().catalog_path).unwrap();

    let outcome = tracker.add_to_season(season_draft("  frieren ")).unwrap();

    assert_eq!(outcome.list_id, 3);
    assert!(!outcome.catalog_created);
    assert_eq!(tracker.seasonal().table().rows()[0].list_id, 3);
    assert_eq!(
        std::fs::read(&tracker.config().catalog_path).unwrap(),
        catalog_before
    );
}

#[test]
fn new_catalog_row_uses_next_catalog_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker
        .add_catalog_entry(CatalogDraft {
            list_id: Some(7),
            ..CatalogDraft::new("Monster")
        })
        .unwrap();

    let outcome = tracker.add_to_season(season_draft("Dandadan")).unwrap();

    assert_eq!(outcome.list_id, 8);
    assert_eq!(tracker.seasonal().table().rows()[0].list_id, 8);
}

#[test]
fn rejected_drafts_write_neither_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);

    let blank = tracker.add_to_season(season_draft(" ")).unwrap_err();
    assert!(matches!(
        blank,
        StoreError::Validation(RecordValidationError::EmptyName)
    ));

    let mut no_episodes = season_draft("Dandadan");
    no_episodes.total_episodes = 0;
    let err = tracker.add_to_season(no_episodes).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(RecordValidationError::NoEpisodes)
    ));

    assert!(!tracker.config().catalog_path.exists());
    assert!(!tracker.config().seasonal_path.exists());
}

#[test]
fn set_watched_updates_first_exact_match_without_clamping() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.add_to_season(season_draft("Dandadan")).unwrap();
    tracker.add_to_season(season_draft("Dandadan")).unwrap();

    assert!(tracker.set_watched("Dandadan", 30).unwrap());
    assert!(!tracker.set_watched("dandadan", 1).unwrap());

    let reopened = open(&dir);
    let rows = reopened.seasonal().table().rows();
    assert_eq!(rows[0].watched_episodes, 30);
    assert_eq!(rows[0].total_episodes, 12);
    assert_eq!(rows[1].watched_episodes, 0);
}

#[test]
fn remove_from_season_keeps_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.add_to_season(season_draft("Dandadan")).unwrap();
    tracker.add_to_season(season_draft("Dandadan")).unwrap();
    tracker.add_to_season(season_draft("Kaiju No. 8")).unwrap();

    assert_eq!(tracker.remove_from_season("Dandadan").unwrap(), 2);

    let reopened = open(&dir);
    assert_eq!(reopened.catalog().table().len(), 2);
    let names: Vec<_> = reopened
        .seasonal()
        .table()
        .rows()
        .iter()
        .map(|row| row.name.clone())
        .collect();
    assert_eq!(names, vec!["Kaiju No. 8".to_string()]);
}

#[test]
fn reload_picks_up_external_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = open(&dir);
    let mut second = open(&dir);

    second.add_to_season(season_draft("Dandadan")).unwrap();
    assert!(first.seasonal().table().is_empty());

    first.reload().unwrap();
    assert_eq!(first.seasonal().table().len(), 1);
    assert_eq!(first.catalog().table().len(), 1);
}
