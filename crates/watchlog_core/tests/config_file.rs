use watchlog_core::{ConfigError, Tracker, TrackerConfig};

#[test]
fn config_file_paths_resolve_next_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("watchlog.toml");
    std::fs::write(
        &config_path,
        "data_dir = \"data\"\ncatalog_path = \"catalog.csv\"\n",
    )
    .unwrap();

    let config = TrackerConfig::load(&config_path).unwrap();

    assert_eq!(config.catalog_path, dir.path().join("catalog.csv"));
    assert_eq!(
        config.seasonal_path,
        dir.path().join("data").join("temporada_animes.csv")
    );
    assert_eq!(
        config.reading_path,
        dir.path().join("data").join("mangas_livros.csv")
    );

    let tracker = Tracker::open(config).unwrap();
    assert!(tracker.catalog().table().is_empty());
}

#[test]
fn missing_and_invalid_config_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();

    let missing = TrackerConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::Io { .. }));

    let invalid_path = dir.path().join("bad.toml");
    std::fs::write(&invalid_path, "data_dir = [").unwrap();
    let invalid = TrackerConfig::load(&invalid_path).unwrap_err();
    assert!(matches!(invalid, ConfigError::Parse { .. }));
    assert!(invalid.to_string().contains("bad.toml"));
}
