//! Backing-file locations for the three datasets.
//!
//! # Invariants
//! - Relative paths in a config file resolve against that file's directory.
//! - Any path not configured falls back to `<data_dir>/<default file name>`.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub const CATALOG_FILE_NAME: &str = "anime_lista.csv";
pub const SEASONAL_FILE_NAME: &str = "temporada_animes.csv";
pub const READING_FILE_NAME: &str = "mangas_livros.csv";

/// Paths of the catalog, seasonal and reading files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub catalog_path: PathBuf,
    pub seasonal_path: PathBuf,
    pub reading_path: PathBuf,
}

/// On-disk TOML shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    seasonal_path: Option<PathBuf>,
    reading_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl TrackerConfig {
    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            catalog_path: dir.join(CATALOG_FILE_NAME),
            seasonal_path: dir.join(SEASONAL_FILE_NAME),
            reading_path: dir.join(READING_FILE_NAME),
        }
    }

    /// Reads a TOML config file.
    ///
    /// Recognized keys: `data_dir`, `catalog_path`, `seasonal_path`,
    /// `reading_path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&text, base_dir).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses TOML config text, resolving relative paths against `base_dir`.
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let data_dir = match file.data_dir {
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        };
        let defaults = Self::in_dir(&data_dir);
        let resolve = |value: Option<PathBuf>, fallback: PathBuf| match value {
            Some(path) => base_dir.join(path),
            None => fallback,
        };

        Ok(Self {
            catalog_path: resolve(file.catalog_path, defaults.catalog_path),
            seasonal_path: resolve(file.seasonal_path, defaults.seasonal_path),
            reading_path: resolve(file.reading_path, defaults.reading_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TrackerConfig;
    use std::path::{Path, PathBuf};

    #[test]
    fn in_dir_uses_default_file_names() {
        let config = TrackerConfig::in_dir("/data");
        assert_eq!(config.catalog_path, PathBuf::from("/data/anime_lista.csv"));
        assert_eq!(
            config.seasonal_path,
            PathBuf::from("/data/temporada_animes.csv")
        );
        assert_eq!(config.reading_path, PathBuf::from("/data/mangas_livros.csv"));
    }

    #[test]
    fn toml_overrides_resolve_against_base_dir() {
        let text = r#"
            data_dir = "lists"
            reading_path = "/srv/books.csv"
        "#;
        let config = TrackerConfig::from_toml_str(text, Path::new("/home/me")).unwrap();

        assert_eq!(
            config.catalog_path,
            PathBuf::from("/home/me/lists/anime_lista.csv")
        );
        assert_eq!(
            config.seasonal_path,
            PathBuf::from("/home/me/lists/temporada_animes.csv")
        );
        assert_eq!(config.reading_path, PathBuf::from("/srv/books.csv"));
    }

    #[test]
    fn empty_toml_falls_back_to_base_dir() {
        let config = TrackerConfig::from_toml_str("", Path::new("/cfg")).unwrap();
        assert_eq!(config, TrackerConfig::in_dir("/cfg"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(TrackerConfig::from_toml_str("catalog = \"x.csv\"", Path::new("/")).is_err());
    }
}
