//! Table repository contract and CSV file implementation.
//!
//! # Responsibility
//! - Load one dataset from its backing file into a `Table`.
//! - Rewrite the whole backing file from a `Table`.
//!
//! # Invariants
//! - A missing file loads as an empty table; it is not an error.
//! - The header must name every declared column; extra or reordered columns
//!   are tolerated and dropped on the next save.
//! - Saves always write the declared header followed by every row in order.
//! - Saves overwrite in place: no temp file, no backup.

use crate::model::record::{Record, RecordValidationError};
use crate::repo::table::Table;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Record-store failure.
#[derive(Debug)]
pub enum StoreError {
    /// Rejected input; nothing was mutated or written.
    Validation(RecordValidationError),
    /// Backing file exists but could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// Backing file content does not parse as the dataset's table.
    MalformedData { path: PathBuf, detail: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::MalformedData { path, detail } => {
                write!(f, "malformed data in `{}`: {detail}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::MalformedData { .. } => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Persistence boundary for one dataset.
pub trait TableRepository<R: Record> {
    fn load(&self) -> StoreResult<Table<R>>;
    fn save(&self, table: &Table<R>) -> StoreResult<()>;
}

/// CSV-file-backed table repository.
#[derive(Debug, Clone)]
pub struct CsvTableRepository<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> CsvTableRepository<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    fn read_table(&self, file: File) -> StoreResult<Table<R>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|err| self.csv_error(err))?
            .clone();
        if headers.is_empty() {
            return Err(self.malformed("missing header row".to_string()));
        }
        for column in R::COLUMNS {
            if !headers.iter().any(|header| header == *column) {
                return Err(self.malformed(format!("missing column `{column}`")));
            }
        }
        if !headers.iter().eq(R::COLUMNS.iter().copied()) {
            warn!(
                "event=table_load module=repo status=schema_mismatch dataset={} path={} columns={}",
                R::DATASET,
                self.path.display(),
                headers.len()
            );
        }

        let mut rows = Vec::new();
        for row in reader.deserialize::<R>() {
            rows.push(row.map_err(|err| self.csv_error(err))?);
        }
        Ok(Table::from_rows(rows))
    }

    fn write_table(&self, table: &Table<R>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|err| self.csv_error(err))?;
        writer
            .write_record(R::COLUMNS)
            .map_err(|err| self.csv_error(err))?;
        for row in table.rows() {
            writer.serialize(row).map_err(|err| self.csv_error(err))?;
        }
        writer.flush().map_err(|err| self.io_error(err))?;
        Ok(())
    }

    fn csv_error(&self, err: csv::Error) -> StoreError {
        let detail = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => self.io_error(source),
            _ => self.malformed(detail),
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, detail: String) -> StoreError {
        StoreError::MalformedData {
            path: self.path.clone(),
            detail,
        }
    }
}

impl<R: Record> TableRepository<R> for CsvTableRepository<R> {
    fn load(&self) -> StoreResult<Table<R>> {
        let started_at = Instant::now();
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=table_load module=repo status=missing dataset={} path={}",
                    R::DATASET,
                    self.path.display()
                );
                return Ok(Table::new());
            }
            Err(err) => {
                error!(
                    "event=table_load module=repo status=error dataset={} error_code=open_failed error={}",
                    R::DATASET,
                    err
                );
                return Err(self.io_error(err));
            }
        };

        match self.read_table(file) {
            Ok(table) => {
                info!(
                    "event=table_load module=repo status=ok dataset={} rows={} duration_ms={}",
                    R::DATASET,
                    table.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(table)
            }
            Err(err) => {
                error!(
                    "event=table_load module=repo status=error dataset={} error_code=parse_failed error={}",
                    R::DATASET,
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, table: &Table<R>) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_table(table) {
            Ok(()) => {
                info!(
                    "event=table_save module=repo status=ok dataset={} rows={} duration_ms={}",
                    R::DATASET,
                    table.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=table_save module=repo status=error dataset={} error_code=write_failed error={}",
                    R::DATASET,
                    err
                );
                Err(err)
            }
        }
    }
}
