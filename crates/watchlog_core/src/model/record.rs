//! Shared record contract used by the generic table and store layers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity value of a persisted row (`List` or `ID` column).
pub type RecordId = u32;

/// Row shape stored in one backing CSV file.
///
/// Implementors must keep their serde field order identical to `COLUMNS`,
/// because rows are written positionally under a fixed header.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Short dataset label used in logs and error messages.
    const DATASET: &'static str;
    /// Header row of the backing file, in persisted order.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> RecordId;
    fn name(&self) -> &str;
    fn genre(&self) -> &str;

    /// Checks store-boundary invariants before a row is written.
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_id(self.id())?;
        require_name(self.name())
    }
}

/// Validation failure raised before any in-memory or persisted mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Identity is 0; ids start at 1.
    InvalidId,
    /// Name is empty or whitespace only.
    EmptyName,
    /// Seasonal entry declares zero total episodes.
    NoEpisodes,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId => write!(f, "id must be at least 1"),
            Self::EmptyName => write!(f, "name is required"),
            Self::NoEpisodes => write!(f, "total episodes must be at least 1"),
        }
    }
}

impl Error for RecordValidationError {}

pub(crate) fn require_id(id: RecordId) -> Result<(), RecordValidationError> {
    if id == 0 {
        return Err(RecordValidationError::InvalidId);
    }
    Ok(())
}

pub(crate) fn require_name(name: &str) -> Result<(), RecordValidationError> {
    if name.trim().is_empty() {
        return Err(RecordValidationError::EmptyName);
    }
    Ok(())
}

/// Returns `value` unless it is blank, in which case `fallback` is used.
pub(crate) fn or_default(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Deserializes an integer cell, tolerating the `3.0` form that dataframe
/// tools write for integer columns.
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient_int(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid integer value `{raw}`"))
    })
}

fn parse_lenient_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    let (whole, fraction) = trimmed.split_once('.')?;
    if !fraction.is_empty() && fraction.chars().all(|ch| ch == '0') {
        return whole.parse::<u32>().ok();
    }
    None
}
