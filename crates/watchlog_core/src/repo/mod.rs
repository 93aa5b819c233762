//! Table model and persistence boundary.
//!
//! # Responsibility
//! - Keep row-level transforms (`table`) separate from file I/O (`csv_repo`).
//! - Report semantic failures (`Validation`, `MalformedData`) apart from
//!   transport failures (`Io`).

pub mod csv_repo;
pub mod table;
