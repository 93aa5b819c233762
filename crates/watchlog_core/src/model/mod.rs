//! Typed records for the three tracked datasets.
//!
//! # Responsibility
//! - Define one serde record type per persisted table.
//! - Declare each table's column schema and identity/name accessors.
//!
//! # Invariants
//! - Serde field names are the persisted header names, in column order.
//! - Identity values are positive integers assigned as `max + 1`.
//! - A record with an empty (trimmed) name is never persisted.

pub mod catalog;
pub mod reading;
pub mod record;
pub mod seasonal;
