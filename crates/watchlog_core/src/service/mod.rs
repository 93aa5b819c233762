//! Use-case services over the record stores.
//!
//! # Responsibility
//! - Pair each dataset's repository with its loaded table (`record_store`).
//! - Provide dataset-specific create/update helpers.
//! - Orchestrate the cross-dataset seasonal insert (`tracker`).

pub mod catalog_service;
pub mod reading_service;
pub mod record_store;
pub mod seasonal_service;
pub mod tracker;
