//! Data loading for the promotion analytics.
//!
//! This crate provides:
//! - CSV storage utilities for the raw exports
//! - The [`DataSource`] trait with CSV and in-memory implementations
//! - Row validation into the typed records of `promo-lift-core`

pub mod csv_storage;
pub mod source;

pub use csv_storage::CsvStorage;
pub use source::{
    validate_rows, validate_sales, CsvDataSource, DataSource, InMemorySource, Snapshot,
};
