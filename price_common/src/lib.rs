//!
//! Common types and utilities for the price scraper.
//!
//! This crate aggregates:
//! - `error` — `FetchError` for quote retrieval and the unified `ScraperError`.
//! - `result` — handy `Result<T, ScraperError>` alias.
//! - `api` — chart endpoint constants and URL helpers.
//! - `instrument` — supported symbols.
//! - `columns` — CSV column layout and labels.
//! - `time` — Unix timestamp conversion and formatting.
//! - `record` — the normalized `PriceRecord`.
//! - `storage` — append-only CSV persistence.
#![warn(missing_docs)]
pub mod api;
pub mod columns;
pub mod error;
pub mod instrument;
pub mod record;
pub mod result;
pub mod storage;
pub mod time;

pub use error::{FetchError, ScraperError};
pub use record::{PriceRecord, PriceValue};
pub use result::Result;
pub use storage::{CsvStore, append_record};
