//! Append-only CSV persistence for price records.
//!
//! Each call opens the file in append mode, writes the header when the file did
//! not exist beforehand, writes exactly one row and closes the file again. Nothing
//! is ever truncated or rewritten. Concurrent writers from several processes are
//! not coordinated.
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::WriterBuilder;
use log::info;

use crate::columns::Column;
use crate::record::PriceRecord;
use crate::result::Result;
use crate::time::{format_timestamp, now_local};

/// CSV file that price rows are appended to.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append `record`, stamped with the current local time.
    pub fn append(&self, record: &PriceRecord) -> Result<()> {
        self.append_at(record, now_local())
    }

    /// Append `record` with an explicit capture timestamp.
    pub fn append_at(&self, record: &PriceRecord, captured_at: NaiveDateTime) -> Result<()> {
        let file_exists = self.path.is_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if !file_exists {
            writer.write_record(Column::header())?;
        }

        let mut row = Vec::with_capacity(5);
        row.push(format_timestamp(&captured_at));
        row.extend(record.fields().into_iter().map(|(_, value)| value));
        writer.write_record(&row)?;
        writer.flush()?;

        info!("Data saved to {}", self.path.display());
        Ok(())
    }
}

/// Append one row for `record` to the CSV file at `path`.
pub fn append_record(record: &PriceRecord, path: impl AsRef<Path>) -> Result<()> {
    CsvStore::new(path.as_ref()).append(record)
}
