//! Error types shared between the scraper binary and the storage layer.
//!
//! `FetchError` classifies what went wrong while retrieving a quote, while
//! `ScraperError` unifies it with I/O and CSV failures so the binary can
//! propagate a single error type.
use std::io;

use thiserror::Error;

/// Failure while retrieving and decoding a quote from the chart API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS, connection, timeout or body read failure.
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("HTTP request error: unexpected status {0}")]
    HttpStatus(u16),

    /// The body is valid JSON but a required key is absent or has the wrong shape.
    #[error("Error parsing data: {0}")]
    MissingKey(String),

    /// The body is not valid JSON.
    #[error("Error parsing data: malformed JSON: {0}")]
    MalformedJson(serde_json::Error),

    /// Anything that does not fit the categories above.
    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Short kind label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::HttpStatus(_) => "http-status",
            FetchError::MissingKey(_) => "missing-key",
            FetchError::MalformedJson(_) => "malformed-json",
            FetchError::Unknown(_) => "unknown",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        // Data errors are well-formed JSON that does not match the expected shape.
        if err.is_data() {
            FetchError::MissingKey(err.to_string())
        } else {
            FetchError::MalformedJson(err)
        }
    }
}

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum ScraperError {
    /// I/O error originating from files or the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while writing CSV rows.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Quote retrieval failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
