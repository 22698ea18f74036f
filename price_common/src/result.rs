//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `ScraperError`, so functions can simply return `Result<T>`.
use crate::error::ScraperError;

/// Workspace-wide `Result` alias with `ScraperError` as the default error.
pub type Result<T, E = ScraperError> = std::result::Result<T, E>;
