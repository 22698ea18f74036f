//! Command-line arguments for the price scraper.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use price_common::api::{DEFAULT_BASE_URL, DEFAULT_CSV_PATH, DEFAULT_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
use price_common::instrument::Instrument;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Retrieve Ethereum (ETH-USD) price data from Yahoo Finance.", long_about = None)]
pub struct Args {
    /// Delay (in seconds) before making the request.
    #[clap(long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// CSV file the price row is appended to.
    #[clap(long, default_value = DEFAULT_CSV_PATH)]
    pub output: PathBuf,

    /// Print the price only, do not write it to the CSV file.
    #[clap(long)]
    pub no_save: bool,

    /// Instrument to request.
    #[clap(long, value_enum, default_value_t = Instrument::EthUsd)]
    pub symbol: Instrument,

    /// Base URL of the quote API.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}
