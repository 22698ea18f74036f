//! Price Scraper — fetches the latest Ethereum (ETH-USD) quote from the Yahoo Finance
//! chart API, prints it to stdout and appends it as one row to a CSV file.
//!
//! Each run performs one delay, one HTTP request and at most one CSV append, then
//! exits. Periodic collection is left to an external scheduler such as cron.
//!
//! Usage example (CLI):
//! ```bash
//! price_scraper --interval 5 --output ./eth_prices.csv
//! ```
//!
//! Set `RUST_LOG=debug` for more verbose logging.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod model;
#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::fetcher::QuoteFetcher;
use clap::Parser;
use log::{debug, error, info};
use price_common::storage::CsvStore;
use price_common::{PriceRecord, Result, ScraperError};
use std::io::{self, Write};
use std::time::Duration;

/// Message printed when no record could be retrieved.
const FAILURE_MESSAGE: &str = "Failed to fetch data.";

fn main() -> Result<(), ScraperError> {
    init_logger();
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

/// Fetch one record, print it to `out` and append it to the CSV file unless
/// `--no-save` is set. Only persistence and output errors are returned.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), ScraperError> {
    match fetch_record(args) {
        Some(record) => {
            write!(out, "{}", record)?;
            if !args.no_save {
                CsvStore::new(&args.output).append(&record)?;
            }
        }
        None => writeln!(out, "{}", FAILURE_MESSAGE)?,
    }
    Ok(())
}

fn fetch_record(args: &Args) -> Option<PriceRecord> {
    let fetcher = match QuoteFetcher::new(&args.base_url, args.symbol, Duration::from_secs(args.timeout)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("[{}] {}", e.kind(), e);
            return None;
        }
    };
    info!(
        "Requesting {} in {} second(s) from {}",
        args.symbol,
        args.interval,
        fetcher.url()
    );
    fetcher.fetch_price(args.interval)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
