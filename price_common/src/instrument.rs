//! Instruments the scraper knows how to request.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Yahoo Finance symbol of a crypto pair quoted in USD.
///
/// `Display` yields the symbol exactly as the chart API expects it in the URL.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, EnumString, Hash, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Instrument {
    #[default]
    #[strum(serialize = "ETH-USD")]
    EthUsd,
    #[strum(serialize = "BTC-USD")]
    BtcUsd,
    #[strum(serialize = "SOL-USD")]
    SolUsd,
    #[strum(serialize = "LTC-USD")]
    LtcUsd,
}
