//! Normalized price record produced by one fetch.
//!
//! A `PriceRecord` is built once from the API response, printed and/or written to
//! CSV, then dropped. The capture time is not part of it: the storage layer stamps
//! each row when it is written.
use std::fmt;

use chrono::NaiveDateTime;

use crate::columns::Column;
use crate::time::format_timestamp;

/// Placeholder written in place of a missing optional value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Optional price: either a number reported by the API or the `N/A` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceValue {
    /// Price reported by the API, kept exactly as decoded.
    Available(f64),
    /// The API did not report this price.
    NotAvailable,
}

impl From<Option<f64>> for PriceValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(PriceValue::NotAvailable, PriceValue::Available)
    }
}

impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceValue::Available(price) => write!(f, "{}", price),
            PriceValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Price snapshot for one instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Regular market price.
    pub current_price: f64,
    /// Pre-market price, when the API reports one.
    pub pre_market_price: PriceValue,
    /// Post-market price, when the API reports one.
    pub post_market_price: PriceValue,
    /// Local wall-clock time of the last regular market trade.
    pub last_update: Option<NaiveDateTime>,
}

impl PriceRecord {
    /// Labelled display values in column order, without the capture timestamp.
    pub fn fields(&self) -> [(Column, String); 4] {
        [
            (Column::CurrentPrice, self.current_price.to_string()),
            (Column::PreMarketPrice, self.pre_market_price.to_string()),
            (Column::PostMarketPrice, self.post_market_price.to_string()),
            (
                Column::LastUpdate,
                self.last_update
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format_timestamp),
            ),
        ]
    }
}

impl fmt::Display for PriceRecord {
    /// One `Key: Value` line per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (column, value) in self.fields() {
            writeln!(f, "{}: {}", column, value)?;
        }
        Ok(())
    }
}
