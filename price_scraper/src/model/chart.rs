//! Chart payload returned by the quote endpoint.
//!
//! Only the fields the scraper needs are modelled; everything else in the body is
//! ignored by serde. Shape:
//! `{ chart: { result: [ { meta: { regularMarketPrice, preMarketPrice?, postMarketPrice?, regularMarketTime? } } ], error } }`
use price_common::FetchError;
use price_common::record::{PriceRecord, PriceValue};
use price_common::time::local_datetime;
use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    /// Chart envelope.
    pub chart: Chart,
}

/// Envelope holding either results or an API error.
#[derive(Debug, Deserialize)]
pub struct Chart {
    /// One entry per requested symbol; `null` when the API reports an error.
    pub result: Option<Vec<ChartResult>>,
    /// Error reported by the API alongside an empty result.
    pub error: Option<ChartError>,
}

/// Error object embedded in the chart envelope.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    /// Short error code, e.g. `Not Found`.
    pub code: Option<String>,
    /// Human-readable description.
    pub description: Option<String>,
}

/// Single chart result.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Quote metadata.
    pub meta: Meta,
}

/// Quote metadata for one symbol.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Regular market price (required).
    pub regular_market_price: f64,
    /// Pre-market price, absent outside pre-market hours or for crypto pairs.
    pub pre_market_price: Option<f64>,
    /// Post-market price.
    pub post_market_price: Option<f64>,
    /// Unix seconds of the last regular market trade.
    // Optional: a missing value yields `N/A` for the last update instead of a failure.
    pub regular_market_time: Option<i64>,
}

impl ChartResponse {
    /// Extract the metadata of the first result.
    pub fn into_meta(self) -> Result<Meta, FetchError> {
        let chart = self.chart;
        match chart.result.and_then(|results| results.into_iter().next()) {
            Some(result) => Ok(result.meta),
            None => {
                let detail = chart
                    .error
                    .and_then(|e| e.description.or(e.code))
                    .map(|d| format!(" ({})", d))
                    .unwrap_or_default();
                Err(FetchError::MissingKey(format!("chart.result[0]{}", detail)))
            }
        }
    }
}

impl From<Meta> for PriceRecord {
    fn from(meta: Meta) -> Self {
        PriceRecord {
            current_price: meta.regular_market_price,
            pre_market_price: PriceValue::from(meta.pre_market_price),
            post_market_price: PriceValue::from(meta.post_market_price),
            last_update: meta.regular_market_time.and_then(local_datetime),
        }
    }
}

/// Decode a response body into a `PriceRecord`.
pub fn parse_chart(body: &str) -> Result<PriceRecord, FetchError> {
    let response: ChartResponse = serde_json::from_str(body)?;
    Ok(response.into_meta()?.into())
}
