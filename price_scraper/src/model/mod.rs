//! Response model of the chart API.
//!
//! - `chart` — serde types for the `/v8/finance/chart/{symbol}` JSON body.
pub mod chart;
