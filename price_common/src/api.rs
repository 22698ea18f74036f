//! Chart API constants and helpers used by the scraper.

/// Base URL of the public quote endpoint.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
/// Browser-like user agent; the API tends to reject bare HTTP clients.
pub const USER_AGENT: &str = "Mozilla/5.0";
/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Delay before the request in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;
/// Output file used when none is given.
pub const DEFAULT_CSV_PATH: &str = "eth_prices.csv";

/// Build the chart URL for `symbol` like "base/v8/finance/chart/ETH-USD".
pub fn chart_url(base_url: &str, symbol: &str) -> String {
    format!("{}/v8/finance/chart/{}", base_url.trim_end_matches('/'), symbol)
}
