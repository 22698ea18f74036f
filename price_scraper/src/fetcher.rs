//! Fetching quotes from the chart API over HTTP.
//!
//! `QuoteFetcher` sleeps for the requested delay, issues a single GET with a
//! browser-like user agent and decodes the body into a `PriceRecord`. No retries are
//! attempted.
use crate::model::chart::parse_chart;
use log::{error, info};
use price_common::api::{USER_AGENT, chart_url};
use price_common::instrument::Instrument;
use price_common::{FetchError, PriceRecord};
use reqwest::Url;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

/// Blocking client for one instrument's chart endpoint.
pub struct QuoteFetcher {
    client: Client,
    url: Url,
    instrument: Instrument,
}

impl QuoteFetcher {
    /// Build a fetcher for `instrument` against `base_url`.
    pub fn new(base_url: &str, instrument: Instrument, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Unknown(format!("failed to build HTTP client: {}", e)))?;

        let raw_url = chart_url(base_url, &instrument.to_string());
        let url = Url::parse(&raw_url)
            .map_err(|e| FetchError::Unknown(format!("invalid URL {}: {}", raw_url, e)))?;

        Ok(Self {
            client,
            url,
            instrument,
        })
    }

    /// Endpoint the fetcher requests.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Wait `delay_secs`, then request and decode one quote.
    pub fn try_fetch(&self, delay_secs: u64) -> Result<PriceRecord, FetchError> {
        thread::sleep(Duration::from_secs(delay_secs));

        let response = self.client.get(self.url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        parse_chart(&body)
    }

    /// Like [`Self::try_fetch`], but logs the failure and returns `None` instead.
    pub fn fetch_price(&self, delay_secs: u64) -> Option<PriceRecord> {
        match self.try_fetch(delay_secs) {
            Ok(record) => {
                info!("Successfully retrieved {} price data.", self.instrument);
                Some(record)
            }
            Err(e) => {
                error!("[{}] {}", e.kind(), e);
                None
            }
        }
    }
}
