//! Market data provider abstraction
//!
//! Handlers and services only talk to the `MarketDataProvider` trait, so the
//! concrete Yahoo Finance implementation can be swapped for a stub in tests.

pub mod yahoo;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Provider-boundary error classification.
///
/// Only two kinds are ever visible to clients: `NotFound` maps to 404, every
/// other variant maps to a generic 500 with the detail kept in server logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Symbol unknown to the provider, or its record lacks a current price.
    #[error("symbol not found or no data available")]
    NotFound,
    /// Transport-level failure talking to the provider.
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Provider answered with a body we could not decode.
    #[error("malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Anything else: unexpected status codes, missing auth artifacts, etc.
    #[error("{0}")]
    Unexpected(String),
}

/// Current/latest attributes for a single symbol, normalized from the
/// provider's snapshot record. `regular_market_price` is mandatory; a record
/// without it is reported as `ProviderError::NotFound` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotInfo {
    pub regular_market_price: f64,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub trailing_pe: Option<f64>,
}

/// One daily row of a historical price series. Open/close are optional
/// because the provider returns null entries for halted or partial days.
/// All values are guaranteed finite by the adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub close: Option<f64>,
}

/// External market data source.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Screen the provider's symbol universe for US equities on the major US
    /// exchanges, returning `count` ticker symbols starting at `offset`, in
    /// provider order. A result set without symbols yields an empty vec.
    async fn screen_us_equities(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, ProviderError>;

    /// Fetch the snapshot record for `symbol`.
    async fn snapshot(&self, symbol: &str) -> Result<SnapshotInfo, ProviderError>;

    /// Fetch the most recent daily bar for `symbol`, if the provider has one.
    async fn latest_bar(&self, symbol: &str) -> Result<Option<DailyBar>, ProviderError>;

    /// Fetch daily bars for `symbol` between `start` and `end` (inclusive
    /// calendar dates). Rows the provider cannot date are dropped silently.
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, ProviderError>;
}
