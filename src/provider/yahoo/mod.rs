//! Yahoo Finance provider implementation
//!
//! Implements symbol screening, per-symbol snapshots and historical daily
//! bars on top of the public Yahoo Finance JSON APIs. The screener and
//! quoteSummary endpoints require crumb/cookie authentication; the crumb is
//! cached per provider instance and fetched lazily on first use.

mod common;
mod models;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::ProviderConfig;
use crate::provider::{DailyBar, MarketDataProvider, ProviderError, SnapshotInfo};
use self::models::{ChartResponse, QuoteSummaryResponse, ScreenerResponse};

/// Session cookie plus the crumb token it authenticates.
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: Client,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    /// Build a provider with bounded request/connect timeouts.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            crumb: RwLock::new(None),
        })
    }

    /// Return the cached crumb, fetching a fresh one on first use.
    async fn ensure_crumb(&self) -> Result<CrumbData, ProviderError> {
        {
            let guard = self.crumb.read().await;
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }
        self.fetch_crumb().await
    }

    async fn fetch_crumb(&self) -> Result<CrumbData, ProviderError> {
        // fc.yahoo.com answers 404, but the Set-Cookie header is what we want
        let response = self
            .client
            .get(common::YAHOO_COOKIE_URL)
            .header(header::USER_AGENT, common::USER_AGENT)
            .send()
            .await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| {
                ProviderError::Unexpected("no session cookie in provider response".to_string())
            })?;

        let crumb = self
            .client
            .get(common::YAHOO_CRUMB_API)
            .header(header::USER_AGENT, common::USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .text()
            .await?;

        if crumb.is_empty() || crumb.contains('{') {
            return Err(ProviderError::Unexpected(
                "provider returned an invalid crumb".to_string(),
            ));
        }

        let data = CrumbData { cookie, crumb };
        *self.crumb.write().await = Some(data.clone());
        Ok(data)
    }

    /// GET a chart for `symbol` with the given query parameters. A 404 from
    /// the chart API means "no data", not a request failure.
    async fn fetch_chart(
        &self,
        symbol: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<DailyBar>, ProviderError> {
        let url = format!("{}/{}", common::YAHOO_CHART_API, symbol);
        let response = self
            .client
            .get(&url)
            .query(params)
            .header(header::USER_AGENT, common::USER_AGENT)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(ProviderError::Unexpected(format!(
                "chart request returned {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let parsed: ChartResponse = serde_json::from_str(&text)?;
        Ok(bars_from_chart(parsed))
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn screen_us_equities(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let crumb = self.ensure_crumb().await?;

        // Equivalent of an and-query over is-in(exchange) and is-in(region)
        let body = serde_json::json!({
            "offset": offset,
            "size": count,
            "sortField": "ticker",
            "sortType": "DESC",
            "quoteType": "EQUITY",
            "query": {
                "operator": "and",
                "operands": [
                    { "operator": "is-in", "operands": ["exchange", "NMS", "NYQ"] },
                    { "operator": "is-in", "operands": ["region", "us"] }
                ]
            },
            "userId": "",
            "userIdType": "guid"
        });

        let response = self
            .client
            .post(common::YAHOO_SCREENER_API)
            .query(&[("crumb", crumb.crumb.as_str())])
            .header(header::USER_AGENT, common::USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Unexpected(format!(
                "screener request returned {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let parsed: ScreenerResponse = serde_json::from_str(&text)?;
        Ok(symbols_from_screener(parsed))
    }

    async fn snapshot(&self, symbol: &str) -> Result<SnapshotInfo, ProviderError> {
        let crumb = self.ensure_crumb().await?;
        let url = format!("{}/{}", common::YAHOO_QUOTE_SUMMARY_API, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("modules", "price,summaryDetail"),
                ("crumb", crumb.crumb.as_str()),
            ])
            .header(header::USER_AGENT, common::USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        // Yahoo answers 404 with an error envelope for unknown symbols
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !response.status().is_success() {
            return Err(ProviderError::Unexpected(format!(
                "quoteSummary request returned {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let parsed: QuoteSummaryResponse = serde_json::from_str(&text)?;
        snapshot_from_summary(parsed)
    }

    async fn latest_bar(&self, symbol: &str) -> Result<Option<DailyBar>, ProviderError> {
        let bars = self
            .fetch_chart(
                symbol,
                &[
                    ("range", "1d".to_string()),
                    ("interval", "1d".to_string()),
                ],
            )
            .await?;
        Ok(bars.into_iter().next())
    }

    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp()
            + 24 * 60 * 60;

        self.fetch_chart(
            symbol,
            &[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ],
        )
        .await
    }
}

/// Pull ticker symbols out of a screener response, in provider order.
/// No result set and quotes without a symbol degrade to an empty list.
fn symbols_from_screener(response: ScreenerResponse) -> Vec<String> {
    response
        .finance
        .result
        .into_iter()
        .flatten()
        .flat_map(|r| r.quotes.into_iter().flatten())
        .filter_map(|q| q.symbol)
        .collect()
}

/// Normalize a quoteSummary response. A missing result or missing/non-finite
/// current price classifies as `NotFound`; the remaining metrics are each
/// optional and dropped when non-finite.
fn snapshot_from_summary(response: QuoteSummaryResponse) -> Result<SnapshotInfo, ProviderError> {
    let result = response
        .quote_summary
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or(ProviderError::NotFound)?;

    let regular_market_price = result
        .price
        .and_then(|p| p.regular_market_price)
        .and_then(|v| v.raw)
        .filter(|v| v.is_finite())
        .ok_or(ProviderError::NotFound)?;

    let detail = result.summary_detail;
    let finite = |value: Option<&models::FormattedValue>| {
        value.and_then(|v| v.raw).filter(|v| v.is_finite())
    };

    Ok(SnapshotInfo {
        regular_market_price,
        fifty_two_week_high: finite(detail.as_ref().and_then(|d| d.fifty_two_week_high.as_ref())),
        fifty_two_week_low: finite(detail.as_ref().and_then(|d| d.fifty_two_week_low.as_ref())),
        trailing_pe: finite(detail.as_ref().and_then(|d| d.trailing_pe.as_ref())),
    })
}

/// Flatten a chart response into daily bars. Timestamps that do not resolve
/// to a calendar date are dropped; null or non-finite opens/closes become
/// `None` on the bar.
fn bars_from_chart(response: ChartResponse) -> Vec<DailyBar> {
    let result = match response
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
    {
        Some(result) => result,
        None => return Vec::new(),
    };

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let opens = quote.open.unwrap_or_default();
    let closes = quote.close.unwrap_or_default();

    timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::<Utc>::from_timestamp(ts, 0)?.date_naive();
            Some(DailyBar {
                date,
                open: opens.get(i).copied().flatten().filter(|v| v.is_finite()),
                close: closes.get(i).copied().flatten().filter(|v| v.is_finite()),
            })
        })
        .collect()
}
