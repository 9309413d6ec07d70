//! Stock data service
//!
//! Builds the symbol listing and stock detail responses out of provider
//! calls. Parameter validation happens in the handlers; by the time these
//! functions run, `page` and `page_size` are known to be in range.

use chrono::{Duration, Utc};

use crate::models::{HistoricalPrice, StockDetails};
use crate::provider::{MarketDataProvider, ProviderError};

/// Trailing window for the daily close series, in calendar days.
const HISTORY_WINDOW_DAYS: i64 = 182;

/// Fetch one page of US ticker symbols, in provider order.
pub async fn list_us_symbols(
    provider: &dyn MarketDataProvider,
    page: usize,
    page_size: usize,
) -> Result<Vec<String>, ProviderError> {
    // the offset must fit usize even for absurd page numbers
    let offset = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .ok_or_else(|| ProviderError::Unexpected("pagination offset out of range".to_string()))?;
    provider.screen_us_equities(offset, page_size).await
}

/// Assemble the full detail record for `symbol`.
///
/// The snapshot lookup gates the whole request: a symbol without a current
/// price is `NotFound`. The two history lookups only contribute optional
/// fields and rows; missing data there never fails the request.
pub async fn get_stock_details(
    provider: &dyn MarketDataProvider,
    symbol: &str,
) -> Result<StockDetails, ProviderError> {
    let snapshot = provider.snapshot(symbol).await?;

    let today_bar = provider.latest_bar(symbol).await?;

    let end = Utc::now().date_naive();
    let start = end - Duration::days(HISTORY_WINDOW_DAYS);
    let bars = provider.daily_bars(symbol, start, end).await?;

    let last_six_months_prices = bars
        .into_iter()
        .filter_map(|bar| {
            bar.close.map(|close_price| HistoricalPrice {
                date: bar.date,
                close_price,
            })
        })
        .collect();

    Ok(StockDetails {
        symbol: symbol.to_uppercase(),
        current_open_price: today_bar.as_ref().and_then(|bar| bar.open),
        current_close_price: today_bar.as_ref().and_then(|bar| bar.close),
        fifty_two_week_high: snapshot.fifty_two_week_high,
        fifty_two_week_low: snapshot.fifty_two_week_low,
        pe_ratio: snapshot.trailing_pe,
        last_six_months_prices,
    })
}
