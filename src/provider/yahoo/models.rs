//! Wire models for the Yahoo Finance JSON APIs
//!
//! Only the fields we read are declared; everything else in the responses is
//! ignored by serde. All leaf values are optional because Yahoo omits or
//! nulls fields freely.

use serde::Deserialize;

// ==================== screener ====================

#[derive(Debug, Deserialize)]
pub struct ScreenerResponse {
    pub finance: ScreenerFinance,
}

#[derive(Debug, Deserialize)]
pub struct ScreenerFinance {
    #[serde(default)]
    pub result: Option<Vec<ScreenerResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenerResult {
    #[serde(default)]
    pub quotes: Option<Vec<ScreenerQuote>>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenerQuote {
    #[serde(default)]
    pub symbol: Option<String>,
}

// ==================== quoteSummary ====================

#[derive(Debug, Deserialize)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummaryEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct QuoteSummaryEnvelope {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    #[serde(default)]
    pub price: Option<PriceModule>,
    #[serde(default)]
    pub summary_detail: Option<SummaryDetailModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    #[serde(default)]
    pub regular_market_price: Option<FormattedValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetailModule {
    #[serde(default)]
    pub fifty_two_week_high: Option<FormattedValue>,
    #[serde(default)]
    pub fifty_two_week_low: Option<FormattedValue>,
    // Yahoo spells this one trailingPE, not trailingPe
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<FormattedValue>,
}

/// Yahoo wraps numbers as `{"raw": 123.45, "fmt": "123.45"}`; an empty object
/// `{}` stands for a missing value.
#[derive(Debug, Deserialize)]
pub struct FormattedValue {
    #[serde(default)]
    pub raw: Option<f64>,
}

// ==================== chart ====================

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: ChartIndicators,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

/// Parallel arrays indexed like `timestamp`; individual entries may be null.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_screener_response() {
        let body = r#"{
            "finance": {
                "result": [{
                    "start": 0,
                    "count": 2,
                    "quotes": [
                        {"symbol": "AAPL", "regularMarketPrice": {"raw": 190.1}},
                        {"symbol": "MSFT"},
                        {"shortName": "No Symbol Inc."}
                    ]
                }],
                "error": null
            }
        }"#;

        let parsed: ScreenerResponse = serde_json::from_str(body).unwrap();
        let quotes = parsed.finance.result.unwrap().remove(0).quotes.unwrap();
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].symbol.as_deref(), Some("AAPL"));
        assert!(quotes[2].symbol.is_none());
    }

    #[test]
    fn parses_quote_summary_with_sparse_modules() {
        let body = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"regularMarketPrice": {"raw": 150.25, "fmt": "150.25"}},
                    "summaryDetail": {
                        "fiftyTwoWeekHigh": {"raw": 199.62},
                        "fiftyTwoWeekLow": {},
                        "trailingPE": {"raw": 29.1}
                    }
                }],
                "error": null
            }
        }"#;

        let parsed: QuoteSummaryResponse = serde_json::from_str(body).unwrap();
        let result = parsed.quote_summary.result.unwrap().remove(0);
        let price = result.price.unwrap().regular_market_price.unwrap();
        assert_eq!(price.raw, Some(150.25));

        let detail = result.summary_detail.unwrap();
        assert_eq!(detail.fifty_two_week_high.unwrap().raw, Some(199.62));
        // empty object means "no value"
        assert_eq!(detail.fifty_two_week_low.unwrap().raw, None);
        // the all-caps PE suffix must round-trip through the rename
        assert_eq!(detail.trailing_pe.unwrap().raw, Some(29.1));
    }

    #[test]
    fn parses_chart_with_null_entries() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "AAPL"},
                    "timestamp": [1714569000, 1714655400],
                    "indicators": {
                        "quote": [{
                            "open": [169.58, null],
                            "close": [null, 173.03],
                            "volume": [50000000, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        let result = parsed.chart.result.unwrap().remove(0);
        assert_eq!(result.timestamp.as_ref().unwrap().len(), 2);
        let quote = &result.indicators.quote[0];
        assert_eq!(quote.open.as_ref().unwrap()[1], None);
        assert_eq!(quote.close.as_ref().unwrap()[1], Some(173.03));
    }

    #[test]
    fn parses_empty_chart_result() {
        let body = r#"{"chart": {"result": null, "error": {"code": "Not Found"}}}"#;
        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.chart.result.is_none());
    }
}
