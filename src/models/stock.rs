//! Stock response models
//!
//! Response schemas for the two stock endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily closing price in a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Calendar date (ISO 8601, `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Closing price for that date, always finite
    pub close_price: f64,
}

/// Detailed metrics for a single stock symbol.
///
/// Every numeric field is either a finite number or `null`; the provider's
/// missing-data markers never leak through as sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDetails {
    /// Ticker symbol, always uppercase
    pub symbol: String,
    /// Today's opening price, if the provider has a bar for today
    pub current_open_price: Option<f64>,
    /// Today's closing (or latest) price, if the provider has a bar for today
    pub current_close_price: Option<f64>,
    /// 52-week high
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low
    pub fifty_two_week_low: Option<f64>,
    /// Trailing price/earnings ratio
    pub pe_ratio: Option<f64>,
    /// Daily closes for the trailing ~6 months, chronological, may be empty
    pub last_six_months_prices: Vec<HistoricalPrice>,
}

/// Query parameters for the symbol listing endpoint.
///
/// Declared as plain integers so range validation can happen in the handler
/// with a descriptive message instead of a bare deserialization error.
#[derive(Debug, Deserialize)]
pub struct SymbolsQuery {
    /// Page number (1-based), defaults to 1
    pub page: Option<i64>,
    /// Symbols per page (max 250), defaults to 100
    pub page_size: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_details_serialization_round_trips() {
        let details = StockDetails {
            symbol: "AAPL".to_string(),
            current_open_price: Some(169.58),
            current_close_price: Some(173.03),
            fifty_two_week_high: Some(199.62),
            fifty_two_week_low: None,
            pe_ratio: Some(29.1),
            last_six_months_prices: vec![
                HistoricalPrice {
                    date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                    close_price: 169.3,
                },
                HistoricalPrice {
                    date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                    close_price: 173.03,
                },
            ],
        };

        let json = serde_json::to_string(&details).unwrap();
        let reparsed: StockDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, details);
    }

    #[test]
    fn dates_serialize_as_iso_8601() {
        let price = HistoricalPrice {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            close_price: 169.3,
        };
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json["date"], "2024-05-01");
    }

    #[test]
    fn absent_metrics_serialize_as_null() {
        let details = StockDetails {
            symbol: "XELB".to_string(),
            current_open_price: None,
            current_close_price: None,
            fifty_two_week_high: None,
            fifty_two_week_low: None,
            pe_ratio: None,
            last_six_months_prices: Vec::new(),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert!(json["pe_ratio"].is_null());
        assert_eq!(json["last_six_months_prices"].as_array().unwrap().len(), 0);
    }
}
