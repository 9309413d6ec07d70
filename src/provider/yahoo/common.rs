//! Yahoo Finance API constants

/// Cookie bootstrap endpoint (responds 404 but sets the session cookie)
pub const YAHOO_COOKIE_URL: &str = "https://fc.yahoo.com";
/// Crumb endpoint, requires the session cookie
pub const YAHOO_CRUMB_API: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
/// Equity screener API (POST, crumb-authenticated)
pub const YAHOO_SCREENER_API: &str = "https://query1.finance.yahoo.com/v1/finance/screener";
/// Per-symbol snapshot API (crumb-authenticated)
pub const YAHOO_QUOTE_SUMMARY_API: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
/// Historical OHLC chart API
pub const YAHOO_CHART_API: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Browser-like User-Agent; Yahoo rejects the default reqwest one
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
