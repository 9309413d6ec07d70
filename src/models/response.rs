//! Error response model
//!
//! Successful responses serialize their payload directly (a JSON array of
//! symbols, or a `StockDetails` object); only errors get a wrapper.

use serde::{Deserialize, Serialize};

/// Error body returned for 4xx/5xx responses.
///
/// The detail message is always generic for server errors; the underlying
/// provider error is only ever written to the server log.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
