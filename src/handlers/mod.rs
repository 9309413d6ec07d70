pub mod health;
pub mod stock;

use actix_web::web;
use std::sync::Arc;

use crate::provider::MarketDataProvider;

/// Shared application state handed to request handlers.
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config).configure(stock::config);
}
