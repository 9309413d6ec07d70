//! Stock endpoint handlers
//!
//! Validate request parameters, call the stock service and translate its
//! typed errors into HTTP responses. Only two error kinds ever reach a
//! client: 404 for unknown symbols and a generic 500 for everything else.

use actix_web::{web, HttpResponse, Result};

use crate::handlers::AppState;
use crate::models::{ErrorResponse, SymbolsQuery};
use crate::provider::ProviderError;
use crate::services::stock_service;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 100;
const MAX_PAGE_SIZE: i64 = 250;

/// Returns a paginated list of US ticker symbols for `GET /stocks/us_symbols`.
pub async fn list_us_symbols(
    state: web::Data<AppState>,
    query: web::Query<SymbolsQuery>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    // Reject out-of-range parameters before any provider call
    if page < 1 {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("page must be greater than or equal to 1")));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        ))));
    }
    // (page - 1) * page_size must not overflow the provider offset
    if (page - 1).checked_mul(page_size).is_none() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "page is too large for the requested page_size",
        )));
    }

    log::info!(
        "Fetching US stock symbols list: page={}, page_size={}",
        page,
        page_size
    );

    match stock_service::list_us_symbols(state.provider.as_ref(), page as usize, page_size as usize)
        .await
    {
        Ok(symbols) => Ok(HttpResponse::Ok().json(symbols)),
        Err(e) => {
            log::error!("Error fetching US stock symbols: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch US stock symbols.")))
        }
    }
}

/// Returns detailed metrics for one symbol for `GET /stocks/{symbol}`.
pub async fn get_stock_details(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let symbol = path.into_inner();

    log::info!("Fetching data for symbol: {}", symbol);

    match stock_service::get_stock_details(state.provider.as_ref(), &symbol).await {
        Ok(details) => Ok(HttpResponse::Ok().json(details)),
        Err(ProviderError::NotFound) => {
            log::warn!("Symbol not found or no data: {}", symbol);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(
                "Stock symbol not found or no data available.",
            )))
        }
        Err(e) => {
            log::error!("Error fetching stock details for {}: {}", symbol, e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch stock details.")))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/stocks")
            // registered before the catch-all symbol route
            .route("/us_symbols", web::get().to(list_us_symbols))
            .route("/{symbol}", web::get().to(get_stock_details)),
    );
}
