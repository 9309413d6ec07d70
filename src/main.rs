//! US Stock Data API
//!
//! RESTful service exposing US stock symbols and per-symbol details,
//! backed by Yahoo Finance.

mod config; // configuration loading
mod handlers; // HTTP request handlers
mod models; // response models
mod provider; // market data provider adapter
mod services; // business logic services

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::provider::yahoo::YahooProvider;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.clone()));

    log::info!("Starting US Stock Data API on {}", config.bind_addr());

    let provider =
        YahooProvider::new(&config.provider).context("failed to build Yahoo Finance client")?;
    let state = web::Data::new(AppState {
        provider: Arc::new(provider),
    });

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default()) // request logging middleware
            .app_data(state.clone())
            .configure(handlers::config) // route configuration
    })
    .bind(config.bind_addr())?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await?;
    Ok(())
}
