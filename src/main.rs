mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::external::kraken::KrakenProvider;
use crate::logging::{init_logging, LoggingConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; the process environment wins.
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    tracing::info!("Using upstream quote API at {}", config.api_url);
    let state = AppState {
        quote_provider: Arc::new(KrakenProvider::from_config(&config)),
    };
    let app = app::create_app(state, config.request_timeout);

    let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
        tracing::error!("Could not listen on {}: {}", config.listen_addr, e);
        e
    })?;
    tracing::info!("Starting server on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
