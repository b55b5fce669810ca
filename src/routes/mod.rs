mod bank_clients;
mod health;
mod swagger;
use health::health_checker_handler;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::ledger::Ledger;
use crate::{AppState, Config};

use axum::{routing::get, Router};
use std::error::Error;
use std::sync::Arc;

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let config = Config::init();
    info!("Mirroring clients to {}", config.csv_path);
    let ledger = Ledger::new(&config.csv_path);
    let state = Arc::new(AppState { ledger, config });
    Ok(build_router(state))
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .nest("/api/BankClients", bank_clients::bank_client_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
