pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Routes without the HTTP middleware layers.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/render", post(routes::render::render))
        .route("/api/clozes/scan", post(routes::clozes::scan))
        .route("/api/clozes/prepare", post(routes::clozes::prepare))
        .route("/api/clozes/sync", post(routes::clozes::sync))
}

async fn health_check() -> &'static str {
    "OK"
}
