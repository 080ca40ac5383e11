mod accounts;
mod analysis;
mod config;
mod db;
mod documents;
mod errors;
mod metering;
mod metrics;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::classifier::RoleClassifier;
use crate::analysis::matcher::MatchEngine;
use crate::analysis::similarity::BlendWeights;
use crate::config::Config;
use crate::db::create_pool;
use crate::documents::extraction::DefaultExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATRact API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    // Build the matching engine: default blend weights, classifier from
    // config (vocab file override + hit threshold)
    let classifier = match &config.tech_vocab_path {
        Some(path) => RoleClassifier::from_vocab_file(Path::new(path), config.tech_min_hits)?,
        None => RoleClassifier::with_default_vocab(config.tech_min_hits),
    };
    let engine = Arc::new(MatchEngine::new(classifier, BlendWeights::default()));
    info!("Match engine initialized (min technical hits: {})", config.tech_min_hits);

    // Upload-to-text extractor (PDF + plain text)
    let extractor = Arc::new(DefaultExtractor);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        engine,
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
