use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::matcher::MatchEngine;
use crate::config::Config;
use crate::documents::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Stateless matching engine, shared across requests without locking.
    pub engine: Arc<MatchEngine>,
    /// Pluggable upload-to-text seam. Default handles PDF and plain text.
    pub extractor: Arc<dyn TextExtractor>,
}
