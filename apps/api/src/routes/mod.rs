pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{accounts, analysis, documents, metering, metrics};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API — path shape kept from the original client contract
        .route("/api/analysis/analyze", post(analysis::handlers::handle_analyze))
        .route(
            "/api/analysis/match-job",
            post(analysis::handlers::handle_match_job),
        )
        // Resume document store
        .route(
            "/api/v1/resumes",
            post(documents::handlers::handle_upload).get(documents::handlers::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(documents::handlers::handle_get).delete(documents::handlers::handle_delete),
        )
        // Accounts + trial metering
        .route("/api/v1/accounts", post(accounts::handlers::handle_create))
        .route("/api/v1/accounts/:id", get(accounts::handlers::handle_get))
        .route(
            "/api/v1/accounts/:id/features/:feature",
            get(metering::handlers::handle_status),
        )
        .route(
            "/api/v1/accounts/:id/features/:feature/consume",
            post(metering::handlers::handle_consume),
        )
        // Admin dashboard metrics
        .route("/api/v1/metrics", get(metrics::handlers::handle_list))
        .route(
            "/api/v1/metrics/:app_name/visit",
            post(metrics::handlers::handle_record_visit),
        )
        .route(
            "/api/v1/metrics/:app_name/conversion",
            post(metrics::handlers::handle_record_conversion),
        )
        .with_state(state)
}
