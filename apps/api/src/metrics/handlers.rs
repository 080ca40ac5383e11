//! Axum route handlers for app metrics.
//!
//! Upsert semantics: the first visit/conversion for an app creates its row.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::metric::AppMetricRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MetricsListResponse {
    pub metrics: Vec<AppMetricRow>,
}

/// GET /api/v1/metrics
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<MetricsListResponse>, AppError> {
    let metrics =
        sqlx::query_as::<_, AppMetricRow>("SELECT * FROM app_metrics ORDER BY app_name")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(MetricsListResponse { metrics }))
}

/// POST /api/v1/metrics/:app_name/visit
pub async fn handle_record_visit(
    State(state): State<AppState>,
    Path(app_name): Path<String>,
) -> Result<Json<AppMetricRow>, AppError> {
    record(&state, &app_name, Counter::Visits).await
}

/// POST /api/v1/metrics/:app_name/conversion
pub async fn handle_record_conversion(
    State(state): State<AppState>,
    Path(app_name): Path<String>,
) -> Result<Json<AppMetricRow>, AppError> {
    record(&state, &app_name, Counter::Conversions).await
}

enum Counter {
    Visits,
    Conversions,
}

async fn record(
    state: &AppState,
    app_name: &str,
    counter: Counter,
) -> Result<Json<AppMetricRow>, AppError> {
    let app_name = app_name.trim();
    if app_name.is_empty() {
        return Err(AppError::Validation("app_name cannot be empty".to_string()));
    }

    let sql = match counter {
        Counter::Visits => {
            r#"
            INSERT INTO app_metrics (app_name, visits, conversions, updated_at)
            VALUES ($1, 1, 0, now())
            ON CONFLICT (app_name)
            DO UPDATE SET visits = app_metrics.visits + 1, updated_at = now()
            RETURNING *
            "#
        }
        Counter::Conversions => {
            r#"
            INSERT INTO app_metrics (app_name, visits, conversions, updated_at)
            VALUES ($1, 0, 1, now())
            ON CONFLICT (app_name)
            DO UPDATE SET conversions = app_metrics.conversions + 1, updated_at = now()
            RETURNING *
            "#
        }
    };

    let metric = sqlx::query_as::<_, AppMetricRow>(sql)
        .bind(app_name)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(metric))
}
