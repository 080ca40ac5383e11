//! Axum route handlers for the trial/paywall API.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::accounts::handlers::fetch_account;
use crate::errors::AppError;
use crate::metering::policy::{FeaturePolicy, TrialStatus};
use crate::state::AppState;

/// GET /api/v1/accounts/:id/features/:feature
///
/// Current trial standing, without consuming a use.
pub async fn handle_status(
    State(state): State<AppState>,
    Path((account_id, feature)): Path<(Uuid, String)>,
) -> Result<Json<TrialStatus>, AppError> {
    let account = fetch_account(&state, account_id).await?;
    let policy = FeaturePolicy::new(feature, state.config.free_trial_limit);
    Ok(Json(policy.evaluate(&account)))
}

/// POST /api/v1/accounts/:id/features/:feature/consume
///
/// Consumes one use, or answers 402 once the trial is exhausted and the
/// feature is unpaid.
pub async fn handle_consume(
    State(state): State<AppState>,
    Path((account_id, feature)): Path<(Uuid, String)>,
) -> Result<Json<TrialStatus>, AppError> {
    let policy = FeaturePolicy::new(feature, state.config.free_trial_limit);
    let status = policy.consume(&state.db, account_id).await?;
    Ok(Json(status))
}
