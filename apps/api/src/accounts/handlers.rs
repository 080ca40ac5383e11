//! Axum route handlers for the Accounts API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::account::AccountRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    /// Defaults to "user". Admins see the analytics dashboard.
    pub role: Option<String>,
}

/// POST /api/v1/accounts
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<AccountRow>, AppError> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation(
            "a valid email address is required".to_string(),
        ));
    }

    let role = request.role.unwrap_or_else(|| "user".to_string());
    if role != "user" && role != "admin" {
        return Err(AppError::Validation(format!(
            "role must be 'user' or 'admin', got '{role}'"
        )));
    }

    let account = sqlx::query_as::<_, AccountRow>(
        r#"
        INSERT INTO accounts (id, email, role, paid_features, trial_uses, created_at)
        VALUES ($1, $2, $3, '{}', '{}'::jsonb, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&role)
    .fetch_one(&state.db)
    .await?;

    info!("Created {} account {} ({})", role, account.id, email);
    Ok(Json(account))
}

/// GET /api/v1/accounts/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountRow>, AppError> {
    let account = fetch_account(&state, account_id).await?;
    Ok(Json(account))
}

pub async fn fetch_account(state: &AppState, account_id: Uuid) -> Result<AccountRow, AppError> {
    sqlx::query_as::<_, AccountRow>("SELECT * FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {account_id} not found")))
}
