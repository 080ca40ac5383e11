//! Axum route handlers for the resume document store.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume: ResumeRow,
    pub extracted_chars: usize,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRow>,
    pub total: usize,
}

/// POST /api/v1/resumes
///
/// Multipart upload: a `name` field (candidate name) and a `file` field.
/// Extraction runs before anything touches the DB; a new row is inserted on
/// every upload (rows are immutable).
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut candidate_name: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => {
                candidate_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("invalid name field: {e}")))?,
                );
            }
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("invalid file field: {e}")))?
                        .to_vec(),
                );
            }
            _ => {} // unknown fields ignored
        }
    }

    let candidate_name = candidate_name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::Validation("'name' field is required".to_string()))?;
    let filename =
        filename.ok_or_else(|| AppError::Validation("'file' field is required".to_string()))?;
    let data = data.ok_or_else(|| AppError::Validation("'file' field is required".to_string()))?;

    let raw_text = state.extractor.extract(&filename, &data).await?;
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "no text could be extracted from {filename}"
        )));
    }

    let resume = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, candidate_name, filename, raw_text, created_at)
        VALUES ($1, $2, $3, $4, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&candidate_name)
    .bind(&filename)
    .bind(&raw_text)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Stored resume {} for '{}' ({} chars)",
        resume.id,
        candidate_name,
        raw_text.len()
    );

    Ok(Json(UploadResponse {
        extracted_chars: raw_text.chars().count(),
        resume,
    }))
}

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes =
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY created_at, id")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(ResumeListResponse {
        total: resumes.len(),
        resumes,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
///
/// Explicit delete is the only way the corpus shrinks.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(resume_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    info!("Deleted resume {resume_id}");
    Ok(Json(serde_json::json!({ "deleted": resume_id })))
}
