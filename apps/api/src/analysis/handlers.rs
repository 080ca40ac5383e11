//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::matcher::{AnalysisReport, CandidateDoc, RankedCandidate};
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub jd_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct MatchJobRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchJobResponse {
    pub ranked_candidates: Vec<RankedCandidate>,
    pub corpus_size: usize,
}

/// POST /api/analysis/analyze
///
/// Compares one JD against one resume text, both inline in the request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let report = state.engine.analyze(&request.jd_text, &request.resume_text)?;
    Ok(Json(AnalyzeResponse { report }))
}

/// POST /api/analysis/match-job
///
/// Ranks every stored resume against the JD. The corpus is snapshotted with
/// a single fetch before vectorization, so concurrent uploads cannot produce
/// inconsistent statistics within one request.
pub async fn handle_match_job(
    State(state): State<AppState>,
    Json(request): Json<MatchJobRequest>,
) -> Result<Json<MatchJobResponse>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes ORDER BY created_at, id",
    )
    .fetch_all(&state.db)
    .await?;

    let candidates: Vec<CandidateDoc> = rows
        .into_iter()
        .map(|row| CandidateDoc {
            id: row.id,
            name: row.candidate_name,
            text: row.raw_text,
        })
        .collect();

    let ranked_candidates = state
        .engine
        .match_against_corpus(&request.jd_text, &candidates)?;

    Ok(Json(MatchJobResponse {
        ranked_candidates,
        corpus_size: candidates.len(),
    }))
}
