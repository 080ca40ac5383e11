use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One uploaded resume. Rows are immutable — a re-upload creates a new row,
/// so in-flight ranking requests keep a consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub candidate_name: String,
    pub filename: String,
    pub raw_text: String,
    pub created_at: DateTime<Utc>,
}
