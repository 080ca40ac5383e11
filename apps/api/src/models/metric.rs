use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-micro-app usage counters backing the admin analytics dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppMetricRow {
    pub app_name: String,
    pub visits: i64,
    pub conversions: i64,
    pub updated_at: DateTime<Utc>,
}
