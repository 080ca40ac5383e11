use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A portal account. Trial usage lives server-side on this row — counters
/// are never client-trusted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub email: String,
    /// "user" | "admin"
    pub role: String,
    /// Features unlocked by payment; not metered.
    pub paid_features: Vec<String>,
    /// feature → consumed free-trial uses.
    pub trial_uses: Json<HashMap<String, i64>>,
    pub created_at: DateTime<Utc>,
}

impl AccountRow {
    pub fn has_paid(&self, feature: &str) -> bool {
        self.paid_features.iter().any(|f| f == feature)
    }

    pub fn trial_used(&self, feature: &str) -> i64 {
        self.trial_uses.get(feature).copied().unwrap_or(0)
    }
}
