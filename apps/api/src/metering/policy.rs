//! Free-trial / paywall policy.
//!
//! A feature is usable when it is purchased, or while its trial counter on
//! the account row is under the limit. `consume` increments in a single
//! guarded UPDATE, so concurrent requests cannot overdraw the trial.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::account::AccountRow;

/// Per-feature paywall configuration.
#[derive(Debug, Clone)]
pub struct FeaturePolicy {
    pub feature: String,
    pub free_trial_limit: i64,
}

/// Trial standing for one account × feature pair.
#[derive(Debug, Clone, Serialize)]
pub struct TrialStatus {
    pub feature: String,
    pub used: i64,
    pub limit: i64,
    pub remaining: i64,
    pub purchased: bool,
}

impl FeaturePolicy {
    pub fn new(feature: impl Into<String>, free_trial_limit: i64) -> Self {
        Self {
            feature: feature.into(),
            free_trial_limit: free_trial_limit.max(0),
        }
    }

    /// Standing without consuming a use.
    pub fn evaluate(&self, account: &AccountRow) -> TrialStatus {
        let purchased = account.has_paid(&self.feature);
        let used = account.trial_used(&self.feature);
        TrialStatus {
            feature: self.feature.clone(),
            used,
            limit: self.free_trial_limit,
            remaining: (self.free_trial_limit - used).max(0),
            purchased,
        }
    }

    /// Consumes one use. The UPDATE's WHERE clause carries the limit check,
    /// so the increment and the gate are one atomic statement. Returns the
    /// standing after consumption, `PaymentRequired` when the trial is
    /// exhausted and the feature is unpaid, `NotFound` for unknown accounts.
    pub async fn consume(
        &self,
        pool: &PgPool,
        account_id: Uuid,
    ) -> Result<TrialStatus, AppError> {
        let updated = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts
               SET trial_uses = jsonb_set(
                       COALESCE(trial_uses, '{}'::jsonb),
                       ARRAY[$2],
                       to_jsonb(COALESCE((trial_uses->>$2)::bigint, 0) + 1))
             WHERE id = $1
               AND ($2 = ANY(paid_features)
                    OR COALESCE((trial_uses->>$2)::bigint, 0) < $3)
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(&self.feature)
        .bind(self.free_trial_limit)
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(account) => Ok(self.evaluate(&account)),
            None => {
                // Disambiguate: missing account vs closed paywall.
                let exists =
                    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1)")
                        .bind(account_id)
                        .fetch_one(pool)
                        .await?;
                if exists {
                    Err(AppError::PaymentRequired(format!(
                        "free trial for '{}' is exhausted",
                        self.feature
                    )))
                } else {
                    Err(AppError::NotFound(format!("Account {account_id} not found")))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;
    use std::collections::HashMap;

    fn account(paid: &[&str], uses: &[(&str, i64)]) -> AccountRow {
        AccountRow {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            role: "user".to_string(),
            paid_features: paid.iter().map(|f| f.to_string()).collect(),
            trial_uses: Json(
                uses.iter()
                    .map(|(f, n)| (f.to_string(), *n))
                    .collect::<HashMap<_, _>>(),
            ),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fresh_account_has_full_trial() {
        let policy = FeaturePolicy::new("resume-screening", 3);
        let status = policy.evaluate(&account(&[], &[]));
        assert_eq!(status.used, 0);
        assert_eq!(status.remaining, 3);
        assert!(!status.purchased);
    }

    #[test]
    fn test_partial_use_decrements_remaining() {
        let policy = FeaturePolicy::new("resume-screening", 3);
        let status = policy.evaluate(&account(&[], &[("resume-screening", 2)]));
        assert_eq!(status.used, 2);
        assert_eq!(status.remaining, 1);
    }

    #[test]
    fn test_exhausted_trial_remaining_is_zero_not_negative() {
        let policy = FeaturePolicy::new("resume-screening", 3);
        let status = policy.evaluate(&account(&[], &[("resume-screening", 5)]));
        assert_eq!(status.remaining, 0);
    }

    #[test]
    fn test_purchased_feature_reported() {
        let policy = FeaturePolicy::new("offer-letters", 3);
        let status = policy.evaluate(&account(&["offer-letters"], &[("offer-letters", 99)]));
        assert!(status.purchased);
    }

    #[test]
    fn test_counters_are_per_feature() {
        let policy = FeaturePolicy::new("salary-benchmark", 3);
        let status = policy.evaluate(&account(&[], &[("resume-screening", 3)]));
        assert_eq!(status.used, 0);
        assert_eq!(status.remaining, 3);
    }

    #[test]
    fn test_negative_limit_clamped_to_zero() {
        let policy = FeaturePolicy::new("resume-screening", -1);
        assert_eq!(policy.free_trial_limit, 0);
    }
}
