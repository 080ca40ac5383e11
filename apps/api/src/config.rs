use anyhow::{Context, Result};

use crate::analysis::classifier::DEFAULT_MIN_HITS;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Optional newline-delimited vocabulary file overriding the built-in
    /// technical term list.
    pub tech_vocab_path: Option<String>,
    /// Distinct vocabulary hits needed to call a JD technical.
    pub tech_min_hits: usize,
    /// Free uses per feature before the paywall closes.
    pub free_trial_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tech_vocab_path: std::env::var("TECH_VOCAB_PATH").ok(),
            tech_min_hits: std::env::var("TECH_MIN_HITS")
                .unwrap_or_else(|_| DEFAULT_MIN_HITS.to_string())
                .parse::<usize>()
                .context("TECH_MIN_HITS must be a non-negative integer")?,
            free_trial_limit: std::env::var("FREE_TRIAL_LIMIT")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<i64>()
                .context("FREE_TRIAL_LIMIT must be a non-negative integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
