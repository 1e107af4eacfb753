use std::env;

use anyhow::Result;

/// Default repository the digest is built for.
pub const DEFAULT_REPO: &str = "anthropics/claude-code";

/// Default reporting window in days.
pub const DEFAULT_DAYS: i64 = 7;

/// Longest reporting window accepted, from the env or the command line.
pub const MAX_DAYS: i64 = 365;

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy. Everything has a default except the
/// token, which is optional.
pub struct Config {
    /// Repository in `owner/name` form
    pub repo: String,
    /// Personal access token; raises the API rate limit when set
    pub github_token: Option<String>,
    /// GitHub REST API endpoint (defaults to https://api.github.com)
    pub api_url: String,
    /// How many days back the digest covers
    pub days: i64,
    pub db_path: String,
    /// Where the markdown digest is written
    pub output_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let days = match env::var("DIGEST_DAYS") {
            Ok(raw) => parse_days(&raw)?,
            Err(_) => DEFAULT_DAYS,
        };

        Ok(Self {
            repo: env::var("DIGEST_REPO").unwrap_or_else(|_| DEFAULT_REPO.to_string()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| crate::github::client::DEFAULT_API_URL.to_string()),
            days,
            db_path: env::var("DIGEST_DB_PATH")
                .unwrap_or_else(|_| "./feedback-digest.db".to_string()),
            output_path: env::var("DIGEST_OUTPUT")
                .unwrap_or_else(|_| "weekly_digest.md".to_string()),
        })
    }

    /// Split the configured repository into (owner, name).
    pub fn repo_parts(&self) -> Result<(&str, &str)> {
        parse_repo(&self.repo)
    }
}

/// Parse a reporting window, rejecting anything outside 1..=MAX_DAYS.
pub fn parse_days(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|d| (1..=MAX_DAYS).contains(d))
        .ok_or_else(|| {
            anyhow::anyhow!("DIGEST_DAYS must be between 1 and {MAX_DAYS} days, got {raw:?}")
        })
}

/// Parse an `owner/name` repository string.
pub fn parse_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => anyhow::bail!(
            "DIGEST_REPO must look like owner/name, got {repo:?}.\n\
             See .env.example for the available variables."
        ),
    }
}
