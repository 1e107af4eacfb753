// GitHub REST client: thin reqwest wrapper for JSON GET requests.
//
// Issue listing works unauthenticated, but the anonymous rate limit is 60
// requests per hour. Setting GITHUB_TOKEN raises that to 5000.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// HTTP client for the GitHub REST API.
pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// Pass a different URL for testing or GitHub Enterprise instances.
    /// When `token` is set, every request carries it as a bearer token.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("GITHUB_TOKEN contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("feedback-digest/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to an API path and deserialize the JSON response.
    ///
    /// `path` starts with a slash (e.g. "/repos/owner/name/issues").
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "GitHub GET request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("GitHub request failed: {path}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub {path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))
    }
}
