// Issue fetching: paginated issue listing via the GitHub REST API.
//
// Collects the issues opened in the last N days. Pull requests also come
// back from the issues endpoint and are filtered out here, as are issues
// created before the cutoff (the `since` parameter filters on update time,
// not creation time).

use anyhow::Result;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::client::GithubClient;

/// Maximum number of pages requested per fetch (100 issues per page).
const MAX_PAGES: u32 = 10;

/// Issues requested per page (the API maximum).
const PAGE_SIZE: &str = "100";

/// The fields of a GitHub issue the digest needs.
///
/// Fields are never null: a missing body is normalized to the empty string
/// before the issue leaves this module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub comments: u32,
    pub html_url: String,
    pub labels: Vec<String>,
    pub user: String,
}

/// Fetch issues created in the last `days` days, newest first.
///
/// Pagination stops at the first empty page or after `MAX_PAGES`. An HTTP
/// failure part-way through is logged and ends the fetch early; whatever was
/// collected up to that point is returned.
pub async fn fetch_recent_issues(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    days: i64,
) -> Result<Vec<Issue>> {
    let cutoff = Duration::try_days(days)
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .ok_or_else(|| anyhow::anyhow!("Day window out of range: {days}"))?;
    let since = cutoff.to_rfc3339_opts(SecondsFormat::Secs, true);
    let path = format!("/repos/{owner}/{repo}/issues");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let mut issues = Vec::new();

    for page in 1..=MAX_PAGES {
        spinner.set_message(format!("Fetching page {page} of {owner}/{repo} issues..."));

        let page_str = page.to_string();
        let params = [
            ("state", "all"),
            ("since", since.as_str()),
            ("per_page", PAGE_SIZE),
            ("sort", "created"),
            ("direction", "desc"),
            ("page", page_str.as_str()),
        ];

        let items: Vec<RawIssue> = match client.get_json(&path, &params).await {
            Ok(items) => items,
            Err(e) => {
                warn!(page, error = %e, "Issue fetch failed, keeping what was collected");
                break;
            }
        };

        if items.is_empty() {
            break;
        }

        let page_len = items.len();
        for item in items {
            // Pull requests show up on the issues endpoint too
            if item.pull_request.is_some() {
                continue;
            }
            if item.created_at < cutoff {
                continue;
            }
            issues.push(item.into_issue());
        }

        debug!(
            page,
            page_items = page_len,
            total_collected = issues.len(),
            "Fetched page of issues"
        );
    }

    spinner.finish_and_clear();

    info!(
        count = issues.len(),
        repo = %format!("{owner}/{repo}"),
        days,
        "Collected issues for digest"
    );

    Ok(issues)
}

// -- Serde types for GET /repos/{owner}/{repo}/issues --

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
    title: String,
    body: Option<String>,
    created_at: DateTime<Utc>,
    comments: u32,
    html_url: String,
    #[serde(default)]
    labels: Vec<RawLabel>,
    user: Option<RawUser>,
    pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    login: String,
}

impl RawIssue {
    fn into_issue(self) -> Issue {
        Issue {
            number: self.number,
            title: self.title,
            body: self.body.unwrap_or_default(),
            created_at: self.created_at,
            comments: self.comments,
            html_url: self.html_url,
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            user: self.user.map(|u| u.login).unwrap_or_default(),
        }
    }
}
