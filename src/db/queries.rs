// Database queries: reads and writes for the issue cache.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::github::issues::Issue;

/// fetch_state key holding the time of the last saved snapshot.
pub const LAST_FETCH_AT: &str = "last_fetch_at";

/// fetch_state key holding the number of issues in the snapshot.
pub const ISSUE_COUNT: &str = "issue_count";

// --- Fetch state ---

/// Get a fetch state value by key (e.g., "last_fetch_at").
pub fn get_fetch_state(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM fetch_state WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set a fetch state value (upsert).
pub fn set_fetch_state(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO fetch_state (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

// --- Issues ---

/// Replace the cached snapshot with `issues`, keeping their order.
///
/// Runs in one transaction, so a failure leaves the previous snapshot intact.
pub fn replace_issues(conn: &Connection, issues: &[Issue]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute("DELETE FROM issues", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO issues (number, position, title, body, created_at, comments, html_url, labels, user)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for (position, issue) in issues.iter().enumerate() {
            let number = i64::try_from(issue.number)
                .with_context(|| format!("Issue number {} too large to cache", issue.number))?;
            let labels_json = serde_json::to_string(&issue.labels)?;
            stmt.execute(params![
                number,
                position as i64,
                issue.title,
                issue.body,
                issue.created_at.to_rfc3339(),
                issue.comments,
                issue.html_url,
                labels_json,
                issue.user,
            ])
            .with_context(|| format!("Failed to cache issue #{}", issue.number))?;
        }
    }

    set_fetch_state(&tx, LAST_FETCH_AT, &Utc::now().to_rfc3339())?;
    set_fetch_state(&tx, ISSUE_COUNT, &issues.len().to_string())?;

    tx.commit()?;
    Ok(())
}

/// Load the cached snapshot in its saved order.
pub fn load_issues(conn: &Connection) -> Result<Vec<Issue>> {
    let mut stmt = conn.prepare(
        "SELECT number, title, body, created_at, comments, html_url, labels, user
         FROM issues
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(IssueRow {
            number: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created_at: row.get(3)?,
            comments: row.get(4)?,
            html_url: row.get(5)?,
            labels: row.get(6)?,
            user: row.get(7)?,
        })
    })?;

    let mut issues = Vec::new();
    for row in rows {
        issues.push(row?.into_issue()?);
    }
    Ok(issues)
}

/// Raw column values, converted after the row borrow ends.
struct IssueRow {
    number: i64,
    title: String,
    body: String,
    created_at: String,
    comments: u32,
    html_url: String,
    labels: String,
    user: String,
}

impl IssueRow {
    fn into_issue(self) -> Result<Issue> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .with_context(|| format!("Bad created_at for cached issue #{}", self.number))?
            .with_timezone(&Utc);
        let labels: Vec<String> = serde_json::from_str(&self.labels)
            .with_context(|| format!("Bad labels for cached issue #{}", self.number))?;

        let number = u64::try_from(self.number)
            .with_context(|| format!("Bad issue number in cache: {}", self.number))?;

        Ok(Issue {
            number,
            title: self.title,
            body: self.body,
            created_at,
            comments: self.comments,
            html_url: self.html_url,
            labels,
            user: self.user,
        })
    }
}
