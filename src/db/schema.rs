// Database schema: table creation.
//
// The cache holds a single snapshot of fetched issues plus a small key/value
// table for fetch metadata. Creation is idempotent.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// Idempotent, so it runs on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Most recent fetch of issues, in the order the API returned them
        CREATE TABLE IF NOT EXISTS issues (
            number INTEGER PRIMARY KEY,        -- GitHub issue number
            position INTEGER NOT NULL,         -- order within the snapshot
            title TEXT NOT NULL,
            body TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,          -- RFC 3339, UTC
            comments INTEGER NOT NULL DEFAULT 0,
            html_url TEXT NOT NULL,
            labels TEXT NOT NULL DEFAULT '[]', -- JSON array of label names
            user TEXT NOT NULL
        );

        -- Fetch metadata (last fetch time, snapshot size)
        CREATE TABLE IF NOT EXISTS fetch_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_issues_position
            ON issues(position);
        ",
    )
    .context("Failed to create database tables")?;

    Ok(())
}

/// Count the user-created tables (used by `status` to sanity-check the cache).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        assert_eq!(table_count(&conn).unwrap(), 2);
    }
}
