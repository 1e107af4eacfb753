// Database layer: SQLite cache for fetched issues.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever DIGEST_DB_PATH points
// (defaults to ./feedback-digest.db).

pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use traits::Database;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Open (or create) the database and create tables.
///
/// This is the entry point for any command that writes to the cache.
pub fn initialize(db_path: &str) -> Result<Connection> {
    // Create parent directories if needed
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    // WAL keeps readers (status) from blocking on a concurrent fetch
    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open an existing database (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Issue cache not found at {}. Run `feedback-digest fetch` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    Ok(conn)
}

/// Create or open the cache and wrap it behind the `Database` trait.
pub fn initialize_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    let conn = initialize(db_path)?;
    Ok(Arc::new(sqlite::SqliteDatabase::new(conn)))
}

/// Open an existing cache behind the `Database` trait.
pub fn open_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    let conn = open(db_path)?;
    Ok(Arc::new(sqlite::SqliteDatabase::new(conn)))
}
