// Database trait: async interface for the issue cache.
//
// Implementor: SqliteDatabase (wraps rusqlite). Methods are async so a
// sync backend behind a Mutex and a native async backend fit the same
// interface; callers hold an `Arc<dyn Database>`.

use anyhow::Result;
use async_trait::async_trait;

use crate::github::issues::Issue;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Fetch state ---

    /// Get a fetch state value by key (e.g., "last_fetch_at").
    async fn get_fetch_state(&self, key: &str) -> Result<Option<String>>;

    // --- Issues ---

    /// Replace the cached issue snapshot, keeping the given order.
    async fn save_issues(&self, issues: &[Issue]) -> Result<()>;

    /// Load the cached issue snapshot in saved order (empty if never fetched).
    async fn load_issues(&self) -> Result<Vec<Issue>>;
}
