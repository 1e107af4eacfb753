// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::traits::Database;
use crate::github::issues::Issue;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn get_fetch_state(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::get_fetch_state(&conn, key)
    }

    async fn save_issues(&self, issues: &[Issue]) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::replace_issues(&conn, issues)
    }

    async fn load_issues(&self) -> Result<Vec<Issue>> {
        let conn = self.conn.lock().await;
        super::queries::load_issues(&conn)
    }
}
