// Cache status display: file size, cached issue count, last fetch time.

use anyhow::Result;
use std::path::Path;

use crate::db::queries::{ISSUE_COUNT, LAST_FETCH_AT};

/// Display cache status to the terminal.
pub async fn show(db_path: &str) -> Result<()> {
    if !Path::new(db_path).exists() {
        println!("Issue cache: not created yet");
        println!("\nRun `feedback-digest fetch` to fetch this week's issues.");
        return Ok(());
    }

    let db = crate::db::open_sqlite(db_path)?;

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Issue cache: {} ({})", db_path, file_size);
    println!("Tables: {}", db.table_count().await?);

    match db.get_fetch_state(LAST_FETCH_AT).await? {
        Some(last_fetch) => {
            let count = db
                .get_fetch_state(ISSUE_COUNT)
                .await?
                .unwrap_or_else(|| "0".to_string());
            println!("Cached issues: {count}");
            println!("Last fetch: {last_fetch}");
        }
        None => {
            println!("Last fetch: never");
            println!("  Run `feedback-digest fetch` to populate the cache");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
