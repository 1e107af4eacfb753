// Markdown digest rendering.
//
// Turns the pipeline's structured output into the weekly report: category
// breakdown with inline themes, the most-discussed issues, and the selected
// user quotes. Rendering is deterministic for a given `generated_at`.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};

use crate::analysis::models::{CategorizedIssue, Category};
use crate::pipeline::DigestData;

/// Number of most-commented issues listed in the digest.
const TOP_DISCUSSED: usize = 3;

/// Render the digest as a markdown document.
///
/// `repo` is shown in the heading; `days` sets the start of the reported period.
pub fn generate_digest(
    data: &DigestData,
    repo: &str,
    generated_at: DateTime<Utc>,
    days: i64,
) -> String {
    // An unrepresentable window collapses to the generation date
    let period_start = Duration::try_days(days)
        .and_then(|window| generated_at.checked_sub_signed(window))
        .unwrap_or(generated_at);
    let total = data.categorized.len();

    let mut counts: HashMap<Category, usize> = HashMap::new();
    for item in &data.categorized {
        *counts.entry(item.category).or_insert(0) += 1;
    }

    let mut md = String::new();

    // writeln! into a String cannot fail
    let _ = writeln!(md, "# {repo} Weekly Feedback Digest");
    let _ = writeln!(
        md,
        "**Period:** {} - {}",
        period_start.format("%B %d"),
        generated_at.format("%B %d, %Y")
    );
    md.push('\n');

    md.push_str("## Summary\n");
    let _ = writeln!(md, "**Total issues opened:** {total}");
    md.push('\n');

    md.push_str("## Category Breakdown\n\n");
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let percentage = count as f64 / total as f64 * 100.0;
        let themes = data
            .themes
            .get(&category)
            .map(|themes| {
                let joined = themes
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(" — *{joined}*")
            })
            .unwrap_or_default();
        let _ = writeln!(
            md,
            "- {}: **{count}** ({percentage:.0}%){themes}",
            category.label()
        );
    }
    md.push('\n');

    md.push_str("## Top 3 Most-Discussed Issues\n\n");
    for (i, item) in most_discussed(&data.categorized, TOP_DISCUSSED)
        .into_iter()
        .enumerate()
    {
        let issue = &item.issue;
        let _ = writeln!(md, "### {}. [{}]({})", i + 1, issue.title, issue.html_url);
        let _ = writeln!(md, "- **Comments:** {}", issue.comments);
        let _ = writeln!(md, "- **Category:** {}", item.category.title());
        let _ = writeln!(md, "- **Opened by:** @{}", issue.user);
        md.push('\n');
    }

    md.push_str("## Representative User Feedback\n\n");
    if data.quotes.is_empty() {
        md.push_str("*No representative quotes extracted this week.*\n");
    } else {
        for quote in &data.quotes {
            let _ = writeln!(md, "> \"{}\"", quote.text);
            let _ = writeln!(
                md,
                "> — Issue #{} ({})",
                quote.issue_number,
                quote.category.spaced()
            );
            md.push('\n');
        }
    }

    md.push_str("---\n");
    let _ = write!(
        md,
        "*Generated on {} by feedback-digest*",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    md
}

/// The `n` issues with the most comments. Ties keep input order.
pub fn most_discussed(issues: &[CategorizedIssue], n: usize) -> Vec<&CategorizedIssue> {
    let mut sorted: Vec<&CategorizedIssue> = issues.iter().collect();
    sorted.sort_by(|a, b| b.issue.comments.cmp(&a.issue.comments));
    sorted.truncate(n);
    sorted
}

/// Write a rendered digest to disk, creating parent directories if needed.
pub fn write_digest(markdown: &str, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory for {output_path}"))?;
        }
    }

    std::fs::write(output_path, markdown)
        .with_context(|| format!("Failed to write digest to {output_path}"))?;

    Ok(())
}
