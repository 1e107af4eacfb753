// Colored terminal output for categorized issues, themes, and quotes.
//
// The digest itself is markdown; this module is the quick look used by
// `feedback-digest categorize`.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::analysis::models::{CategorizedIssue, Category, Confidence, Quote, Theme};

/// Display categorized issues as a table, followed by per-category totals.
pub fn display_categorized(issues: &[CategorizedIssue], themes: &BTreeMap<Category, Vec<Theme>>) {
    if issues.is_empty() {
        println!("No issues to categorize. Run `feedback-digest fetch` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Categorized Issues ({}) ===", issues.len()).bold()
    );
    println!();

    println!(
        "  {:>6}  {:<16} {:<6}  {}",
        "#".dimmed(),
        "Category".dimmed(),
        "Conf".dimmed(),
        "Title".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for item in issues {
        println!(
            "  {:>6}  {:<16} {:<6}  {}",
            item.issue.number,
            colorize_category(item.category),
            colorize_confidence(item.confidence),
            super::truncate_chars(&item.issue.title, 60),
        );
    }

    println!();

    for category in Category::ALL {
        let count = issues.iter().filter(|i| i.category == category).count();
        if count == 0 {
            continue;
        }
        let theme_str = themes
            .get(&category)
            .map(|t| {
                t.iter()
                    .map(|theme| theme.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        println!(
            "  {:<22} {:>4}  {}",
            category.label(),
            count,
            theme_str.dimmed()
        );
    }
}

/// Display selected quotes with their source issue.
pub fn display_quotes(quotes: &[Quote]) {
    if quotes.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("=== Representative Quotes ({}) ===", quotes.len()).bold()
    );
    println!();

    for quote in quotes {
        let preview = super::truncate_chars(&quote.text, 140);
        println!(
            "  {} #{:<6} \"{}\"",
            format!("[{:>2}]", quote.score).yellow(),
            quote.issue_number,
            preview.dimmed(),
        );
    }
    println!();
}

/// Colorize a category name.
fn colorize_category(category: Category) -> colored::ColoredString {
    let name = category.as_str();
    match category {
        Category::Bug => name.red(),
        Category::FeatureRequest => name.green(),
        Category::UxConfusion => name.yellow(),
        Category::Documentation => name.blue(),
        Category::Other => name.dimmed(),
    }
}

/// Colorize a confidence tier.
fn colorize_confidence(confidence: Confidence) -> colored::ColoredString {
    let name = confidence.as_str();
    match confidence {
        Confidence::High => name.bold(),
        Confidence::Medium => name.normal(),
        Confidence::Low => name.dimmed(),
    }
}
