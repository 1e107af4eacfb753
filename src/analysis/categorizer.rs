// Issue categorization: label hints first, keyword scoring second.
//
// A label that names a category (e.g. "bug", "enhancement", "docs") settles
// the question with high confidence. Without one, each category scores one
// point per keyword found anywhere in the title or body, and the best score
// wins. Categorization depends only on the issue itself, never on its
// neighbours in the batch.

use tracing::debug;

use super::lexicon::{CATEGORY_KEYWORDS, LABEL_MAPPING};
use super::models::{CategorizedIssue, Category, Confidence};
use crate::github::issues::Issue;

/// Assign a single category and confidence tier to an issue.
pub fn categorize_issue(issue: &Issue) -> CategorizedIssue {
    let (category, confidence) = classify(issue);
    CategorizedIssue {
        issue: issue.clone(),
        category,
        confidence,
    }
}

/// Categorize a batch, preserving input order one-to-one.
pub fn categorize_all(issues: &[Issue]) -> Vec<CategorizedIssue> {
    issues.iter().map(categorize_issue).collect()
}

fn classify(issue: &Issue) -> (Category, Confidence) {
    if let Some(category) = category_from_labels(&issue.labels) {
        debug!(issue = issue.number, category = %category, "Categorized by label");
        return (category, Confidence::High);
    }

    let text = format!("{} {}", issue.title, issue.body).to_lowercase();
    let scores = keyword_scores(&text);

    // First maximum wins, so ties go to the earlier category
    let mut best: Option<(Category, u32)> = None;
    for &(category, score) in &scores {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((category, score));
        }
    }

    match best {
        Some((category, score)) if score > 0 => (category, Confidence::from_keyword_score(score)),
        _ => (Category::Other, Confidence::Low),
    }
}

/// The first label (in label order) containing a mapped key decides the category.
pub fn category_from_labels(labels: &[String]) -> Option<Category> {
    labels.iter().find_map(|label| {
        let label = label.to_lowercase();
        LABEL_MAPPING
            .iter()
            .find(|(key, _)| label.contains(key))
            .map(|&(_, category)| category)
    })
}

/// Per-category keyword hits over lowercased text, in tie-break order.
///
/// A keyword counts once no matter how often it repeats.
pub fn keyword_scores(text: &str) -> Vec<(Category, u32)> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|&(category, keywords)| {
            let hits = keywords.iter().filter(|kw| text.contains(*kw)).count() as u32;
            (category, hits)
        })
        .collect()
}
