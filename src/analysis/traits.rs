// Theme extractor trait: swap-ready abstraction.
//
// The default implementation counts title words per category. The trait lets
// the digest swap in a different approach without touching the pipeline.

use std::collections::BTreeMap;

use super::models::{CategorizedIssue, Category, Theme};

/// Trait for surfacing recurring themes from categorized issues.
pub trait ThemeExtractor {
    /// Produce the ranked themes for each category that has any.
    /// Categories without a qualifying theme are left out of the map.
    fn extract(&self, issues: &[CategorizedIssue]) -> BTreeMap<Category, Vec<Theme>>;
}
