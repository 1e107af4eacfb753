// Digest pipeline: categorize -> {themes, quotes}.
//
// Theme extraction and quote selection both read the categorized issues and
// don't depend on each other. The batch is one week of issues, so they run
// one after the other.

use std::collections::BTreeMap;

use tracing::info;

use crate::analysis::categorizer::categorize_all;
use crate::analysis::models::{CategorizedIssue, Category, Quote, Theme};
use crate::analysis::quotes::QuoteSelector;
use crate::analysis::themes::TitleFrequencyExtractor;
use crate::analysis::traits::ThemeExtractor;
use crate::github::issues::Issue;

/// Structured pipeline output, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestData {
    /// One entry per input issue, in input order
    pub categorized: Vec<CategorizedIssue>,
    pub themes: BTreeMap<Category, Vec<Theme>>,
    pub quotes: Vec<Quote>,
}

/// Run the pipeline with the default extractor and selector.
pub fn run(issues: &[Issue]) -> DigestData {
    run_with(issues, &TitleFrequencyExtractor::default(), &QuoteSelector::default())
}

/// Run the pipeline with a caller-supplied theme extractor and quote selector.
pub fn run_with(
    issues: &[Issue],
    extractor: &dyn ThemeExtractor,
    selector: &QuoteSelector,
) -> DigestData {
    let categorized = categorize_all(issues);
    let themes = extractor.extract(&categorized);
    let quotes = selector.select(&categorized);

    info!(
        issues = categorized.len(),
        themed_categories = themes.len(),
        quotes = quotes.len(),
        "Digest analysis complete"
    );

    DigestData {
        categorized,
        themes,
        quotes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let data = run(&[]);
        assert!(data.categorized.is_empty());
        assert!(data.themes.is_empty());
        assert!(data.quotes.is_empty());
    }
}
