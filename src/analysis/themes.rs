// Title word-frequency theme extraction.
//
// Only titles are used: bodies are dominated by template text and logs,
// while titles are short and written by hand. Within each category, title
// words of four or more letters are counted after stopword removal, and the
// most frequent words become that category's themes.
//
// Counting runs over the flat token stream, so a title that repeats a word
// contributes once per repetition.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::lexicon::{STOPWORDS, THEME_TOKEN};
use super::models::{CategorizedIssue, Category, Theme};
use super::traits::ThemeExtractor;

/// Frequency-based theme extractor over issue titles.
pub struct TitleFrequencyExtractor {
    /// How many top-ranked words to consider per category
    pub top_n: usize,
    /// How many themes to keep per category after filtering
    pub max_themes: usize,
    /// Minimum occurrences for a word to count as a theme
    pub min_count: usize,
}

impl Default for TitleFrequencyExtractor {
    fn default() -> Self {
        Self {
            top_n: 5,
            max_themes: 3,
            min_count: 2,
        }
    }
}

impl ThemeExtractor for TitleFrequencyExtractor {
    fn extract(&self, issues: &[CategorizedIssue]) -> BTreeMap<Category, Vec<Theme>> {
        let mut groups: BTreeMap<Category, Vec<&CategorizedIssue>> = BTreeMap::new();
        for item in issues {
            groups.entry(item.category).or_default().push(item);
        }

        let mut themes_by_category = BTreeMap::new();

        for (category, items) in groups {
            let mut counter = WordCounter::default();
            for item in items {
                let title = item.issue.title.to_lowercase();
                for token in title_tokens(&title) {
                    counter.add(token);
                }
            }

            let themes: Vec<Theme> = counter
                .most_common(self.top_n)
                .into_iter()
                .filter(|(_, count)| *count >= self.min_count)
                .take(self.max_themes)
                .map(|(word, count)| Theme { word, count })
                .collect();

            if !themes.is_empty() {
                debug!(category = %category, themes = themes.len(), "Extracted themes");
                themes_by_category.insert(category, themes);
            }
        }

        themes_by_category
    }
}

/// Candidate theme words from an already-lowercased title, in order.
pub fn title_tokens(lower_title: &str) -> impl Iterator<Item = &str> {
    THEME_TOKEN
        .find_iter(lower_title)
        .map(|m| m.as_str())
        .filter(|word| !STOPWORDS.contains(*word))
}

/// Frequency counter that remembers first-seen order for ranking ties.
#[derive(Default)]
struct WordCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl WordCounter {
    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Top `n` words by count, descending; ties keep first-seen order.
    fn most_common(mut self, n: usize) -> Vec<(String, usize)> {
        // sort_by is stable, which is what preserves first-seen order on ties
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(n);
        self.entries
    }
}
