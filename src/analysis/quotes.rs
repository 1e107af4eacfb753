// Representative quote selection from issue bodies.
//
// Bodies are stripped of template lines, rejoined, and split into sentences.
// Sentences of quotable length that survive the boilerplate filter are
// scored against a weighted sentiment lexicon, with a small bonus for first-
// person phrasing. The highest-scoring sentences win, at most one per issue.

use std::collections::HashSet;

use tracing::debug;

use super::filters::{is_boilerplate_sentence, is_template_line};
use super::lexicon::{FIRST_PERSON, FIRST_PERSON_BONUS, SENTIMENT_WEIGHTS};
use super::models::{CategorizedIssue, Quote};

/// Picks the strongest feedback sentences across a batch of issues.
pub struct QuoteSelector {
    /// Maximum number of quotes returned
    pub max_quotes: usize,
    /// Bodies shorter than this (in chars) are skipped entirely
    pub min_body_chars: usize,
    /// Shortest sentence (in chars) worth quoting
    pub min_sentence_chars: usize,
    /// Longest sentence (in chars) still short enough to quote
    pub max_sentence_chars: usize,
    /// Sentences scoring below this are dropped
    pub min_score: u32,
}

impl Default for QuoteSelector {
    fn default() -> Self {
        Self {
            max_quotes: 5,
            min_body_chars: 50,
            min_sentence_chars: 50,
            max_sentence_chars: 350,
            min_score: 2,
        }
    }
}

impl QuoteSelector {
    /// Select up to `max_quotes` quotes, best score first, one per issue.
    ///
    /// Equal scores keep discovery order: issue order, then sentence order
    /// within a body.
    pub fn select(&self, issues: &[CategorizedIssue]) -> Vec<Quote> {
        let mut candidates: Vec<Quote> = issues
            .iter()
            .flat_map(|item| self.candidates(item))
            .collect();

        debug!(candidates = candidates.len(), "Scored quote candidates");

        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let mut seen_issues = HashSet::new();
        let mut quotes = Vec::new();
        for quote in candidates {
            if quotes.len() >= self.max_quotes {
                break;
            }
            if seen_issues.insert(quote.issue_number) {
                quotes.push(quote);
            }
        }

        quotes
    }

    /// All scored candidate sentences from one issue, in body order.
    pub fn candidates(&self, item: &CategorizedIssue) -> Vec<Quote> {
        let body = &item.issue.body;
        if body.chars().count() < self.min_body_chars {
            return Vec::new();
        }

        let clean_text = body
            .split('\n')
            .filter(|line| !is_template_line(line))
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");

        split_sentences(&clean_text)
            .into_iter()
            .map(str::trim)
            .filter(|sentence| {
                let len = sentence.chars().count();
                len >= self.min_sentence_chars && len <= self.max_sentence_chars
            })
            .filter(|sentence| !is_template_line(sentence) && !is_boilerplate_sentence(sentence))
            .filter_map(|sentence| {
                let score = score_sentiment(sentence);
                (score >= self.min_score).then(|| Quote {
                    text: sentence.to_string(),
                    issue_number: item.issue.number,
                    category: item.category,
                    score,
                })
            })
            .collect()
    }
}

/// Score a sentence for feedback value.
///
/// Each lexicon phrase found in the lowercased text adds its weight once.
/// Phrases are checked independently, so "shouldn't" also scores "should".
pub fn score_sentiment(text: &str) -> u32 {
    let lower = text.to_lowercase();

    let mut score: u32 = SENTIMENT_WEIGHTS
        .iter()
        .filter(|(phrase, _)| lower.contains(phrase))
        .map(|(_, weight)| weight)
        .sum();

    if FIRST_PERSON.is_match(&lower) {
        score += FIRST_PERSON_BONUS;
    }

    score
}

/// Split text into sentences at each whitespace run that follows `.`, `!` or `?`.
///
/// The whitespace itself is dropped; the punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..i]);
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{Category, Confidence};
    use crate::github::issues::Issue;
    use chrono::{TimeZone, Utc};

    fn categorized(number: u64, body: &str) -> CategorizedIssue {
        CategorizedIssue {
            issue: Issue {
                number,
                title: format!("Issue {number}"),
                body: body.to_string(),
                created_at: Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap(),
                comments: 0,
                html_url: format!("https://github.com/acme/tool/issues/{number}"),
                labels: vec![],
                user: "octocat".to_string(),
            },
            category: Category::Bug,
            confidence: Confidence::Medium,
        }
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("One. Two!  Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
        // No whitespace after the period means no split
        assert_eq!(split_sentences("v1.2.3 is out"), vec!["v1.2.3 is out"]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_score_sentiment_adds_each_phrase_once() {
        // "frustrated" 3 + "keeps" 2 + "every time" 2 + "love" 3 + "but" 1 + pronoun 1
        let text = "I am so frustrated that this keeps breaking every time I run it, but I love the rest of the tool.";
        assert_eq!(score_sentiment(text), 12);
    }

    #[test]
    fn test_pronoun_bonus_needs_word_boundary() {
        // "time" contains "i" and "me" but not as whole words
        assert_eq!(score_sentiment("time"), 0);
        assert_eq!(score_sentiment("Our build"), 1);
    }

    #[test]
    fn test_overlapping_phrases_both_count() {
        // "hard to" 2 + "difficult" 2
        assert_eq!(score_sentiment("hard to say, difficult"), 4);
    }

    #[test]
    fn test_short_body_is_skipped() {
        let item = categorized(1, "I love it but it is broken.");
        assert!(QuoteSelector::default().candidates(&item).is_empty());
    }

    #[test]
    fn test_template_lines_removed_before_splitting() {
        let body = "### Steps to reproduce\n\
                    OS: macOS\n\
                    I am so frustrated that this keeps breaking every time I run it, but I love the rest of the tool.";
        let quotes = QuoteSelector::default().candidates(&categorized(1, body));
        assert_eq!(quotes.len(), 1);
        assert!(quotes[0].text.starts_with("I am so frustrated"));
        assert_eq!(quotes[0].score, 12);
    }

    #[test]
    fn test_select_keeps_best_quote_per_issue() {
        let body_a = "The permission prompt is confusing and I never know which option to pick here. \
                      I am so frustrated that this keeps breaking every time I run it, but I love the rest of the tool.";
        let body_b = "Unfortunately the new release is terrible at remembering my project settings.";
        let quotes = QuoteSelector::default().select(&[categorized(1, body_a), categorized(2, body_b)]);

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].issue_number, 1);
        assert_eq!(quotes[0].score, 12);
        assert_eq!(quotes[1].issue_number, 2);
    }

    #[test]
    fn test_select_caps_at_max_quotes() {
        let body = "I really love how quick the new planner is, but it keeps losing context.";
        let issues: Vec<CategorizedIssue> = (1..=8).map(|n| categorized(n, body)).collect();
        let quotes = QuoteSelector::default().select(&issues);
        assert_eq!(quotes.len(), 5);
        let numbers: Vec<u64> = quotes.iter().map(|q| q.issue_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
