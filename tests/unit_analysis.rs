// Unit tests for categorization, sentiment scoring, and quote selection.
//
// Tests isolated pure functions: Confidence::from_keyword_score boundaries,
// keyword fallback tiers, score_sentiment weighting and the first-person
// bonus, split_sentences, and QuoteSelector length and score gates.

use chrono::{TimeZone, Utc};

use feedback_digest::analysis::categorizer::categorize_issue;
use feedback_digest::analysis::models::{CategorizedIssue, Category, Confidence};
use feedback_digest::analysis::quotes::{score_sentiment, split_sentences, QuoteSelector};
use feedback_digest::github::issues::Issue;

fn issue(title: &str, body: &str, labels: &[&str]) -> Issue {
    Issue {
        number: 1,
        title: title.to_string(),
        body: body.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap(),
        comments: 0,
        html_url: "https://github.com/acme/tool/issues/1".to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        user: "octocat".to_string(),
    }
}

fn categorized(number: u64, body: &str) -> CategorizedIssue {
    let mut issue = issue("Untitled", body, &[]);
    issue.number = number;
    CategorizedIssue {
        issue,
        category: Category::Bug,
        confidence: Confidence::Medium,
    }
}

/// Pads a body past the minimum length without adding quotable sentences.
const PADDING: &str = "This line is here only to pad the body past the minimum size.";

// ============================================================
// Confidence::from_keyword_score: boundary conditions
// ============================================================

#[test]
fn confidence_three_hits_is_high() {
    assert_eq!(Confidence::from_keyword_score(3), Confidence::High);
    assert_eq!(Confidence::from_keyword_score(7), Confidence::High);
}

#[test]
fn confidence_two_hits_is_medium() {
    assert_eq!(Confidence::from_keyword_score(2), Confidence::Medium);
}

#[test]
fn confidence_one_hit_is_low() {
    assert_eq!(Confidence::from_keyword_score(1), Confidence::Low);
    assert_eq!(Confidence::from_keyword_score(0), Confidence::Low);
}

// ============================================================
// Keyword fallback
// ============================================================

#[test]
fn two_bug_keywords_give_medium_confidence() {
    let result = categorize_issue(&issue("Something is wrong", "it throws an exception", &[]));
    assert_eq!(result.category, Category::Bug);
    assert_eq!(result.confidence, Confidence::Medium);
}

#[test]
fn keywords_match_inside_longer_words() {
    // "doc" matches inside "docs"
    let result = categorize_issue(&issue("Hooks", "the docs readme is unclear", &[]));
    assert_eq!(result.category, Category::Documentation);
    assert_eq!(result.confidence, Confidence::Medium);
}

#[test]
fn title_without_signal_is_other() {
    let result = categorize_issue(&issue("Hello there", "", &[]));
    assert_eq!(result.category, Category::Other);
    assert_eq!(result.confidence, Confidence::Low);
}

// ============================================================
// score_sentiment
// ============================================================

#[test]
fn contraction_also_scores_its_stem() {
    assert_eq!(score_sentiment("I shouldn't have to"), 4);
}

#[test]
fn scoring_is_case_insensitive() {
    assert_eq!(score_sentiment("WE love it"), 4);
}

#[test]
fn question_mark_scores_alone() {
    assert_eq!(score_sentiment("Why?"), 1);
}

#[test]
fn pronoun_bonus_is_whole_word_only() {
    assert_eq!(score_sentiment("our"), 1);
    assert_eq!(score_sentiment("ourselves"), 0);
}

#[test]
fn blocking_phrases_stack() {
    assert_eq!(score_sentiment("can't cannot unable"), 6);
}

// ============================================================
// split_sentences
// ============================================================

#[test]
fn split_keeps_punctuation_runs_together() {
    assert_eq!(
        split_sentences("Wait... really?! Yes.\tOk"),
        vec!["Wait...", "really?!", "Yes.", "Ok"]
    );
}

#[test]
fn split_without_terminal_punctuation_is_one_sentence() {
    assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
}

// ============================================================
// QuoteSelector: length and score gates
// ============================================================

#[test]
fn sentence_at_minimum_length_is_kept() {
    let sentence = "I wish this were better, it is broken for me now!!";
    assert_eq!(sentence.chars().count(), 50);

    let quotes = QuoteSelector::default().select(&[categorized(1, &format!("{PADDING}\n{sentence}"))]);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].text, sentence);
    assert_eq!(quotes[0].score, 6);
}

#[test]
fn sentence_below_minimum_length_is_dropped() {
    let sentence = "I wish this was better, it is broken for me now!!";
    assert_eq!(sentence.chars().count(), 49);

    let quotes = QuoteSelector::default().select(&[categorized(1, &format!("{PADDING}\n{sentence}"))]);
    assert!(quotes.is_empty());
}

#[test]
fn sentence_at_maximum_length_is_kept() {
    let sentence = format!("I love it but {}.", "x".repeat(335));
    assert_eq!(sentence.chars().count(), 350);

    let quotes = QuoteSelector::default().select(&[categorized(1, &sentence)]);
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].score, 5);
}

#[test]
fn sentence_above_maximum_length_is_dropped() {
    let sentence = format!("I love it but {}.", "x".repeat(336));
    assert_eq!(sentence.chars().count(), 351);

    assert!(QuoteSelector::default().select(&[categorized(1, &sentence)]).is_empty());
}

#[test]
fn neutral_sentences_never_become_quotes() {
    assert_eq!(score_sentiment(PADDING), 0);
    let body = format!("{PADDING} {PADDING}");
    assert!(QuoteSelector::default().select(&[categorized(1, &body)]).is_empty());
}

#[test]
fn dangling_list_header_is_split_off_and_dropped() {
    let body = "Here is what happened when I tried it:\n\
                1. Open the app\n\
                I really wish the tool would remember my last chosen model between sessions. Thanks!";

    let quotes = QuoteSelector::default().select(&[categorized(9, body)]);
    assert_eq!(quotes.len(), 1);
    assert_eq!(
        quotes[0].text,
        "Open the app I really wish the tool would remember my last chosen model between sessions."
    );
    assert_eq!(quotes[0].score, 3);
    assert_eq!(quotes[0].issue_number, 9);
}

#[test]
fn equal_scores_keep_issue_order() {
    let a = "I wish this were better, it is broken for me now!!";
    let issues = vec![
        categorized(3, &format!("{PADDING}\n{a}")),
        categorized(1, &format!("{PADDING}\n{a}")),
        categorized(2, &format!("{PADDING}\n{a}")),
    ];

    let numbers: Vec<u64> = QuoteSelector::default()
        .select(&issues)
        .iter()
        .map(|q| q.issue_number)
        .collect();
    assert_eq!(numbers, vec![3, 1, 2]);
}

#[test]
fn raising_min_score_filters_weak_quotes() {
    let selector = QuoteSelector {
        min_score: 6,
        ..QuoteSelector::default()
    };
    let body = format!("{PADDING}\nI love it but the startup time could be a bit shorter overall.");
    assert!(selector.select(&[categorized(1, &body)]).is_empty());
}
