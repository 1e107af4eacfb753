// Analysis models: categories, confidence tiers, themes, and quotes.
//
// These are the types that flow out of the analysis core. They're kept apart
// from the analyzers so the output and cache layers can use them without
// pulling in the filtering machinery.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::github::issues::Issue;

/// The feedback class an issue is assigned to.
///
/// Declaration order matters: it is the tie-break order for keyword scoring
/// and the order categories appear in the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bug,
    FeatureRequest,
    UxConfusion,
    Documentation,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Bug,
        Category::FeatureRequest,
        Category::UxConfusion,
        Category::Documentation,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::FeatureRequest => "feature_request",
            Category::UxConfusion => "ux_confusion",
            Category::Documentation => "documentation",
            Category::Other => "other",
        }
    }

    /// Lowercase name with underscores as spaces ("feature request").
    pub fn spaced(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Title-cased name ("Feature Request", "Ux Confusion").
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Display label used in the digest's category breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bug => "🐛 Bugs",
            Category::FeatureRequest => "✨ Feature Requests",
            Category::UxConfusion => "😕 UX Confusion",
            Category::Documentation => "📚 Documentation",
            Category::Other => "📋 Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly the category assignment is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Tier for a keyword score: 3+ high, 2 medium, anything else low.
    pub fn from_keyword_score(score: u32) -> Self {
        match score {
            s if s >= 3 => Confidence::High,
            2 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An issue paired with its single assigned category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedIssue {
    pub issue: Issue,
    pub category: Category,
    pub confidence: Confidence,
}

/// A recurring title word within one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub word: String,
    /// Occurrences across the category's titles
    pub count: usize,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.count)
    }
}

/// A sentiment-bearing sentence lifted from an issue body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub issue_number: u64,
    pub category: Category,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::FeatureRequest.as_str(), "feature_request");
        assert_eq!(Category::FeatureRequest.title(), "Feature Request");
        assert_eq!(Category::UxConfusion.title(), "Ux Confusion");
        assert_eq!(Category::UxConfusion.spaced(), "ux confusion");
        assert_eq!(Category::Other.title(), "Other");
    }

    #[test]
    fn test_category_serde_is_snake_case() {
        let json = serde_json::to_string(&Category::UxConfusion).unwrap();
        assert_eq!(json, "\"ux_confusion\"");
        let back: Category = serde_json::from_str("\"feature_request\"").unwrap();
        assert_eq!(back, Category::FeatureRequest);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(Confidence::from_keyword_score(1), Confidence::Low);
        assert_eq!(Confidence::from_keyword_score(2), Confidence::Medium);
        assert_eq!(Confidence::from_keyword_score(3), Confidence::High);
        assert_eq!(Confidence::from_keyword_score(9), Confidence::High);
    }

    #[test]
    fn test_theme_display() {
        let theme = Theme {
            word: "permissions".to_string(),
            count: 4,
        };
        assert_eq!(theme.to_string(), "permissions (4)");
    }
}
