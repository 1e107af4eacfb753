// Fixed word lists and patterns used by the analyzers.
//
// Everything here is read-only and process-wide. Plain lists are `&'static`
// slices; the stopword set and compiled regexes are built on first use and
// shared afterwards. Slices are used wherever iteration order decides a
// tie, so the order below is significant.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::models::Category;

// --- Categorizer ---

/// Label substrings that decide a category outright, checked in this order.
pub const LABEL_MAPPING: &[(&str, Category)] = &[
    ("bug", Category::Bug),
    ("feature", Category::FeatureRequest),
    ("enhancement", Category::FeatureRequest),
    ("documentation", Category::Documentation),
    ("docs", Category::Documentation),
    ("question", Category::UxConfusion),
];

/// Keyword lists for fallback scoring. Category order is the tie-break order.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Bug,
        &[
            "bug",
            "error",
            "crash",
            "broken",
            "fail",
            "not working",
            "doesn't work",
            "issue",
            "problem",
            "exception",
            "traceback",
            "unexpected",
            "wrong",
        ],
    ),
    (
        Category::FeatureRequest,
        &[
            "feature",
            "request",
            "add",
            "support",
            "would be nice",
            "suggestion",
            "enhance",
            "improvement",
            "could you",
            "please add",
            "wish",
            "proposal",
        ],
    ),
    (
        Category::UxConfusion,
        &[
            "confusing",
            "unclear",
            "how do i",
            "how to",
            "don't understand",
            "unexpected behavior",
            "intuitive",
            "ux",
            "user experience",
            "hard to",
        ],
    ),
    (
        Category::Documentation,
        &[
            "doc",
            "documentation",
            "readme",
            "example",
            "tutorial",
            "guide",
            "instructions",
            "typo",
            "clarify",
            "explain",
        ],
    ),
];

// --- Theme extraction ---

const STOPWORD_LIST: &[&str] = &[
    // English function words
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "to", "of",
    "in", "for", "on", "with", "at", "by", "from", "as", "into", "through",
    "during", "before", "after", "above", "below", "between", "under",
    "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "just", "and", "but", "if", "or", "because", "until", "while",
    "this", "that", "these", "those", "i", "me", "my", "myself", "we", "our",
    "you", "your", "he", "him", "his", "she", "her", "it", "its", "they",
    "them", "their", "what", "which", "who", "whom", "claude", "code", "use",
    "using", "used", "get", "got", "like", "also", "see", "try", "trying",
    "want", "work", "works", "working", "issue", "error", "file", "files",
    // Stack traces and system info
    "version", "root", "context", "traceback", "path", "directory", "command",
    "terminal", "output", "line", "node", "python", "bash", "shell", "sudo",
    "stderr", "stdout", "debug", "info", "warn", "fatal", "stack", "trace",
    "exception", "null", "undefined", "true", "false", "none", "string",
    "number", "object", "array", "function", "module", "import", "export",
    "const", "return", "async", "await", "process", "system", "user", "users",
    "home", "local", "global", "package", "packages", "install", "installed",
    // Issue template headings
    "https", "github", "anthropic", "anthropics", "existing", "searched",
    "checked", "confirm", "expected", "actual", "behavior", "steps", "reproduce",
    "environment", "operating", "logs", "relevant", "additional", "information",
    // Title prefixes ([BUG], [FEATURE REQUEST], ...)
    "feature", "request", "feat", "enhancement", "critical", "minor", "major",
];

/// Words never surfaced as themes.
pub static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

/// Theme tokens: lowercase ASCII letter runs of four or more.
pub static THEME_TOKEN: Lazy<Regex> = Lazy::new(|| compile(r"\b[a-z]{4,}\b"));

// --- Template line filter ---

/// Line prefixes for markdown structure (headings, rules, fences, checklists).
pub const MARKDOWN_PREFIXES: &[&str] = &["**", "###", "##", "#", "---", "```", "- [", "- [x]", "* ["];

/// Case-insensitive substrings marking issue-template scaffolding.
pub const TEMPLATE_PHRASES: &[&str] = &[
    "preflight checklist",
    "i have searched",
    "i have checked",
    "bug report",
    "feature request",
    "describe the bug",
    "steps to reproduce",
    "expected behavior",
    "actual behavior",
    "screenshots",
    "additional context",
    "environment",
    "operating system",
    "version:",
    "node version",
    "npm version",
    "to reproduce",
    "relevant log",
    "checklist",
];

/// Case-sensitive line prefixes for paths, stack frames, and error dumps.
pub const CODE_PREFIXES: &[&str] = &["/", "at ", "Error:", "TypeError", "SyntaxError"];

/// Short form rows like "OS: macOS".
pub static KEY_VALUE_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z\s]+:\s*\S+"));

/// Key/value rows at least this long are treated as prose.
pub const KEY_VALUE_MAX_CHARS: usize = 80;

// --- Boilerplate sentence filter ---

/// Numbered-list header folded into prose ("... to know: 1.").
pub static COLON_NUMBER_TAIL: Lazy<Regex> = Lazy::new(|| compile(r":\s*\d+\.?\s*$"));

/// Issue and test-report boilerplate, matched against lowercased text.
pub static BOILERPLATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"test coverage",
        r"issue #\d+",
        r"medium\s*-\s*feature",
        r"low\s*-\s*feature",
        r"high\s*-\s*feature",
        r"discovered during",
        r"test file:",
        r"workaround",
        r"manual verification",
        r"preflight",
        r"checklist",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

/// Bare numbered labels ("1. Setup:").
pub static NUMBERED_LABEL: Lazy<Regex> = Lazy::new(|| compile(r"^\d+\.\s*\w+:?\s*$"));

// --- Quote scoring ---

/// Sentiment phrases and their weights. Each phrase counts at most once per sentence.
pub const SENTIMENT_WEIGHTS: &[(&str, u32)] = &[
    ("frustrated", 3),
    ("frustrating", 3),
    ("annoying", 3),
    ("annoyed", 3),
    ("love", 3),
    ("great", 2),
    ("awesome", 2),
    ("amazing", 2),
    ("wish", 2),
    ("hope", 2),
    ("would be nice", 3),
    ("broken", 2),
    ("confused", 2),
    ("confusing", 2),
    ("unclear", 2),
    ("difficult", 2),
    ("hard to", 2),
    ("impossible", 3),
    ("doesn't work", 3),
    ("not working", 3),
    ("stopped working", 3),
    ("please", 1),
    ("need", 1),
    ("important", 2),
    ("critical", 3),
    ("unfortunately", 2),
    ("disappointed", 3),
    ("expected", 1),
    ("but", 1),
    ("however", 1),
    ("instead", 1),
    ("keeps", 2),
    ("always", 1),
    ("never", 2),
    ("every time", 2),
    ("can't", 2),
    ("cannot", 2),
    ("unable", 2),
    ("should", 1),
    ("shouldn't", 2),
    ("why", 1),
    ("better", 1),
    ("worse", 2),
    ("terrible", 3),
    ("horrible", 3),
    ("useful", 2),
    ("helpful", 2),
    ("useless", 3),
];

/// First-person pronouns as whole words.
pub static FIRST_PERSON: Lazy<Regex> = Lazy::new(|| compile(r"\b(i|my|me|we|our)\b"));

/// Bonus added when a sentence is written in the first person.
pub const FIRST_PERSON_BONUS: u32 = 1;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}
