// Template and boilerplate filters for issue bodies.
//
// Filtering runs in two stages. `is_template_line` drops whole lines of
// issue-template scaffolding before the body is rejoined into prose;
// `is_boilerplate_sentence` catches what only shows up after rejoining,
// such as a numbered-list header that ends up dangling at a sentence end.

use super::lexicon::{
    BOILERPLATE_PATTERNS, CODE_PREFIXES, COLON_NUMBER_TAIL, KEY_VALUE_LINE, KEY_VALUE_MAX_CHARS,
    MARKDOWN_PREFIXES, NUMBERED_LABEL, TEMPLATE_PHRASES,
};

/// Whether a single line is template boilerplate rather than user content.
///
/// The line is trimmed first, so blank lines count as boilerplate.
pub fn is_template_line(line: &str) -> bool {
    let line = line.trim();

    if line.is_empty() {
        return true;
    }

    if MARKDOWN_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return true;
    }

    let lower = line.to_lowercase();
    if TEMPLATE_PHRASES.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // Form rows such as "OS: macOS"
    if KEY_VALUE_LINE.is_match(line) && line.chars().count() < KEY_VALUE_MAX_CHARS {
        return true;
    }

    CODE_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Whether a reassembled sentence is list scaffolding or report boilerplate.
pub fn is_boilerplate_sentence(text: &str) -> bool {
    let stripped = text.trim();
    let lower = stripped.to_lowercase();

    if COLON_NUMBER_TAIL.is_match(stripped) {
        return true;
    }

    if BOILERPLATE_PATTERNS.iter().any(|re| re.is_match(&lower)) {
        return true;
    }

    // List intro or header
    if stripped.ends_with(':') {
        return true;
    }

    NUMBERED_LABEL.is_match(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_template() {
        assert!(is_template_line(""));
        assert!(is_template_line("   \t"));
    }

    #[test]
    fn test_markdown_structure_is_template() {
        assert!(is_template_line("### What happened?"));
        assert!(is_template_line("**Describe the problem**"));
        assert!(is_template_line("---"));
        assert!(is_template_line("```bash"));
        assert!(is_template_line("- [x] I have read the docs"));
        assert!(is_template_line("* [ ] Not done"));
    }

    #[test]
    fn test_key_value_rows_are_template() {
        assert!(is_template_line("OS: macOS"));
        assert!(is_template_line("Claude Code Version: 1.0.42"));
        // Long enough to be prose
        let long = format!("Note: {}", "the tool keeps dropping my session context ".repeat(3));
        assert!(long.chars().count() >= 80);
        assert!(!is_template_line(&long));
    }

    #[test]
    fn test_stack_frames_are_template() {
        assert!(is_template_line("/usr/local/lib/node_modules/cli.js:10"));
        assert!(is_template_line("at Object.run (index.js:4:11)"));
        assert!(is_template_line("TypeError: cannot read properties of undefined"));
    }

    #[test]
    fn test_prose_is_kept() {
        assert!(!is_template_line(
            "I tried running the command twice and it hung both times."
        ));
    }

    #[test]
    fn test_boilerplate_sentences() {
        assert!(is_boilerplate_sentence("Would be helpful to know: 1."));
        assert!(is_boilerplate_sentence("This was discovered during a refactor of the app."));
        assert!(is_boilerplate_sentence("See issue #123 for the original report."));
        assert!(is_boilerplate_sentence("Severity is Medium - Feature gap in the planner."));
        assert!(is_boilerplate_sentence("Here is what I saw:"));
        assert!(is_boilerplate_sentence("2. Setup:"));
        assert!(!is_boilerplate_sentence(
            "I love the tool but the permission prompts keep interrupting me."
        ));
    }
}
