//! Placeholder scanning
//!
//! A placeholder is a bracketed field name in template text, e.g.
//! `[Company Name]`. Names are case-sensitive, non-empty, and cannot
//! contain `]`. Bracket pairs are matched independently per paragraph.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::docx::Document;

/// Matches one `[Name]` token; the capture is the bare name
pub(crate) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("placeholder regex"));

/// Whether a piece of text contains at least one placeholder token
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// Extract all distinct placeholder names from one piece of text
pub fn extract_from_text(text: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the alphabetically-sorted set of distinct placeholder names
/// from every paragraph of a document, table cells included.
///
/// An empty result is not an error; it means the template has nothing
/// to fill.
pub fn scan(doc: &Document) -> Vec<String> {
    let mut names = BTreeSet::new();
    for range in doc.paragraph_ranges() {
        names.extend(extract_from_text(&doc.paragraph_text(range)));
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single() {
        let names = extract_from_text("Dear [Company Name],");
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["Company Name"]);
    }

    #[test]
    fn test_extract_reports_duplicates_once() {
        let names = extract_from_text("[Role] at [Company], the [Role] team");
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["Company", "Role"]
        );
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let names = extract_from_text("[Date] and [date]");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_extract_empty_brackets_ignored() {
        assert!(extract_from_text("nothing here: []").is_empty());
    }

    #[test]
    fn test_extract_no_brackets() {
        assert!(extract_from_text("plain text, no fields").is_empty());
    }

    #[test]
    fn test_extract_names_never_contain_closing_bracket() {
        for name in extract_from_text("[a][b]c] [d[e]") {
            assert!(!name.contains(']'));
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_contains_placeholder() {
        assert!(contains_placeholder("x [Field] y"));
        assert!(!contains_placeholder("x [unclosed"));
        assert!(!contains_placeholder("no brackets"));
    }
}
