//! Support category rules.
//!
//! Categories have no pre-filter beyond the placeholder check. Resolution
//! relies on fuzzy matching against the initial vocabulary.

use super::is_placeholder;

pub const DEFAULT_CATEGORY: &str = "Other";

pub const INITIAL_CATEGORIES: &[&str] = &[
    "AI Model Prediction & Extraction Issues",
    "Document Processing Failures",
    "System Bugs & Integration Issues",
    "Other",
];

pub fn is_valid(raw: &str) -> bool {
    !is_placeholder(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_anything_but_placeholders() {
        assert!(is_valid("Document Processing Error"));
        assert!(is_valid("123"));
        assert!(!is_valid(" n/a "));
    }
}
