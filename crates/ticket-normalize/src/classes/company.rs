//! Company name rules.

use std::sync::LazyLock;

use regex::Regex;

use super::is_placeholder;

pub const DEFAULT_COMPANY: &str = "Unknown Company";

/// Client companies known to be valid. An exact match always passes
/// validation and seeds the standardized set.
pub const KNOWN_COMPANIES: &[&str] = &[
    "Beacon Communications, LLC",
    "Ben Hur Construction Co.",
    "BluSky Restoration Contractors, LLC",
    "Concrete & Materials Placement",
    "Doggett Concrete Construction",
    "GBI",
    "Gulf Stream Construction Co., Inc.",
    "H&M Mechanical Constructors, Inc.",
    "Haskell Lemon",
    "NP Mechanical, Inc.",
    "S.M. Hentges",
    "TSU One, Inc.",
    "TaftElectric",
    "Moisture Loc",
    "Comtel Systems Technology",
    "Great Basin Industrial",
    "Doggett Residential",
];

/// Words that mark an error message or status line rather than a name.
/// Matched as case-insensitive substrings.
const STATUS_VOCABULARY: &[&str] = &[
    "error",
    "issue",
    "warning",
    "incorrect",
    "wrong",
    "missing",
    "invoice",
    "wizard",
    "system",
    "prediction",
    "vendor",
    "document",
];

/// Leading words of sentences pulled from ticket bodies. Each entry is
/// matched with its own casing and must be followed by whitespace.
const SENTENCE_STARTERS: &[&str] = &[
    "The", "There", "Is", "We", "Not", "This", "All", "Due", "Changed", "Data", "PO", "SQL",
    "SHOULD", "WIZARD", "GRANT", "email", "invoice", "sales", "the", "this",
];

const MAX_CHARS: usize = 50;
const MAX_WORDS: usize = 8;

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Invalid UUID regex")
});

// digits, optionally with dots or dashes
static NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.-]+$").expect("Invalid numeric id regex"));

static LEGAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:Inc\.?|LLC\.?|Ltd\.?|Co\.?|Corp\.?|Corporation|Limited)$")
        .expect("Invalid legal suffix regex")
});

/// Trim and drop one trailing legal-entity suffix.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    LEGAL_SUFFIX.replace(trimmed, "").into_owned()
}

/// Plausibility check for a raw company name.
pub fn is_valid(raw: &str) -> bool {
    let candidate = raw.trim();
    if is_placeholder(candidate) {
        return false;
    }
    if KNOWN_COMPANIES.contains(&candidate) {
        return true;
    }
    if UUID.is_match(candidate) || NUMERIC_ID.is_match(candidate) || candidate.starts_with('<') {
        return false;
    }
    let lowered = candidate.to_lowercase();
    if STATUS_VOCABULARY.iter().any(|word| lowered.contains(word)) {
        return false;
    }
    if starts_with_sentence_word(candidate) {
        return false;
    }
    candidate.chars().count() <= MAX_CHARS && candidate.split_whitespace().count() <= MAX_WORDS
}

fn starts_with_sentence_word(candidate: &str) -> bool {
    SENTENCE_STARTERS.iter().any(|word| {
        candidate
            .strip_prefix(word)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    })
}
