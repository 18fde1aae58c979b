//! Subject template rules.

use std::sync::LazyLock;

use regex::Regex;

use super::is_placeholder;

pub const DEFAULT_TEMPLATE: &str = "Other";

pub const INITIAL_TEMPLATES: &[&str] = &[
    "Incorrect Vendor Prediction",
    "System Performance Issues",
    "Error Uploading Documents",
    "Integration Issue with ERP/Accounting System",
    "Unable to Submit Invoice",
    "Unexpected Error",
    "Other",
];

/// A template must mention at least one of these (lowercase substring).
const TEMPLATE_KEYWORDS: &[&str] = &[
    "vendor",
    "prediction",
    "system",
    "performance",
    "error",
    "upload",
    "document",
    "integration",
    "erp",
    "accounting",
    "invoice",
    "submit",
    "unexpected",
];

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Invalid UUID regex")
});

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

pub fn is_valid(raw: &str) -> bool {
    let candidate = raw.trim();
    if is_placeholder(candidate) {
        return false;
    }
    if UUID.is_match(candidate) || EMAIL_ADDRESS.is_match(candidate) {
        return false;
    }
    let lowered = candidate.to_lowercase();
    TEMPLATE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
