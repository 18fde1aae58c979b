//! Per-class capability records.
//!
//! A [`ClassProfile`] bundles what differs between entity classes: how raw
//! strings are cleaned, which raw strings are plausible at all, the default
//! canonical value and the initial vocabulary. The resolution engine itself
//! is shared.

use std::fmt;

use ticket_model::EntityClass;

pub mod category;
pub mod company;
pub mod template;

/// Placeholder values that resolve to the class default.
const PLACEHOLDERS: &[&str] = &["n/a", "unknown", ""];

/// True for empty, whitespace-only, `n/a` or `unknown` input (any case).
pub fn is_placeholder(raw: &str) -> bool {
    let trimmed = raw.trim().to_lowercase();
    PLACEHOLDERS.contains(&trimmed.as_str())
}

/// Baseline cleaning shared by all classes.
pub fn trim_clean(raw: &str) -> String {
    raw.trim().to_string()
}

/// Class-specific behaviour plugged into the resolution engine.
#[derive(Clone, Copy)]
pub struct ClassProfile {
    class: EntityClass,
    default_canonical: &'static str,
    seed_vocabulary: &'static [&'static str],
    cleaner: fn(&str) -> String,
    validator: fn(&str) -> bool,
}

impl ClassProfile {
    #[must_use]
    pub fn for_class(class: EntityClass) -> Self {
        match class {
            EntityClass::Company => Self {
                class,
                default_canonical: company::DEFAULT_COMPANY,
                seed_vocabulary: company::KNOWN_COMPANIES,
                cleaner: company::clean,
                validator: company::is_valid,
            },
            EntityClass::Category => Self {
                class,
                default_canonical: category::DEFAULT_CATEGORY,
                seed_vocabulary: category::INITIAL_CATEGORIES,
                cleaner: trim_clean,
                validator: category::is_valid,
            },
            EntityClass::Template => Self {
                class,
                default_canonical: template::DEFAULT_TEMPLATE,
                seed_vocabulary: template::INITIAL_TEMPLATES,
                cleaner: trim_clean,
                validator: template::is_valid,
            },
        }
    }

    #[must_use]
    pub fn class(&self) -> EntityClass {
        self.class
    }

    /// Canonical value for empty, placeholder or invalid input.
    #[must_use]
    pub fn default_canonical(&self) -> &'static str {
        self.default_canonical
    }

    #[must_use]
    pub fn seed_vocabulary(&self) -> &'static [&'static str] {
        self.seed_vocabulary
    }

    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        (self.cleaner)(raw)
    }

    /// Pre-filter callers apply before normalizing.
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        (self.validator)(raw)
    }
}

impl fmt::Debug for ClassProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassProfile")
            .field("class", &self.class)
            .field("default_canonical", &self.default_canonical)
            .field("seed_vocabulary", &self.seed_vocabulary.len())
            .finish_non_exhaustive()
    }
}
