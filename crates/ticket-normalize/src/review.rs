//! Human review of pending suggestions.

use tracing::{info, warn};

use crate::engine::Normalizer;
use crate::similarity::SimilarityScorer;

/// A reviewer's answer for one pending variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Commit the suggested canonical form.
    Accept,
    /// Keep the variant as its own canonical form.
    Reject,
    /// Commit a canonical form chosen by the reviewer.
    Custom(String),
    /// Leave the entry pending.
    Skip,
}

/// What applying a decision did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Approved { variant: String, canonical: String },
    Rejected { variant: String },
    Skipped,
    /// The variant had no pending entry; nothing changed.
    NotPending,
    /// A custom decision carried an empty canonical form; nothing changed.
    EmptyCustom,
}

impl<S: SimilarityScorer> Normalizer<S> {
    /// Approve a pending variant, optionally overriding the suggestion.
    ///
    /// Returns `false` and changes nothing if `variant` is not pending. A
    /// blank override falls back to the suggestion.
    pub fn approve(&mut self, variant: &str, canonical_override: Option<&str>) -> bool {
        let Some(entry) = self.pending.get(variant) else {
            warn!(class = %self.class(), variant, "no pending review");
            return false;
        };
        let canonical = canonical_override
            .map(str::trim)
            .filter(|canonical| !canonical.is_empty())
            .map_or_else(|| entry.suggested.clone(), str::to_string);
        self.add_mapping(variant, &canonical);
        info!(class = %self.class(), variant, canonical = %canonical, "approved mapping");
        true
    }

    /// Reject a pending suggestion: the variant becomes its own canonical
    /// form and leaves the queue.
    ///
    /// Returns `false` and changes nothing if `variant` is not pending.
    pub fn reject(&mut self, variant: &str) -> bool {
        if self.pending.remove(variant).is_none() {
            warn!(class = %self.class(), variant, "no pending review");
            return false;
        }
        self.standardized.insert(variant.to_string());
        info!(class = %self.class(), variant, "rejected suggestion, added as standardized entity");
        true
    }

    /// Apply a reviewer decision.
    pub fn decide(&mut self, variant: &str, decision: ReviewDecision) -> ReviewOutcome {
        if !self.pending.contains_key(variant) {
            return ReviewOutcome::NotPending;
        }
        match decision {
            ReviewDecision::Accept => {
                let canonical = self.pending[variant].suggested.clone();
                self.approve(variant, None);
                ReviewOutcome::Approved {
                    variant: variant.to_string(),
                    canonical,
                }
            }
            ReviewDecision::Custom(canonical) => {
                let canonical = canonical.trim();
                if canonical.is_empty() {
                    return ReviewOutcome::EmptyCustom;
                }
                self.approve(variant, Some(canonical));
                ReviewOutcome::Approved {
                    variant: variant.to_string(),
                    canonical: canonical.to_string(),
                }
            }
            ReviewDecision::Reject => {
                self.reject(variant);
                ReviewOutcome::Rejected {
                    variant: variant.to_string(),
                }
            }
            ReviewDecision::Skip => ReviewOutcome::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::ClassProfile;
    use ticket_model::{EntityClass, Thresholds};
    use ticket_store::{MappingFile, MemoryStore};

    fn with_pending() -> Normalizer {
        let mut file = MappingFile::default();
        file.standardized_entities.insert("Acme Co".to_string());
        let mut normalizer = Normalizer::new(
            ClassProfile::for_class(EntityClass::Company),
            Thresholds::default(),
            MemoryStore::with_contents(file),
        );
        assert_eq!(normalizer.normalize("Acme"), "Acme Co");
        normalizer
    }

    #[test]
    fn custom_decision_commits_override() {
        let mut normalizer = with_pending();
        let outcome = normalizer.decide("Acme", ReviewDecision::Custom(" Acme Holdings ".into()));
        assert_eq!(
            outcome,
            ReviewOutcome::Approved {
                variant: "Acme".into(),
                canonical: "Acme Holdings".into()
            }
        );
        assert_eq!(normalizer.mappings()["Acme"], "Acme Holdings");
        assert!(normalizer.standardized().contains("Acme Holdings"));
    }

    #[test]
    fn empty_custom_and_skip_keep_entry_pending() {
        let mut normalizer = with_pending();
        assert_eq!(
            normalizer.decide("Acme", ReviewDecision::Custom("  ".into())),
            ReviewOutcome::EmptyCustom
        );
        assert_eq!(
            normalizer.decide("Acme", ReviewDecision::Skip),
            ReviewOutcome::Skipped
        );
        assert!(normalizer.pending_reviews().contains_key("Acme"));
        assert!(normalizer.mappings().is_empty());
    }

    #[test]
    fn reject_makes_variant_canonical() {
        let mut normalizer = with_pending();
        assert_eq!(
            normalizer.decide("Acme", ReviewDecision::Reject),
            ReviewOutcome::Rejected {
                variant: "Acme".into()
            }
        );
        assert!(normalizer.pending_reviews().is_empty());
        assert!(normalizer.standardized().contains("Acme"));
        assert_eq!(normalizer.normalize("Acme"), "Acme");
    }

    #[test]
    fn unknown_variant_is_a_no_op() {
        let mut normalizer = with_pending();
        assert!(!normalizer.approve("Globex", None));
        assert!(!normalizer.reject("Globex"));
        assert_eq!(
            normalizer.decide("Globex", ReviewDecision::Accept),
            ReviewOutcome::NotPending
        );
        assert!(normalizer.mappings().is_empty());
        assert_eq!(normalizer.standardized_entities(), vec!["Acme Co"]);
    }
}
