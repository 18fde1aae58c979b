//! Resolution engine.
//!
//! Maps a raw string onto a canonical form. Rules are applied in order and
//! the first one that applies wins:
//!
//! 1. placeholder input resolves to the class default
//! 2. the input is cleaned (trim, class-specific suffix handling)
//! 3. a known variant resolves through the mapping table
//! 4. an existing canonical form resolves to itself
//! 5. otherwise the best fuzzy candidate decides: auto-accept, queue for
//!    review, or register the cleaned input as a new canonical form

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use ticket_model::{
    EntityClass, MappingTable, MatchTier, PendingEntry, PendingReview, StandardizedSet, Thresholds,
};
use ticket_store::{EntityStore, MappingFile};

use crate::classes::{ClassProfile, is_placeholder};
use crate::similarity::{SequenceRatio, SimilarityScorer};

/// How a raw string was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionKind {
    /// Placeholder or invalid input; the class default was used.
    Default,
    /// Known variant found in the mapping table.
    Mapped,
    /// Input already is a canonical form.
    Standardized,
    /// Fuzzy match at or above the auto threshold; mapping committed.
    Auto { score: f64 },
    /// Fuzzy match in the review band; suggestion returned, not committed.
    Suggested { score: f64 },
    /// No close candidate; input registered as a new canonical form.
    New { score: f64 },
}

impl ResolutionKind {
    fn from_tier(tier: MatchTier, score: f64) -> Self {
        match tier {
            MatchTier::Auto => Self::Auto { score },
            MatchTier::Suggest => Self::Suggested { score },
            MatchTier::New => Self::New { score },
        }
    }

    /// Short label for tables and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mapped => "mapped",
            Self::Standardized => "standardized",
            Self::Auto { .. } => "auto",
            Self::Suggested { .. } => "suggested",
            Self::New { .. } => "new",
        }
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Auto { score } | Self::Suggested { score } | Self::New { score } => Some(*score),
            _ => None,
        }
    }
}

/// Outcome of resolving one raw string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub canonical: String,
    #[serde(flatten)]
    pub kind: ResolutionKind,
}

/// Highest-scoring candidate for a cleaned string.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub candidate: String,
    pub score: f64,
}

/// Mapping table and standardized entities of one class, as handed to a
/// report collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassView {
    pub class: EntityClass,
    pub mappings: MappingTable,
    pub standardized_entities: Vec<String>,
}

/// Normalizer for one entity class.
///
/// State is loaded from the store at construction, mutated in memory by
/// [`normalize`](Self::normalize) and the review methods, and written back
/// only by [`save`](Self::save). The pending review queue is never
/// persisted.
pub struct Normalizer<S = SequenceRatio> {
    pub(crate) profile: ClassProfile,
    pub(crate) thresholds: Thresholds,
    pub(crate) scorer: S,
    pub(crate) store: Box<dyn EntityStore>,
    pub(crate) mappings: MappingTable,
    pub(crate) standardized: StandardizedSet,
    pub(crate) pending: PendingReview,
}

impl Normalizer<SequenceRatio> {
    /// Build a normalizer with the default scorer, loading from `store`.
    pub fn new(
        profile: ClassProfile,
        thresholds: Thresholds,
        store: impl EntityStore + 'static,
    ) -> Self {
        Self::with_scorer(profile, thresholds, store, SequenceRatio)
    }
}

impl<S: SimilarityScorer> Normalizer<S> {
    pub fn with_scorer(
        profile: ClassProfile,
        thresholds: Thresholds,
        store: impl EntityStore + 'static,
        scorer: S,
    ) -> Self {
        let (mappings, standardized) = store.load().into_parts();
        Self {
            profile,
            thresholds,
            scorer,
            store: Box::new(store),
            mappings,
            standardized,
            pending: PendingReview::new(),
        }
    }

    /// Merge the class's initial vocabulary into the standardized set.
    ///
    /// Returns how many entries were new.
    pub fn seed_vocabulary(&mut self) -> usize {
        let vocabulary = self.profile.seed_vocabulary();
        let added = vocabulary
            .iter()
            .filter(|entity| self.standardized.insert((**entity).to_string()))
            .count();
        debug!(class = %self.class(), added, "seeded vocabulary");
        added
    }

    pub fn class(&self) -> EntityClass {
        self.profile.class()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn default_canonical(&self) -> &'static str {
        self.profile.default_canonical()
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.profile.is_valid(raw)
    }

    /// Resolve `raw` to its canonical form.
    ///
    /// Does not apply the class validator; see
    /// [`normalize_checked`](Self::normalize_checked).
    pub fn normalize(&mut self, raw: &str) -> String {
        self.resolve(raw).canonical
    }

    /// Validate first, then resolve. Invalid input yields the class default
    /// without touching any table.
    pub fn normalize_checked(&mut self, raw: &str) -> String {
        self.resolve_checked(raw).canonical
    }

    pub fn resolve_checked(&mut self, raw: &str) -> Resolution {
        if self.is_valid(raw) {
            self.resolve(raw)
        } else {
            debug!(class = %self.class(), raw, "rejected by validator");
            self.default_resolution()
        }
    }

    /// Resolve `raw` and report which rule applied.
    pub fn resolve(&mut self, raw: &str) -> Resolution {
        if is_placeholder(raw) {
            return self.default_resolution();
        }

        let cleaned = self.profile.clean(raw);

        if let Some(canonical) = self.mappings.get(&cleaned) {
            return Resolution {
                canonical: canonical.clone(),
                kind: ResolutionKind::Mapped,
            };
        }

        if self.standardized.contains(&cleaned) {
            return Resolution {
                canonical: cleaned,
                kind: ResolutionKind::Standardized,
            };
        }

        let best = self.find_best_match(&cleaned);
        // A zero score never maps or suggests, whatever the thresholds.
        let tier = if best.score > 0.0 {
            self.thresholds.categorize(best.score)
        } else {
            MatchTier::New
        };
        let kind = ResolutionKind::from_tier(tier, best.score);
        let canonical = match tier {
            MatchTier::Auto => {
                self.add_mapping(&cleaned, &best.candidate);
                info!(
                    class = %self.class(),
                    variant = %cleaned,
                    canonical = %best.candidate,
                    score = best.score,
                    "added mapping"
                );
                best.candidate
            }
            MatchTier::Suggest => {
                info!(
                    class = %self.class(),
                    variant = %cleaned,
                    suggested = %best.candidate,
                    score = best.score,
                    "queued for review"
                );
                self.pending.insert(
                    cleaned,
                    PendingEntry {
                        suggested: best.candidate.clone(),
                        score: best.score,
                    },
                );
                best.candidate
            }
            MatchTier::New => {
                info!(
                    class = %self.class(),
                    entity = %cleaned,
                    best_score = best.score,
                    "added new standardized entity"
                );
                self.standardized.insert(cleaned.clone());
                cleaned
            }
        };
        Resolution { canonical, kind }
    }

    /// Best candidate among standardized entities and mapped canonical
    /// values.
    ///
    /// Candidates are visited in sorted order, standardized entities first;
    /// only a strictly higher score replaces the current best. With no
    /// candidates the result is `cleaned` itself with score `0.0`.
    pub fn find_best_match(&self, cleaned: &str) -> BestMatch {
        let mapped: BTreeSet<&String> = self
            .mappings
            .values()
            .filter(|value| !self.standardized.contains(*value))
            .collect();

        let mut best = BestMatch {
            candidate: cleaned.to_string(),
            score: 0.0,
        };
        for candidate in self.standardized.iter().chain(mapped) {
            let score = self.scorer.similarity(cleaned, candidate);
            if score > best.score {
                best = BestMatch {
                    candidate: candidate.clone(),
                    score,
                };
            }
        }
        best
    }

    /// Commit `variant -> canonical`, register `canonical` and drop any
    /// pending entry for `variant`.
    pub fn add_mapping(&mut self, variant: &str, canonical: &str) {
        self.mappings
            .insert(variant.to_string(), canonical.to_string());
        self.standardized.insert(canonical.to_string());
        self.pending.remove(variant);
    }

    /// Register a canonical form. Returns `false` if it was already known.
    pub fn add_standardized(&mut self, entity: &str) -> bool {
        self.standardized.insert(entity.to_string())
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    pub fn standardized(&self) -> &StandardizedSet {
        &self.standardized
    }

    /// Standardized entities in sorted order.
    pub fn standardized_entities(&self) -> Vec<String> {
        self.standardized.iter().cloned().collect()
    }

    pub fn pending_reviews(&self) -> &PendingReview {
        &self.pending
    }

    pub fn view(&self) -> ClassView {
        ClassView {
            class: self.class(),
            mappings: self.mappings.clone(),
            standardized_entities: self.standardized_entities(),
        }
    }

    pub fn snapshot(&self) -> MappingFile {
        MappingFile::new(self.mappings.clone(), self.standardized.clone())
    }

    /// Flush the mapping table and standardized set to the store.
    ///
    /// Failures are logged by the store; returns `false` in that case and
    /// leaves the in-memory state as it was.
    pub fn save(&self) -> bool {
        self.store.save(&self.snapshot())
    }

    fn default_resolution(&self) -> Resolution {
        Resolution {
            canonical: self.default_canonical().to_string(),
            kind: ResolutionKind::Default,
        }
    }
}
