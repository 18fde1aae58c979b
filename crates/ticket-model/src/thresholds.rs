//! Confidence thresholds for fuzzy resolution.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Default lower bound for automatic acceptance.
pub const DEFAULT_AUTO_THRESHOLD: f64 = 0.9;
/// Default lower bound for a review suggestion.
pub const DEFAULT_SUGGEST_THRESHOLD: f64 = 0.7;

/// Outcome band of a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Below the suggest threshold: the variant becomes a new canonical entity.
    New,
    /// Between the thresholds: a human must confirm the suggestion.
    Suggest,
    /// At or above the auto threshold: mapping is committed immediately.
    Auto,
}

/// Immutable pair of cutoffs. Both bounds are inclusive.
///
/// Invariant: `0.0 <= suggest <= auto <= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    auto: f64,
    suggest: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            auto: DEFAULT_AUTO_THRESHOLD,
            suggest: DEFAULT_SUGGEST_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Validate and build a threshold pair.
    pub fn new(auto: f64, suggest: f64) -> Result<Self> {
        check_unit("auto", auto)?;
        check_unit("suggest", suggest)?;
        if suggest > auto {
            return Err(ModelError::ThresholdOrder { auto, suggest });
        }
        Ok(Self { auto, suggest })
    }

    #[must_use]
    pub fn auto(&self) -> f64 {
        self.auto
    }

    #[must_use]
    pub fn suggest(&self) -> f64 {
        self.suggest
    }

    /// Place a score into its tier.
    #[must_use]
    pub fn categorize(&self, score: f64) -> MatchTier {
        if score >= self.auto {
            MatchTier::Auto
        } else if score >= self.suggest {
            MatchTier::Suggest
        } else {
            MatchTier::New
        }
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    // NaN fails the range check as well
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::ThresholdOutOfRange { name, value })
    }
}
