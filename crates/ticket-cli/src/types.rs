use std::path::PathBuf;

use serde::Serialize;
use ticket_model::EntityClass;
use ticket_normalize::{NormalizerSet, Resolution};

use crate::review::ReviewTally;

/// One raw value and how it was resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ValueResolution {
    pub raw: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// A suggestion still waiting for review when the command finished.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingRow {
    pub class: EntityClass,
    pub variant: String,
    pub suggested: String,
    pub score: f64,
}

impl PendingRow {
    /// Pending entries of every class, class by class, sorted by variant.
    pub fn collect(set: &NormalizerSet) -> Vec<Self> {
        set.iter()
            .flat_map(|normalizer| {
                let class = normalizer.class();
                normalizer
                    .pending_reviews()
                    .iter()
                    .map(move |(variant, entry)| Self {
                        class,
                        variant: variant.clone(),
                        suggested: entry.suggested.clone(),
                        score: entry.score,
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub class: EntityClass,
    pub values: Vec<ValueResolution>,
    pub pending: Vec<PendingRow>,
    pub review: Option<ReviewTally>,
    /// `None` on a dry run.
    pub saved: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct IngestResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub records: usize,
    pub pending: Vec<PendingRow>,
    pub review: Option<ReviewTally>,
    /// `None` on a dry run.
    pub saved: Option<bool>,
}
