//! Similarity-based entity resolution for support ticket labels.
//!
//! Raw company names, support categories and subject templates are mapped
//! onto canonical forms. Each [`Normalizer`] owns the tables of one class:
//! known variants resolve through the mapping table, close matches are
//! mapped or queued for review depending on their score, and everything else
//! becomes a new canonical form.
//!
//! # Example
//!
//! ```ignore
//! use ticket_normalize::{NormalizerConfig, NormalizerSet};
//!
//! let mut set = NormalizerSet::open(&NormalizerConfig::default())?;
//! let canonical = set.company.normalize_checked("BluSky Restoration Contractors");
//! set.save_all();
//! ```

pub mod classes;
mod config;
mod engine;
mod error;
mod review;
mod set;
mod similarity;

pub use classes::{ClassProfile, is_placeholder};
pub use config::NormalizerConfig;
pub use engine::{BestMatch, ClassView, Normalizer, Resolution, ResolutionKind};
pub use error::{ConfigError, Result};
pub use review::{ReviewDecision, ReviewOutcome};
pub use set::NormalizerSet;
pub use similarity::{SequenceRatio, SimilarityScorer, similarity};
