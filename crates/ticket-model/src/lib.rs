//! Core types for ticket label normalization.
//!
//! Three independent entity classes (company, category, template) each map
//! noisy variants onto canonical forms. This crate holds the shared
//! vocabulary: the tables, the review queue entries, the confidence
//! thresholds and the ticket record carried between collaborators.

pub mod entity;
pub mod error;
pub mod record;
pub mod thresholds;

pub use entity::{EntityClass, MappingTable, PendingEntry, PendingReview, StandardizedSet};
pub use error::{ModelError, Result};
pub use record::TicketRecord;
pub use thresholds::{DEFAULT_AUTO_THRESHOLD, DEFAULT_SUGGEST_THRESHOLD, MatchTier, Thresholds};
