//! Entity classes and the tables each class maintains.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Variant string -> canonical string. Last write wins per key.
pub type MappingTable = BTreeMap<String, String>;

/// Canonical strings currently in use for one class.
pub type StandardizedSet = BTreeSet<String>;

/// Variants awaiting a human decision, keyed by cleaned variant.
pub type PendingReview = BTreeMap<String, PendingEntry>;

/// Independent normalization domain.
///
/// Every class owns its own mapping table, standardized set and pending
/// review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityClass {
    /// Client company name.
    Company,
    /// Support category label.
    Category,
    /// Subject template label.
    Template,
}

impl EntityClass {
    /// All classes, in storage order.
    pub const ALL: [EntityClass; 3] = [Self::Company, Self::Category, Self::Template];

    /// Stable identifier used in file names and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Category => "category",
            Self::Template => "template",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Company => "company name",
            Self::Category => "support category",
            Self::Template => "subject template",
        }
    }

    /// File name of the persisted mapping resource for this class.
    #[must_use]
    pub fn mapping_file_name(&self) -> String {
        format!("{}_mappings.json", self.as_str())
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" | "companies" => Ok(Self::Company),
            "category" | "categories" => Ok(Self::Category),
            "template" | "templates" => Ok(Self::Template),
            other => Err(ModelError::UnknownEntityClass(other.to_string())),
        }
    }
}

/// A suggestion waiting for approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingEntry {
    /// Canonical form proposed by fuzzy matching.
    pub suggested: String,
    /// Similarity between the variant and `suggested`.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_names() {
        assert_eq!("Company".parse::<EntityClass>().unwrap(), EntityClass::Company);
        assert_eq!(" templates ".parse::<EntityClass>().unwrap(), EntityClass::Template);
        assert!(matches!(
            "vendor".parse::<EntityClass>(),
            Err(ModelError::UnknownEntityClass(name)) if name == "vendor"
        ));
    }

    #[test]
    fn mapping_file_names_are_per_class() {
        let names: BTreeSet<String> = EntityClass::ALL
            .iter()
            .map(EntityClass::mapping_file_name)
            .collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains("company_mappings.json"));
    }
}
