//! On-disk shape of a mapping resource.
//!
//! ```json
//! {
//!   "mappings": { "<variant>": "<canonical>" },
//!   "standardized_entities": ["<canonical>"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use ticket_model::{MappingTable, StandardizedSet};

/// Contents of one mapping resource.
///
/// Missing keys deserialize as empty collections. `standardized_entities`
/// serializes as a sorted list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(default)]
    pub mappings: MappingTable,
    #[serde(default)]
    pub standardized_entities: StandardizedSet,
}

impl MappingFile {
    pub fn new(mappings: MappingTable, standardized_entities: StandardizedSet) -> Self {
        Self {
            mappings,
            standardized_entities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty() && self.standardized_entities.is_empty()
    }

    /// Add every mapped canonical value to the standardized set.
    ///
    /// Returns the number of values that were missing.
    pub fn repair(&mut self) -> usize {
        let mut added = 0;
        for canonical in self.mappings.values() {
            if self.standardized_entities.insert(canonical.clone()) {
                added += 1;
            }
        }
        added
    }

    pub fn into_parts(self) -> (MappingTable, StandardizedSet) {
        (self.mappings, self.standardized_entities)
    }
}
