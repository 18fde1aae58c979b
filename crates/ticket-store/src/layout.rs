//! Directory layout: one mapping file per entity class.

use std::path::{Path, PathBuf};

use ticket_model::EntityClass;

use crate::store::JsonFileStore;

/// Default directory holding the mapping files.
pub const DEFAULT_MAPPINGS_DIR: &str = "mappings";

/// Resolves the mapping file of each entity class inside a base directory.
///
/// Files are named `{class}_mappings.json`, for example
/// `mappings/company_mappings.json`. The directory is created on the first
/// save, not here.
#[derive(Debug, Clone)]
pub struct StoreLayout {
    base_dir: PathBuf,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::new(DEFAULT_MAPPINGS_DIR)
    }
}

impl StoreLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, class: EntityClass) -> PathBuf {
        self.base_dir.join(class.mapping_file_name())
    }

    pub fn store_for(&self, class: EntityClass) -> JsonFileStore {
        JsonFileStore::new(self.path_for(class))
    }

    /// Classes whose mapping file currently exists.
    pub fn existing(&self) -> Vec<EntityClass> {
        EntityClass::ALL
            .into_iter()
            .filter(|class| self.path_for(*class).is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_independent_per_class() {
        let layout = StoreLayout::new("/tmp/ticket-mappings");
        assert_eq!(
            layout.path_for(EntityClass::Template),
            PathBuf::from("/tmp/ticket-mappings/template_mappings.json")
        );
        assert_ne!(
            layout.path_for(EntityClass::Company),
            layout.path_for(EntityClass::Category)
        );
    }
}
