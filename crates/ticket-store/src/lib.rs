//! Durable storage for normalization mappings.
//!
//! Each entity class owns one JSON resource holding its mapping table
//! (variant -> canonical) and its set of standardized entities.
//!
//! # Features
//!
//! - **Fail-soft loading**: missing or corrupt files yield empty tables
//! - **Atomic writes**: temp file + rename, prior state kept on failure
//! - **In-memory store** for callers that do not persist
//!
//! # Example
//!
//! ```ignore
//! use ticket_model::EntityClass;
//! use ticket_store::{EntityStore, StoreLayout};
//!
//! let store = StoreLayout::new("mappings").store_for(EntityClass::Company);
//! let mut file = store.load();
//! file.standardized_entities.insert("GBI".to_string());
//! store.save(&file);
//! ```

mod error;
mod format;
mod layout;
mod store;

pub use error::{Result, StoreError};
pub use format::MappingFile;
pub use layout::{DEFAULT_MAPPINGS_DIR, StoreLayout};
pub use store::{EntityStore, JsonFileStore, MemoryStore};
