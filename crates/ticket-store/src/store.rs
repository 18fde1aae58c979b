//! Entity store implementations.
//!
//! One store addresses one mapping resource. Loading happens once when a
//! normalizer is built and saving only on request.
//!
//! # Concurrency
//!
//! There is no locking and no merge. When several processes save to the same
//! resource, the last save wins and earlier saves are silently lost. Readers
//! never observe a partially written file because saves go through a
//! temporary file followed by a rename.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::format::MappingFile;

/// Durable home of one class's mapping table and standardized set.
pub trait EntityStore {
    /// Where the data lives, for log messages.
    fn location(&self) -> String;

    /// Read the resource. `Ok(None)` means it does not exist yet.
    fn read(&self) -> Result<Option<MappingFile>>;

    /// Replace the resource with `file`.
    fn write(&self, file: &MappingFile) -> Result<()>;

    /// Fail-soft load.
    ///
    /// A missing resource yields empty tables. A malformed or unreadable one
    /// is logged and also yields empty tables. Mapped canonical values that
    /// are absent from the standardized set are added back.
    fn load(&self) -> MappingFile {
        match self.read() {
            Ok(Some(mut file)) => {
                let repaired = file.repair();
                if repaired > 0 {
                    warn!(
                        location = %self.location(),
                        repaired,
                        "mapped canonical values were missing from standardized entities"
                    );
                }
                info!(
                    location = %self.location(),
                    mappings = file.mappings.len(),
                    standardized = file.standardized_entities.len(),
                    "loaded mappings"
                );
                file
            }
            Ok(None) => {
                info!(location = %self.location(), "mapping file not found, starting empty");
                MappingFile::default()
            }
            Err(error) => {
                warn!(
                    location = %self.location(),
                    error = %error,
                    "{}",
                    error.user_message()
                );
                MappingFile::default()
            }
        }
    }

    /// Fail-soft save. Returns `false` if the write failed; the previous
    /// durable state is left in place.
    fn save(&self, file: &MappingFile) -> bool {
        match self.write(file) {
            Ok(()) => {
                info!(
                    location = %self.location(),
                    mappings = file.mappings.len(),
                    standardized = file.standardized_entities.len(),
                    "saved mappings"
                );
                true
            }
            Err(error) => {
                warn!(
                    location = %self.location(),
                    error = %error,
                    "{}",
                    error.user_message()
                );
                false
            }
        }
    }
}

/// Mapping resource stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl EntityStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<MappingFile>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let file = serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(file))
    }

    /// Uses atomic write (temp file + rename) so readers see either the old
    /// or the new file, never a mix.
    fn write(&self, file: &MappingFile) -> Result<()> {
        let mut json =
            serde_json::to_string_pretty(file).map_err(|e| StoreError::Serialize { source: e })?;
        json.push('\n');

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.temp_path();
        if let Err(error) = write_synced(&temp_path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::AtomicWriteFailed {
                temp_path,
                target_path: self.path.clone(),
                source: e,
            });
        }
        debug!(path = %self.path.display(), bytes = json.len(), "wrote mapping file");
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| StoreError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(bytes).map_err(|e| StoreError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;
    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

/// Process-local store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Rc<RefCell<Option<MappingFile>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `file`.
    pub fn with_contents(file: MappingFile) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(file))),
        }
    }

    /// Last saved contents, if any.
    pub fn snapshot(&self) -> Option<MappingFile> {
        self.contents.borrow().clone()
    }
}

impl EntityStore for MemoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<Option<MappingFile>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, file: &MappingFile) -> Result<()> {
        *self.contents.borrow_mut() = Some(file.clone());
        Ok(())
    }
}
