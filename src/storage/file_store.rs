use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::storage::VaultStorage;
use crate::types::errors::StorageError;

/// Default vault file name inside the platform data directory.
const VAULT_FILE_NAME: &str = "vault.pmvault";

/// File-backed vault storage.
///
/// Writes go through a temporary sibling file followed by a rename, so an
/// interrupted write never clobbers the previous blob.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at an explicit file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the platform-default location,
    /// e.g. `~/.local/share/pmvault/vault.pmvault` on Linux.
    pub fn default_location() -> Self {
        Self::new(platform::get_data_dir().join(VAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VaultStorage for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read(&self.path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read vault file: {}", e)))
    }

    fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::Io(format!("Failed to create vault directory: {}", e)))?;
        }

        let tmp = self.path.with_extension("pmvault.tmp");
        fs::write(&tmp, bytes)
            .map_err(|e| StorageError::Io(format!("Failed to write vault file: {}", e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::Io(format!("Failed to replace vault file: {}", e)))
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| StorageError::Io(format!("Failed to remove vault file: {}", e)))?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
