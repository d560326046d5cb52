//! Persisted-bytes storage for the encrypted vault blob.
//!
//! The vault core treats persistence as an opaque byte sink: it hands the
//! storage a fully encrypted payload and reads the same bytes back. The
//! [`VaultStorage`] trait keeps the backend swappable; [`FileStore`] persists
//! to a `.pmvault` file and [`MemoryStore`] backs tests.

mod file_store;

pub use file_store::FileStore;

use std::sync::Mutex;

use crate::types::errors::StorageError;

/// Backend holding the persisted encrypted vault bytes.
pub trait VaultStorage: Send + Sync {
    /// Reads the persisted bytes, or `None` when no vault has been stored yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Atomically replaces the persisted bytes.
    fn write(&self, bytes: &[u8]) -> Result<(), StorageError>;

    /// Removes any persisted bytes. Idempotent.
    fn clear(&self) -> Result<(), StorageError>;

    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
}

/// In-memory storage backend. The bytes are discarded on drop, so it is
/// mainly useful for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    bytes: Mutex<Option<Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VaultStorage for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self
            .bytes
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?
            .clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<(), StorageError> {
        *self
            .bytes
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))? = Some(bytes.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self
            .bytes
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))? = None;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
