//! Vault session store.
//!
//! Owns the decrypted in-memory vault for one session and persists it as a
//! single authenticated-encrypted blob. Every mutation re-encrypts the entire
//! vault with a fresh salt and IV; there is no incremental persistence.
//!
//! A `VaultStore` is an explicit session object owned by the caller, so
//! multiple sessions (or tests) can coexist without shared state.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::services::crypto_service::{CryptoService, VaultCrypto};
use crate::storage::VaultStorage;
use crate::types::errors::VaultError;
use crate::types::vault::{
    EncryptedBlob, EntryUpdate, NewEntry, PasswordEntry, VaultData, VAULT_VERSION,
};

/// Session state machine over one in-memory `VaultData`.
pub struct VaultStore {
    storage: Arc<dyn VaultStorage>,
    crypto: CryptoService,
    vault: Option<VaultData>,
}

impl VaultStore {
    pub fn new(storage: Arc<dyn VaultStorage>) -> Self {
        Self {
            storage,
            crypto: CryptoService::new(),
            vault: None,
        }
    }

    /// Whether this session currently holds a decrypted vault.
    pub fn is_loaded(&self) -> bool {
        self.vault.is_some()
    }

    /// Creates an empty vault protected by the given master password and
    /// persists it immediately.
    ///
    /// Fails with [`VaultError::VaultAlreadyExists`] if this session already
    /// holds a vault.
    pub fn setup_master_password(&mut self, master_password: &str) -> Result<&VaultData, VaultError> {
        if self.vault.is_some() {
            return Err(VaultError::VaultAlreadyExists);
        }

        let vault = VaultData {
            entries: Vec::new(),
            version: VAULT_VERSION.to_string(),
            last_modified: Self::now_ts(),
            master_password_hash: self.crypto.hash_master_password(master_password)?,
        };

        self.vault = Some(vault);
        self.persist(master_password)?;
        self.require_loaded()
    }

    /// Decrypts the persisted vault and replaces this session's in-memory
    /// state with it.
    ///
    /// On any failure, including [`AuthenticationFailure`], the prior session
    /// state is left untouched.
    ///
    /// [`AuthenticationFailure`]: crate::types::errors::CryptoError::AuthenticationFailure
    pub fn load_vault(&mut self, master_password: &str) -> Result<&VaultData, VaultError> {
        let bytes = self
            .storage
            .read()?
            .ok_or_else(|| VaultError::Io("No persisted vault found".to_string()))?;
        let vault = self.decode_blob(&bytes, master_password)?;
        self.vault = Some(vault);
        self.require_loaded()
    }

    /// Fast-path master password check against the embedded salted hash.
    ///
    /// Requires a loaded vault; it is not a substitute for decrypt-based
    /// verification when importing an unfamiliar blob.
    pub fn verify_master_password(&self, master_password: &str) -> Result<bool, VaultError> {
        let vault = self.require_loaded()?;
        Ok(self
            .crypto
            .verify_master_password(master_password, &vault.master_password_hash))
    }

    /// Adds a new entry and persists the whole vault.
    ///
    /// The in-memory mutation is applied before the persist step; if the
    /// persist fails, the caller must reconcile in-memory and persisted state.
    pub fn add_entry(
        &mut self,
        new: NewEntry,
        master_password: &str,
    ) -> Result<PasswordEntry, VaultError> {
        let now = Self::now_ts();
        let entry = PasswordEntry {
            id: Uuid::new_v4().to_string(),
            website: new.website,
            username: new.username,
            password: new.password,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };

        let vault = self.require_loaded_mut()?;
        vault.entries.push(entry.clone());
        vault.last_modified = now;

        self.persist(master_password)?;
        Ok(entry)
    }

    /// Applies an [`EntryUpdate`] to an existing entry and persists the whole
    /// vault. `updated_at` always moves strictly forward, even when two
    /// updates land within the same millisecond.
    pub fn update_entry(
        &mut self,
        id: &str,
        update: EntryUpdate,
        master_password: &str,
    ) -> Result<PasswordEntry, VaultError> {
        let now = Self::now_ts();
        let vault = self.require_loaded_mut()?;
        let entry = vault
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| VaultError::EntryNotFound(id.to_string()))?;

        if let Some(website) = update.website {
            entry.website = website;
        }
        if let Some(username) = update.username {
            entry.username = username;
        }
        if let Some(password) = update.password {
            entry.password = password;
        }
        if let Some(notes) = update.notes {
            entry.notes = notes;
        }
        entry.updated_at = now.max(entry.updated_at + 1);
        let updated = entry.clone();
        vault.last_modified = updated.updated_at;

        self.persist(master_password)?;
        Ok(updated)
    }

    /// Removes an entry by id and persists the whole vault.
    pub fn delete_entry(&mut self, id: &str, master_password: &str) -> Result<(), VaultError> {
        let vault = self.require_loaded_mut()?;
        let before = vault.entries.len();
        vault.entries.retain(|e| e.id != id);
        if vault.entries.len() == before {
            return Err(VaultError::EntryNotFound(id.to_string()));
        }
        vault.last_modified = Self::now_ts();

        self.persist(master_password)
    }

    /// Case-insensitive substring search over website, username, and notes.
    ///
    /// An empty query returns all entries. Pure projection; nothing is
    /// persisted.
    pub fn search_entries(&self, query: &str) -> Result<Vec<PasswordEntry>, VaultError> {
        let vault = self.require_loaded()?;
        if query.is_empty() {
            return Ok(vault.entries.clone());
        }

        let needle = query.to_lowercase();
        Ok(vault
            .entries
            .iter()
            .filter(|e| {
                e.website.to_lowercase().contains(&needle)
                    || e.username.to_lowercase().contains(&needle)
                    || e.notes.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    /// Re-encrypts and persists the current in-memory vault with a fresh
    /// salt and IV.
    pub fn save_vault(&mut self, master_password: &str) -> Result<(), VaultError> {
        self.require_loaded()?;
        self.persist(master_password)
    }

    /// Returns the persisted blob bytes for `.pmvault` export.
    ///
    /// The export format is byte-identical to the persisted representation.
    pub fn export_vault_file(&self) -> Result<Vec<u8>, VaultError> {
        self.require_loaded()?;
        self.storage
            .read()?
            .ok_or_else(|| VaultError::Io("No persisted vault to export".to_string()))
    }

    /// Imports a `.pmvault` payload, fully replacing both the in-memory vault
    /// and the persisted bytes.
    pub fn import_vault_file(
        &mut self,
        bytes: &[u8],
        master_password: &str,
    ) -> Result<&VaultData, VaultError> {
        let vault = self.decode_blob(bytes, master_password)?;
        self.storage.write(bytes)?;
        self.vault = Some(vault);
        self.require_loaded()
    }

    /// Wipes the persisted blob and in-memory vault unconditionally.
    pub fn clear_all_data(&mut self) -> Result<(), VaultError> {
        self.vault = None;
        self.storage.clear()?;
        Ok(())
    }

    /// Drops the in-memory vault, e.g. on auto-lock timeout. The persisted
    /// blob is untouched.
    pub fn lock(&mut self) {
        self.vault = None;
    }

    fn require_loaded(&self) -> Result<&VaultData, VaultError> {
        self.vault.as_ref().ok_or(VaultError::NoVaultLoaded)
    }

    fn require_loaded_mut(&mut self) -> Result<&mut VaultData, VaultError> {
        self.vault.as_mut().ok_or(VaultError::NoVaultLoaded)
    }

    /// Parses and decrypts a blob wire payload into a `VaultData` without
    /// touching session state.
    fn decode_blob(&self, bytes: &[u8], master_password: &str) -> Result<VaultData, VaultError> {
        let blob = EncryptedBlob::from_file_bytes(bytes)?;
        let plaintext = self.crypto.decrypt(&blob, master_password)?;
        serde_json::from_slice(&plaintext).map_err(|e| VaultError::Serialization(e.to_string()))
    }

    /// Serializes, encrypts, and writes the whole in-memory vault.
    fn persist(&self, master_password: &str) -> Result<(), VaultError> {
        let vault = self.require_loaded()?;
        let plaintext =
            serde_json::to_vec(vault).map_err(|e| VaultError::Serialization(e.to_string()))?;
        let blob = self.crypto.encrypt(&plaintext, master_password)?;
        let bytes = blob.to_file_bytes()?;
        self.storage.write(&bytes)?;
        Ok(())
    }

    fn now_ts() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}
