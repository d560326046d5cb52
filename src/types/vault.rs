use serde::{Deserialize, Serialize};

use crate::types::errors::VaultError;

/// Current on-disk vault format version.
pub const VAULT_VERSION: &str = "1.0";

/// One stored website credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordEntry {
    /// UUID v4, immutable after creation.
    pub id: String,
    pub website: String,
    pub username: String,
    pub password: String,
    pub notes: String,
    /// Unix timestamp in milliseconds, set once.
    pub created_at: i64,
    /// Unix timestamp in milliseconds, refreshed on every mutation.
    pub updated_at: i64,
}

/// Field values for a new entry; id and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    pub website: String,
    pub username: String,
    pub password: String,
    pub notes: String,
}

/// Explicit optional-field update for an existing entry.
///
/// Only the four caller-editable fields can change; `None` leaves a field
/// untouched. The entry id and `created_at` are never updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryUpdate {
    pub website: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub notes: Option<String>,
}

/// The full decrypted vault for one user.
///
/// Only ever materialized by decrypting an [`EncryptedBlob`] with the correct
/// master password, or by first-time setup. Never written to disk in the clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultData {
    /// Entries in insertion order.
    pub entries: Vec<PasswordEntry>,
    pub version: String,
    /// Unix timestamp in milliseconds, refreshed on every entry mutation.
    pub last_modified: i64,
    /// Salted one-way hash of the master password, computed independently of
    /// the encryption key. Enables fast-path verification; decrypt failure
    /// remains the authoritative check.
    pub master_password_hash: String,
}

/// Authenticated-encrypted vault payload.
///
/// The ciphertext carries the GCM tag appended. Salt and IV are freshly
/// random on every encryption call, so the blob is self-describing and
/// portable across devices without any side channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptedBlob {
    #[serde(rename = "encryptedData", with = "base64_bytes")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub iv: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
}

impl EncryptedBlob {
    /// Serializes the blob to its storage/file wire form.
    ///
    /// The same bytes are used for local persistence and `.pmvault` export.
    pub fn to_file_bytes(&self) -> Result<Vec<u8>, VaultError> {
        serde_json::to_vec(self).map_err(|e| VaultError::Serialization(e.to_string()))
    }

    /// Parses a blob from its storage/file wire form.
    ///
    /// Invalid JSON or invalid base64 in any field is a [`VaultError::MalformedBlob`].
    pub fn from_file_bytes(bytes: &[u8]) -> Result<Self, VaultError> {
        serde_json::from_slice(bytes).map_err(|e| VaultError::MalformedBlob(e.to_string()))
    }
}

/// Serde helper encoding byte fields as standard base64 strings at the
/// storage boundary.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
