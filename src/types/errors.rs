use std::fmt;

// === CryptoError ===

/// Errors related to cryptographic operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    /// Failed to derive an encryption key from the master password.
    KeyDerivation(String),
    /// A salt, IV, or key had an invalid length.
    InvalidInput(String),
    /// Encryption operation failed.
    Encryption(String),
    /// Failed to generate random bytes.
    RandomGeneration(String),
    /// The GCM tag did not verify. Wrong master password and
    /// corrupted/tampered ciphertext are indistinguishable by design.
    AuthenticationFailure,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
            CryptoError::InvalidInput(msg) => write!(f, "Invalid crypto input: {}", msg),
            CryptoError::Encryption(msg) => write!(f, "Encryption failed: {}", msg),
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
            CryptoError::AuthenticationFailure => {
                write!(f, "Authentication failed: wrong master password or corrupted vault")
            }
        }
    }
}

impl std::error::Error for CryptoError {}

// === VaultError ===

/// Errors related to vault store operations.
#[derive(Debug)]
pub enum VaultError {
    /// A mutation or query was attempted before setup/load.
    NoVaultLoaded,
    /// Setup was attempted while the session already holds a vault.
    VaultAlreadyExists,
    /// No entry with the given id exists in the vault.
    EntryNotFound(String),
    /// The persisted blob is structurally invalid (bad JSON or base64).
    MalformedBlob(String),
    /// Failed to serialize or deserialize vault data.
    Serialization(String),
    /// Reading or writing the persisted bytes failed.
    Io(String),
    /// A cryptographic operation failed.
    Crypto(CryptoError),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::NoVaultLoaded => write!(f, "No vault loaded"),
            VaultError::VaultAlreadyExists => write!(f, "A vault already exists in this session"),
            VaultError::EntryNotFound(id) => write!(f, "Entry not found: {}", id),
            VaultError::MalformedBlob(msg) => write!(f, "Malformed vault blob: {}", msg),
            VaultError::Serialization(msg) => {
                write!(f, "Vault serialization error: {}", msg)
            }
            VaultError::Io(msg) => write!(f, "Vault I/O error: {}", msg),
            VaultError::Crypto(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaultError::Crypto(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CryptoError> for VaultError {
    fn from(err: CryptoError) -> Self {
        VaultError::Crypto(err)
    }
}

impl From<StorageError> for VaultError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(msg) => VaultError::Io(msg),
        }
    }
}

impl VaultError {
    /// True when the error means "wrong master password or corrupted vault",
    /// the single failure mode callers should show to the user.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, VaultError::Crypto(CryptoError::AuthenticationFailure))
    }
}

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Every character-class flag was disabled.
    EmptyCharset,
    /// The secure random source failed.
    RandomSource(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyCharset => {
                write!(f, "No character classes enabled for password generation")
            }
            GeneratorError::RandomSource(msg) => write!(f, "Random source failed: {}", msg),
        }
    }
}

impl std::error::Error for GeneratorError {}

// === StorageError ===

/// Errors raised by the persisted-bytes storage backend.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The underlying read/write/delete failed.
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
