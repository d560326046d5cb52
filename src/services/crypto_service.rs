use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ring::aead::{self, Aad, BoundKey, Nonce, NonceSequence, UnboundKey, AES_256_GCM};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;
use zeroize::Zeroize;

use crate::types::errors::CryptoError;
use crate::types::vault::EncryptedBlob;

/// PBKDF2 iteration count for key derivation and master-password hashing.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes for PBKDF2.
pub const SALT_LENGTH: usize = 16;

/// AES-256-GCM key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// AES-256-GCM nonce/IV length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// AES-256-GCM authentication tag length in bytes.
const TAG_LENGTH: usize = 16;

/// Trait defining the vault's cryptographic operations.
pub trait VaultCrypto {
    /// Derives a 256-bit encryption key from a master password and a 16-byte
    /// salt using PBKDF2-HMAC-SHA256. Deterministic for identical inputs.
    fn derive_key(&self, master_password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Encrypts plaintext under a key derived from the master password with a
    /// fresh random salt and IV. The GCM tag is appended to the ciphertext.
    fn encrypt(&self, plaintext: &[u8], master_password: &str)
        -> Result<EncryptedBlob, CryptoError>;

    /// Decrypts a blob with a key re-derived from the master password and the
    /// blob's own salt. Fails with [`CryptoError::AuthenticationFailure`] when
    /// the tag does not verify, for wrong password and tampering alike.
    fn decrypt(&self, blob: &EncryptedBlob, master_password: &str)
        -> Result<Vec<u8>, CryptoError>;

    /// Computes a salted one-way hash of the master password, independent of
    /// the encryption key. Encoded as `base64(salt)$base64(hash)`.
    fn hash_master_password(&self, master_password: &str) -> Result<String, CryptoError>;

    /// Verifies a master password against a stored hash in constant time.
    /// A structurally invalid stored hash verifies as false.
    fn verify_master_password(&self, master_password: &str, stored_hash: &str) -> bool;

    /// Generates a cryptographically secure random salt.
    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError>;

    /// Generates cryptographically secure random bytes of the given length.
    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError>;
}

/// A nonce sequence that yields a single nonce value.
/// Used for one-shot encryption/decryption operations.
struct SingleNonce {
    nonce: Option<[u8; NONCE_LENGTH]>,
}

impl SingleNonce {
    fn new(nonce_bytes: [u8; NONCE_LENGTH]) -> Self {
        Self {
            nonce: Some(nonce_bytes),
        }
    }
}

impl NonceSequence for SingleNonce {
    fn advance(&mut self) -> Result<Nonce, ring::error::Unspecified> {
        self.nonce
            .take()
            .map(Nonce::assume_unique_for_key)
            .ok_or(ring::error::Unspecified)
    }
}

/// Implementation of the vault's cryptography using the `ring` crate.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Seals plaintext under an already-derived key with the given nonce.
    fn seal(
        &self,
        plaintext: &[u8],
        key: &[u8],
        nonce_bytes: [u8; NONCE_LENGTH],
    ) -> Result<Vec<u8>, CryptoError> {
        let unbound_key = UnboundKey::new(&AES_256_GCM, key)
            .map_err(|_| CryptoError::Encryption("Failed to create encryption key".to_string()))?;
        let mut sealing_key = aead::SealingKey::new(unbound_key, SingleNonce::new(nonce_bytes));

        let mut in_out = plaintext.to_vec();
        sealing_key
            .seal_in_place_append_tag(Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::Encryption("Encryption operation failed".to_string()))?;
        Ok(in_out)
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultCrypto for CryptoService {
    fn derive_key(&self, master_password: &str, salt: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if salt.len() != SALT_LENGTH {
            return Err(CryptoError::InvalidInput(format!(
                "Salt must be {} bytes, got {}",
                SALT_LENGTH,
                salt.len()
            )));
        }

        let iterations = NonZeroU32::new(PBKDF2_ITERATIONS)
            .ok_or_else(|| CryptoError::KeyDerivation("Invalid iteration count".to_string()))?;

        let mut key = vec![0u8; KEY_LENGTH];
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            salt,
            master_password.as_bytes(),
            &mut key,
        );

        Ok(key)
    }

    fn encrypt(
        &self,
        plaintext: &[u8],
        master_password: &str,
    ) -> Result<EncryptedBlob, CryptoError> {
        let salt = self.generate_salt()?;

        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| CryptoError::RandomGeneration("Failed to generate nonce".to_string()))?;

        let mut key = self.derive_key(master_password, &salt)?;
        let result = self.seal(plaintext, &key, nonce_bytes);
        key.zeroize();
        let ciphertext = result?;

        Ok(EncryptedBlob {
            ciphertext,
            iv: nonce_bytes.to_vec(),
            salt,
        })
    }

    fn decrypt(
        &self,
        blob: &EncryptedBlob,
        master_password: &str,
    ) -> Result<Vec<u8>, CryptoError> {
        if blob.iv.len() != NONCE_LENGTH {
            return Err(CryptoError::InvalidInput(format!(
                "IV must be {} bytes, got {}",
                NONCE_LENGTH,
                blob.iv.len()
            )));
        }
        if blob.salt.len() != SALT_LENGTH {
            return Err(CryptoError::InvalidInput(format!(
                "Salt must be {} bytes, got {}",
                SALT_LENGTH,
                blob.salt.len()
            )));
        }
        if blob.ciphertext.len() < TAG_LENGTH {
            // Too short to even hold a tag; same failure as a bad tag.
            return Err(CryptoError::AuthenticationFailure);
        }

        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        nonce_bytes.copy_from_slice(&blob.iv);

        let mut key = self.derive_key(master_password, &blob.salt)?;
        let unbound_key = UnboundKey::new(&AES_256_GCM, &key);
        key.zeroize();
        let unbound_key = unbound_key
            .map_err(|_| CryptoError::Encryption("Failed to create decryption key".to_string()))?;

        let mut opening_key = aead::OpeningKey::new(unbound_key, SingleNonce::new(nonce_bytes));

        let mut in_out = blob.ciphertext.clone();
        let plaintext = opening_key
            .open_in_place(Aad::empty(), &mut in_out)
            .map_err(|_| CryptoError::AuthenticationFailure)?;

        Ok(plaintext.to_vec())
    }

    fn hash_master_password(&self, master_password: &str) -> Result<String, CryptoError> {
        let salt = self.generate_salt()?;
        let mut hash = vec![0u8; KEY_LENGTH];

        let iterations = NonZeroU32::new(PBKDF2_ITERATIONS)
            .ok_or_else(|| CryptoError::KeyDerivation("Invalid iteration count".to_string()))?;
        pbkdf2::derive(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            master_password.as_bytes(),
            &mut hash,
        );

        Ok(format!("{}${}", BASE64.encode(&salt), BASE64.encode(&hash)))
    }

    fn verify_master_password(&self, master_password: &str, stored_hash: &str) -> bool {
        let Some((salt_b64, hash_b64)) = stored_hash.split_once('$') else {
            return false;
        };
        let (Ok(salt), Ok(hash)) = (BASE64.decode(salt_b64), BASE64.decode(hash_b64)) else {
            return false;
        };
        let Some(iterations) = NonZeroU32::new(PBKDF2_ITERATIONS) else {
            return false;
        };

        pbkdf2::verify(
            pbkdf2::PBKDF2_HMAC_SHA256,
            iterations,
            &salt,
            master_password.as_bytes(),
            &hash,
        )
        .is_ok()
    }

    fn generate_salt(&self) -> Result<Vec<u8>, CryptoError> {
        self.generate_random_bytes(SALT_LENGTH)
    }

    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError> {
        let mut bytes = vec![0u8; length];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| CryptoError::RandomGeneration("Failed to generate random bytes".to_string()))?;
        Ok(bytes)
    }
}
