//! Unit tests for the CryptoService.
//!
//! Tests key derivation determinism, whole-blob encryption/decryption,
//! salt/IV freshness, and master password hashing.

use pmvault::services::crypto_service::{CryptoService, VaultCrypto, KEY_LENGTH, SALT_LENGTH};
use pmvault::types::errors::CryptoError;
use pmvault::types::vault::EncryptedBlob;

#[test]
fn test_derive_key_is_deterministic_per_salt() {
    let service = CryptoService::new();
    let salt = vec![42u8; SALT_LENGTH];

    let key1 = service.derive_key("hunter2", &salt).unwrap();
    let key2 = service.derive_key("hunter2", &salt).unwrap();
    assert_eq!(key1, key2);
    assert_eq!(key1.len(), KEY_LENGTH);
}

#[test]
fn test_derive_key_unlinkable_across_salts() {
    let service = CryptoService::new();
    let key1 = service.derive_key("hunter2", &[1u8; SALT_LENGTH]).unwrap();
    let key2 = service.derive_key("hunter2", &[2u8; SALT_LENGTH]).unwrap();
    assert_ne!(key1, key2);
}

#[test]
fn test_encrypt_embeds_fresh_salt_and_iv() {
    let service = CryptoService::new();
    let blob1 = service.encrypt(b"vault payload", "master").unwrap();
    let blob2 = service.encrypt(b"vault payload", "master").unwrap();

    assert_eq!(blob1.salt.len(), 16);
    assert_eq!(blob1.iv.len(), 12);
    assert_ne!(blob1.salt, blob2.salt);
    assert_ne!(blob1.iv, blob2.iv);
    assert_ne!(blob1.ciphertext, blob2.ciphertext);
}

#[test]
fn test_roundtrip_through_wire_format() {
    let service = CryptoService::new();
    let blob = service.encrypt(b"{\"entries\":[]}", "master").unwrap();

    // Persist and re-read through the JSON/base64 boundary.
    let bytes = blob.to_file_bytes().unwrap();
    let parsed = EncryptedBlob::from_file_bytes(&bytes).unwrap();
    assert_eq!(parsed, blob);

    let plaintext = service.decrypt(&parsed, "master").unwrap();
    assert_eq!(plaintext, b"{\"entries\":[]}");
}

#[test]
fn test_wrong_password_and_tampering_are_indistinguishable() {
    let service = CryptoService::new();
    let blob = service.encrypt(b"secret", "right").unwrap();

    let wrong = service.decrypt(&blob, "wrong").unwrap_err();

    let mut tampered = blob.clone();
    tampered.ciphertext[0] ^= 0x01;
    let corrupt = service.decrypt(&tampered, "right").unwrap_err();

    assert_eq!(wrong, CryptoError::AuthenticationFailure);
    assert_eq!(corrupt, CryptoError::AuthenticationFailure);
}

#[test]
fn test_large_plaintext_roundtrip() {
    let service = CryptoService::new();
    let plaintext = vec![0xABu8; 64 * 1024];
    let blob = service.encrypt(&plaintext, "master").unwrap();
    assert_eq!(service.decrypt(&blob, "master").unwrap(), plaintext);
}

#[test]
fn test_master_password_hash_verifies() {
    let service = CryptoService::new();
    let hash = service.hash_master_password("Correct-Horse1!").unwrap();

    assert!(service.verify_master_password("Correct-Horse1!", &hash));
    assert!(!service.verify_master_password("correct-horse1!", &hash));
    assert!(!service.verify_master_password("", &hash));
}

#[test]
fn test_master_password_hash_is_not_the_password() {
    let service = CryptoService::new();
    let hash = service.hash_master_password("visible-secret").unwrap();
    assert!(!hash.contains("visible-secret"));
}

#[test]
fn test_hash_format_has_salt_and_digest() {
    let service = CryptoService::new();
    let hash = service.hash_master_password("pw").unwrap();
    let parts: Vec<&str> = hash.split('$').collect();
    assert_eq!(parts.len(), 2);
    assert!(!parts[0].is_empty());
    assert!(!parts[1].is_empty());
}
