use pmvault::types::errors::*;

// === CryptoError Tests ===

#[test]
fn crypto_error_display_variants() {
    assert_eq!(
        CryptoError::KeyDerivation("bad iteration count".to_string()).to_string(),
        "Key derivation failed: bad iteration count"
    );
    assert_eq!(
        CryptoError::InvalidInput("salt too short".to_string()).to_string(),
        "Invalid crypto input: salt too short"
    );
    assert_eq!(
        CryptoError::Encryption("seal failed".to_string()).to_string(),
        "Encryption failed: seal failed"
    );
    assert_eq!(
        CryptoError::RandomGeneration("entropy exhausted".to_string()).to_string(),
        "Random generation failed: entropy exhausted"
    );
    assert_eq!(
        CryptoError::AuthenticationFailure.to_string(),
        "Authentication failed: wrong master password or corrupted vault"
    );
}

#[test]
fn crypto_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(CryptoError::AuthenticationFailure);
    assert!(err.source().is_none());
}

#[test]
fn authentication_failure_does_not_reveal_cause() {
    // Wrong password and tampered ciphertext must render identically.
    let wrong_password = CryptoError::AuthenticationFailure;
    let tampered = CryptoError::AuthenticationFailure;
    assert_eq!(wrong_password.to_string(), tampered.to_string());
}

// === VaultError Tests ===

#[test]
fn vault_error_display_variants() {
    assert_eq!(VaultError::NoVaultLoaded.to_string(), "No vault loaded");
    assert_eq!(
        VaultError::VaultAlreadyExists.to_string(),
        "A vault already exists in this session"
    );
    assert_eq!(
        VaultError::EntryNotFound("abc-123".to_string()).to_string(),
        "Entry not found: abc-123"
    );
    assert_eq!(
        VaultError::MalformedBlob("bad base64".to_string()).to_string(),
        "Malformed vault blob: bad base64"
    );
    assert_eq!(
        VaultError::Serialization("truncated".to_string()).to_string(),
        "Vault serialization error: truncated"
    );
    assert_eq!(
        VaultError::Io("disk full".to_string()).to_string(),
        "Vault I/O error: disk full"
    );
}

#[test]
fn vault_error_wraps_crypto_error() {
    let err: VaultError = CryptoError::AuthenticationFailure.into();
    assert!(err.is_authentication_failure());
    assert_eq!(
        err.to_string(),
        "Authentication failed: wrong master password or corrupted vault"
    );
}

#[test]
fn vault_error_crypto_source_is_exposed() {
    let err: VaultError = CryptoError::AuthenticationFailure.into();
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_some());
}

#[test]
fn vault_error_from_storage_error() {
    let err: VaultError = StorageError::Io("permission denied".to_string()).into();
    assert_eq!(err.to_string(), "Vault I/O error: permission denied");
}

#[test]
fn non_authentication_errors_are_not_authentication_failures() {
    assert!(!VaultError::NoVaultLoaded.is_authentication_failure());
    assert!(!VaultError::MalformedBlob("x".to_string()).is_authentication_failure());
    assert!(!VaultError::Crypto(CryptoError::InvalidInput("x".to_string()))
        .is_authentication_failure());
}

// === GeneratorError Tests ===

#[test]
fn generator_error_display_variants() {
    assert_eq!(
        GeneratorError::EmptyCharset.to_string(),
        "No character classes enabled for password generation"
    );
    assert_eq!(
        GeneratorError::RandomSource("rng failed".to_string()).to_string(),
        "Random source failed: rng failed"
    );
}

// === StorageError Tests ===

#[test]
fn storage_error_display() {
    assert_eq!(
        StorageError::Io("broken pipe".to_string()).to_string(),
        "Storage I/O error: broken pipe"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("no such file".to_string()).to_string(),
        "Settings I/O error: no such file"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("foo".to_string()).to_string(),
        "Invalid settings key: foo"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected bool".to_string()).to_string(),
        "Invalid settings value: expected bool"
    );
}
