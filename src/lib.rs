//! PMVault — a local-first password vault core with authenticated encryption.
//!
//! Website credentials are stored under one master password and persisted as
//! a single AES-256-GCM blob. This library crate exposes the vault engine to
//! UI collaborators and integration tests; it contains no UI of its own.

pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
