// PMVault shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod generator;
pub mod settings;
pub mod vault;
