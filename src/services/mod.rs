// PMVault services
// Services provide the vault core: crypto, vault session store, password
// generation, strength scoring, and settings.

pub mod crypto_service;
pub mod password_generator;
pub mod settings_engine;
pub mod strength_scorer;
pub mod vault_store;
