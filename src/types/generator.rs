use serde::{Deserialize, Serialize};

/// Options for generating a random password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Minimum digit count; defaults to 20% of `length` when unset.
    pub numbers_count: Option<usize>,
    /// Minimum symbol count; defaults to 15% of `length` when unset.
    pub symbols_count: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            numbers_count: None,
            symbols_count: None,
        }
    }
}

/// Result of heuristic password strength scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// 0..=100, higher is stronger.
    pub score: u8,
    /// Human-readable suggestions for the missing criteria.
    pub feedback: Vec<String>,
}
