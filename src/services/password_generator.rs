//! Random password generation with character-class minimums.

use ring::rand::{SecureRandom, SystemRandom};

use crate::types::errors::GeneratorError;
use crate::types::generator::GeneratorOptions;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Stateless password generator backed by the system CSPRNG.
pub struct PasswordGenerator {
    rng: SystemRandom,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Generates a random password honoring the options' character classes.
    ///
    /// When numbers/symbols are enabled with a non-zero minimum, that many
    /// characters of the class are placed first (clamped to the total
    /// length), the remainder is drawn from the combined charset, and the
    /// result is Fisher-Yates shuffled so required characters are not
    /// clustered at fixed positions.
    ///
    /// The output length always equals `options.length`. Class minimums are
    /// lower bounds: the combined-charset fill may add more of a class.
    pub fn generate(&self, options: &GeneratorOptions) -> Result<String, GeneratorError> {
        let mut charset = String::new();
        if options.include_uppercase {
            charset.push_str(UPPERCASE);
        }
        if options.include_lowercase {
            charset.push_str(LOWERCASE);
        }
        if options.include_numbers {
            charset.push_str(NUMBERS);
        }
        if options.include_symbols {
            charset.push_str(SYMBOLS);
        }
        if charset.is_empty() {
            return Err(GeneratorError::EmptyCharset);
        }

        let charset: Vec<char> = charset.chars().collect();
        let numbers: Vec<char> = NUMBERS.chars().collect();
        let symbols: Vec<char> = SYMBOLS.chars().collect();

        let mut password: Vec<char> = Vec::with_capacity(options.length);

        if options.include_numbers {
            let count = options
                .numbers_count
                .unwrap_or(options.length * 20 / 100)
                .min(options.length);
            for _ in 0..count {
                password.push(self.pick(&numbers)?);
            }
        }
        if options.include_symbols {
            let count = options
                .symbols_count
                .unwrap_or(options.length * 15 / 100)
                .min(options.length.saturating_sub(password.len()));
            for _ in 0..count {
                password.push(self.pick(&symbols)?);
            }
        }

        while password.len() < options.length {
            password.push(self.pick(&charset)?);
        }

        self.shuffle(&mut password)?;
        Ok(password.into_iter().collect())
    }

    fn pick(&self, chars: &[char]) -> Result<char, GeneratorError> {
        Ok(chars[self.random_index(chars.len())?])
    }

    /// Fisher-Yates shuffle with a fresh secure random index per swap.
    fn shuffle(&self, chars: &mut [char]) -> Result<(), GeneratorError> {
        for i in (1..chars.len()).rev() {
            let j = self.random_index(i + 1)?;
            chars.swap(i, j);
        }
        Ok(())
    }

    /// Uniform random index in `0..bound` via rejection sampling, so no
    /// modulo bias leaks into generated passwords.
    fn random_index(&self, bound: usize) -> Result<usize, GeneratorError> {
        debug_assert!(bound > 0 && bound <= u32::MAX as usize);
        let bound = bound as u32;
        let limit = (u32::MAX / bound) * bound;

        loop {
            let mut buf = [0u8; 4];
            self.rng
                .fill(&mut buf)
                .map_err(|_| GeneratorError::RandomSource("Failed to draw random bytes".to_string()))?;
            let value = u32::from_be_bytes(buf);
            if value < limit {
                return Ok((value % bound) as usize);
            }
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
