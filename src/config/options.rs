//! Password generation options and their validation.

use serde::{Deserialize, Serialize};

use crate::generator::Category;

/// Default password length when none is supplied.
pub const DEFAULT_LENGTH: i64 = 16;

/// Options for a single password generation.
///
/// Built once per invocation and consumed by the generator. Each
/// `exclude_*` toggle removes one category from the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Number of characters to produce.
    ///
    /// Signed so that negative input reaches [`PasswordConfig::validate`].
    pub length: i64,
    /// Remove `a-z`.
    pub exclude_lower: bool,
    /// Remove `A-Z`.
    pub exclude_upper: bool,
    /// Remove `0-9`.
    pub exclude_digits: bool,
    /// Remove the symbol set.
    pub exclude_symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            exclude_lower: false,
            exclude_upper: false,
            exclude_digits: false,
            exclude_symbols: false,
        }
    }
}

impl PasswordConfig {
    /// Creates a configuration with every category enabled.
    pub fn with_length(length: i64) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Returns a copy with `category` excluded.
    pub fn exclude(mut self, category: Category) -> Self {
        match category {
            Category::Lower => self.exclude_lower = true,
            Category::Upper => self.exclude_upper = true,
            Category::Digits => self.exclude_digits = true,
            Category::Symbols => self.exclude_symbols = true,
        }
        self
    }

    /// Returns true if `category` contributes to the alphabet.
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Lower => !self.exclude_lower,
            Category::Upper => !self.exclude_upper,
            Category::Digits => !self.exclude_digits,
            Category::Symbols => !self.exclude_symbols,
        }
    }

    /// Enabled categories in alphabet order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.includes(*c))
    }

    /// Validates the configuration.
    ///
    /// There is no upper bound on length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.length <= 0 {
            return Err(ValidationError::InvalidLength(self.length));
        }
        if self.enabled_categories().next().is_none() {
            return Err(ValidationError::NoCharacterSetEnabled);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Length is zero or negative.
    #[error("password length must be greater than 0 (got {0})")]
    InvalidLength(i64),
    /// Every category is excluded.
    #[error("at least one character type must be enabled")]
    NoCharacterSetEnabled,
}
