//! Character categories and alphabet construction.

use crate::config::PasswordConfig;

/// Lowercase letters.
pub const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters.
pub const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGIT_CHARS: &str = "0123456789";
/// Symbols.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()-_=+[]{}<>?/~";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `a-z`
    Lower,
    /// `A-Z`
    Upper,
    /// `0-9`
    Digits,
    /// Punctuation and brackets, see [`SYMBOL_CHARS`].
    Symbols,
}

impl Category {
    /// All categories in alphabet order.
    pub const ALL: [Category; 4] = [
        Category::Lower,
        Category::Upper,
        Category::Digits,
        Category::Symbols,
    ];

    /// Characters belonging to this category.
    pub fn chars(self) -> &'static str {
        match self {
            Category::Lower => LOWER_CHARS,
            Category::Upper => UPPER_CHARS,
            Category::Digits => DIGIT_CHARS,
            Category::Symbols => SYMBOL_CHARS,
        }
    }

    /// Short name used in logs and help output.
    pub fn name(self) -> &'static str {
        match self {
            Category::Lower => "lower",
            Category::Upper => "upper",
            Category::Digits => "digits",
            Category::Symbols => "symbols",
        }
    }
}

/// Builds the alphabet for `config`.
///
/// Concatenates the enabled categories in the order lower, upper,
/// digits, symbols. Total over any configuration: returns an empty
/// string when every category is excluded.
pub fn build_alphabet(config: &PasswordConfig) -> String {
    config
        .enabled_categories()
        .map(Category::chars)
        .collect()
}
