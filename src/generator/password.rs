//! Secure password generation.

use rand_core::{CryptoRng, OsRng, RngCore};
use thiserror::Error;

use super::charset::build_alphabet;
use super::sampling::{draw_indices, Sampling, MAX_ALPHABET_SIZE};
use crate::config::{PasswordConfig, ValidationError};

/// Errors that can occur during password generation.
///
/// No partial password is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The configuration failed validation.
    #[error(transparent)]
    InvalidConfig(#[from] ValidationError),
    /// The alphabet has no characters.
    #[error("no characters available for password generation")]
    EmptyAlphabet,
    /// The alphabet has more characters than one random byte can index.
    #[error("alphabet has {size} characters, at most {max} are supported")]
    UnsupportedAlphabet {
        /// Number of characters in the alphabet.
        size: usize,
        /// Largest supported alphabet.
        max: usize,
    },
    /// The secure random source could not supply bytes.
    #[error("secure random source failed")]
    RandomSourceFailure(#[source] rand_core::Error),
}

/// Generates a password from the OS random source using rejection sampling.
pub fn generate(config: &PasswordConfig) -> Result<String, GenerationError> {
    generate_with(config, Sampling::default(), &mut OsRng)
}

/// Generates a password with an explicit sampling strategy and source.
///
/// Validates `config`, builds its alphabet, then draws one character
/// per position.
pub fn generate_with<R>(
    config: &PasswordConfig,
    sampling: Sampling,
    rng: &mut R,
) -> Result<String, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    config.validate()?;

    let length =
        usize::try_from(config.length).map_err(|_| ValidationError::InvalidLength(config.length))?;
    let alphabet = build_alphabet(config);

    tracing::debug!(
        length,
        alphabet_size = alphabet.len(),
        categories = ?config.enabled_categories().map(|c| c.name()).collect::<Vec<_>>(),
        ?sampling,
        "generating password"
    );

    generate_from_alphabet(&alphabet, length, sampling, rng)
}

/// Generates `length` characters drawn uniformly from `alphabet`.
///
/// Each `char` of `alphabet` is one symbol, so non-ASCII characters are
/// kept whole. At most [`MAX_ALPHABET_SIZE`] characters are supported.
pub fn generate_from_alphabet<R>(
    alphabet: &str,
    length: usize,
    sampling: Sampling,
    rng: &mut R,
) -> Result<String, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    if symbols.len() > MAX_ALPHABET_SIZE {
        return Err(GenerationError::UnsupportedAlphabet {
            size: symbols.len(),
            max: MAX_ALPHABET_SIZE,
        });
    }

    let indices = draw_indices(symbols.len(), length, sampling, rng)
        .map_err(GenerationError::RandomSourceFailure)?;

    Ok(indices.into_iter().map(|i| symbols[i]).collect())
}
