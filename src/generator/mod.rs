//! Password generation.
//!
//! Turns a validated [`PasswordConfig`](crate::config::PasswordConfig)
//! into a password string:
//!
//! ```text
//! config → validate → alphabet → one secure draw per position → password
//! ```
//!
//! Randomness comes from any `RngCore + CryptoRng` source. The default
//! is the operating system's generator via `rand_core::OsRng`.

mod charset;
mod password;
mod sampling;
#[cfg(test)]
pub(crate) mod testing;

pub use charset::{build_alphabet, Category, DIGIT_CHARS, LOWER_CHARS, SYMBOL_CHARS, UPPER_CHARS};
pub use password::{generate, generate_from_alphabet, generate_with, GenerationError};
pub use sampling::{Sampling, MAX_ALPHABET_SIZE};
