//! Randpass Library
//!
//! Generates cryptographically random passwords from a configurable
//! set of character categories (lowercase, uppercase, digits, symbols).
//!
//! # Architecture
//!
//! ```text
//! cli flags ─┐
//!            ├→ PasswordConfig → validate → alphabet → secure draws → password
//! config file┘                                                          ↓
//!                                                            stdout / clipboard
//! ```
//!
//! # Design Principles
//!
//! - **OS randomness only**: every draw comes from a `CryptoRng` source
//! - **Uniform by default**: rejection sampling removes modulo bias;
//!   modulo reduction remains available for parity
//! - **No partial output**: any failure returns an error and no password
//!
//! # Example
//!
//! ```no_run
//! use randpass::{generate, Category, PasswordConfig};
//!
//! let config = PasswordConfig::with_length(24).exclude(Category::Symbols);
//! let password = generate(&config).unwrap();
//! assert_eq!(password.len(), 24);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod generator;

// Re-export commonly used types at crate root
pub use app::AppError;
pub use config::{ConfigError, FileConfig, PasswordConfig, ValidationError};
pub use generator::{
    build_alphabet, generate, generate_from_alphabet, generate_with, Category, GenerationError,
    Sampling,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
