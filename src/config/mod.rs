//! Generation options and the optional defaults file.
//!
//! [`PasswordConfig`] is the validated input to the generator.
//! [`FileConfig`] supplies user defaults from a TOML file.

mod file;
mod options;

pub use file::{ClipboardConfig, ConfigError, FileConfig, GeneratorConfig};
pub use options::{PasswordConfig, ValidationError, DEFAULT_LENGTH};
