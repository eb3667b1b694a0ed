//! Command-line interface definitions.
//!
//! Describes the flags with `clap` and merges them over the defaults
//! file. Contains no generation logic.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{FileConfig, PasswordConfig};
use crate::generator::Sampling;

const AFTER_HELP: &str = r#"Character Sets:
  Lower:   abcdefghijklmnopqrstuvwxyz
  Upper:   ABCDEFGHIJKLMNOPQRSTUVWXYZ
  Digits:  0123456789
  Symbols: !@#$%^&*()-_=+[]{}<>?/~

Examples:
  randpass                                  # Default 16-char password
  randpass -l 24 --no-symbols               # 24-char without symbols
  randpass --length 12 --nl --ns            # 12-char uppercase and digits only
  randpass -l 20 -c --clear-after 15        # Copy, then clear after 15 seconds
"#;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "randpass",
    version,
    about = "A simple, fast, secure command-line password generator",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Password length [default: 16]
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Exclude lowercase letters
    #[arg(long, visible_alias = "nl")]
    pub no_lower: bool,

    /// Exclude uppercase letters
    #[arg(long, visible_alias = "nu")]
    pub no_upper: bool,

    /// Exclude numbers
    #[arg(long, visible_alias = "nd")]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long, visible_alias = "ns")]
    pub no_symbols: bool,

    /// Copy password to clipboard instead of printing it
    #[arg(short, long)]
    pub copy: bool,

    /// Clear the clipboard after this many seconds (implies --copy)
    #[arg(long, value_name = "SECS")]
    pub clear_after: Option<u64>,

    /// How random bytes are mapped onto the character set
    #[arg(long, value_enum)]
    pub sampling: Option<Sampling>,

    /// Defaults file (TOML)
    #[arg(long, value_name = "PATH", env = "RANDPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Generation options after merging.
    pub password: PasswordConfig,
    /// Sampling strategy.
    pub sampling: Sampling,
    /// Copy to the clipboard instead of printing.
    pub copy: bool,
    /// Clear the clipboard after this delay.
    pub clear_after: Option<Duration>,
}

impl Cli {
    /// Applies flags over `file`.
    ///
    /// Flags win over file values. Exclusions are additive.
    pub fn resolve(&self, file: &FileConfig) -> Invocation {
        let defaults = file.generator.password;
        let password = PasswordConfig {
            length: self.length.unwrap_or(defaults.length),
            exclude_lower: defaults.exclude_lower || self.no_lower,
            exclude_upper: defaults.exclude_upper || self.no_upper,
            exclude_digits: defaults.exclude_digits || self.no_digits,
            exclude_symbols: defaults.exclude_symbols || self.no_symbols,
        };

        let clear_secs = self
            .clear_after
            .unwrap_or(file.clipboard.clear_after_secs);
        let copy = self.copy || self.clear_after.is_some() || file.clipboard.copy;

        Invocation {
            password,
            sampling: self.sampling.unwrap_or(file.generator.sampling),
            copy,
            clear_after: (copy && clear_secs > 0).then(|| Duration::from_secs(clear_secs)),
        }
    }

    /// Log level for the requested verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
