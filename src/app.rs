//! One randpass run: load defaults, generate, then print or copy.
//!
//! Output and clipboard are passed in so the whole flow can run
//! against in-memory doubles.

use std::error::Error;
use std::io::{self, Write};

use rand_core::OsRng;
use thiserror::Error;

use crate::cli::Cli;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::{ConfigError, FileConfig};
use crate::generator::{generate_with, GenerationError};

/// Message printed after a successful copy.
pub const COPIED_MESSAGE: &str = "Password copied to clipboard!";

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// The defaults file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// No password could be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// The clipboard step failed.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    /// Writing to stdout failed.
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// Runs one invocation.
///
/// Without copying, the password and a newline go to `out`. With
/// copying, `out` gets a confirmation; if the clipboard fails the
/// password is written to `out` and the clipboard error is returned.
pub fn run<W, C>(cli: &Cli, out: &mut W, clipboard: &mut C) -> Result<(), AppError>
where
    W: Write + ?Sized,
    C: Clipboard + ?Sized,
{
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let invocation = cli.resolve(&file);

    let password = generate_with(&invocation.password, invocation.sampling, &mut OsRng)?;

    if !invocation.copy {
        writeln!(out, "{}", password)?;
        return Ok(());
    }

    if let Err(e) = clipboard.copy(&password) {
        tracing::warn!("clipboard unavailable, printing instead");
        writeln!(out, "{}", password)?;
        return Err(e.into());
    }
    writeln!(out, "{}", COPIED_MESSAGE)?;
    out.flush()?;

    if let Some(delay) = invocation.clear_after {
        if !clipboard.clear_after(&password, delay)? {
            tracing::debug!("clipboard left as is");
        }
    }

    Ok(())
}

/// Formats `err` and its sources as one `a: b: c` line.
pub fn error_report(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::config::ValidationError;
    use clap::Parser;
    use std::time::Duration;

    fn run_with(args: &[&str], clipboard: &mut MockClipboard) -> (Result<(), AppError>, String) {
        let mut cli =
            Cli::try_parse_from(std::iter::once("randpass").chain(args.iter().copied())).unwrap();
        // Keep a RANDPASS_CONFIG from the environment out of the run.
        if !args.contains(&"--config") {
            cli.config = None;
        }

        let mut out = Vec::new();
        let result = run(&cli, &mut out, clipboard);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_password_with_newline() {
        let mut clipboard = MockClipboard::default();
        let (result, out) = run_with(&["-l", "20", "--nl", "--nu", "--ns"], &mut clipboard);

        assert!(result.is_ok());
        let password = out.strip_suffix('\n').unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn test_copy_prints_confirmation_only() {
        let mut clipboard = MockClipboard::default();
        let (result, out) = run_with(&["-c", "-l", "24"], &mut clipboard);

        assert!(result.is_ok());
        assert_eq!(out, format!("{}\n", COPIED_MESSAGE));
        assert_eq!(clipboard.contents.as_ref().map(String::len), Some(24));
        assert!(clipboard.clears.is_empty());
    }

    #[test]
    fn test_clipboard_failure_prints_then_fails() {
        let mut clipboard = MockClipboard {
            unavailable: true,
            ..Default::default()
        };
        let (result, out) = run_with(&["--copy", "-l", "12"], &mut clipboard);

        assert!(matches!(
            result,
            Err(AppError::Clipboard(ClipboardError::Unavailable(_)))
        ));
        let password = out.strip_suffix('\n').unwrap();
        assert_eq!(password.len(), 12);
        assert!(!out.contains(COPIED_MESSAGE));
    }

    #[test]
    fn test_clear_after_clears_copied_password() {
        let mut clipboard = MockClipboard::default();
        let (result, _) = run_with(&["--clear-after", "3"], &mut clipboard);

        assert!(result.is_ok());
        assert_eq!(clipboard.clears, vec![Duration::from_secs(3)]);
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn test_invalid_length_writes_nothing() {
        let mut clipboard = MockClipboard::default();
        let (result, out) = run_with(&["-l", "0"], &mut clipboard);

        assert!(matches!(
            result,
            Err(AppError::Generation(GenerationError::InvalidConfig(
                ValidationError::InvalidLength(0)
            )))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_config_file() {
        let mut clipboard = MockClipboard::default();
        let (result, out) =
            run_with(&["--config", "/nonexistent/randpass.toml"], &mut clipboard);

        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::FileRead(_)))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_report_chain() {
        let err = AppError::from(GenerationError::InvalidConfig(
            ValidationError::InvalidLength(-5),
        ));
        assert_eq!(
            error_report(&err),
            "password length must be greater than 0 (got -5)"
        );

        let err = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(error_report(&err), "failed to write output: pipe closed");
    }
}
