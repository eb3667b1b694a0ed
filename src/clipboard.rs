//! System clipboard access.
//!
//! [`SystemClipboard`] is a thin wrapper around `arboard`. Clipboard
//! initialization fails on headless systems; callers decide how to
//! report that.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during clipboard operations.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened, e.g. on a headless system.
    #[error("clipboard not available: {0}")]
    Unavailable(String),
    /// The clipboard refused the update.
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Trait for clipboard implementations.
///
/// Lets the run flow swap the system clipboard for a test double.
pub trait Clipboard {
    /// Copies `text` to the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Waits for `delay`, then clears the clipboard if it still holds `text`.
    ///
    /// Returns `true` if the clipboard was cleared and `false` if something
    /// else had replaced its contents.
    fn clear_after(&mut self, text: &str, delay: Duration) -> Result<bool, ClipboardError>;
}

/// The desktop clipboard, via `arboard`.
///
/// A fresh handle is opened per operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Self::open()?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::debug!("copied password to clipboard");
        Ok(())
    }

    /// Blocks the calling thread for `delay`.
    fn clear_after(&mut self, text: &str, delay: Duration) -> Result<bool, ClipboardError> {
        tracing::info!(secs = delay.as_secs(), "clipboard will be cleared");
        std::thread::sleep(delay);

        let mut clipboard = Self::open()?;
        let current = clipboard.get_text().ok();
        if current.as_deref() != Some(text) {
            tracing::debug!("clipboard contents changed; leaving untouched");
            return Ok(false);
        }

        clipboard
            .clear()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::info!("clipboard cleared");
        Ok(true)
    }
}

/// In-memory clipboard for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MockClipboard {
    pub(crate) contents: Option<String>,
    pub(crate) unavailable: bool,
    pub(crate) clears: Vec<Duration>,
}

#[cfg(test)]
impl Clipboard for MockClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::Unavailable("no display".into()));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }

    fn clear_after(&mut self, text: &str, delay: Duration) -> Result<bool, ClipboardError> {
        self.clears.push(delay);
        if self.contents.as_deref() != Some(text) {
            return Ok(false);
        }
        self.contents = None;
        Ok(true)
    }
}
