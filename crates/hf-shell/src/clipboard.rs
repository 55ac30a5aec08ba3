//! System clipboard access.
//!
//! The shell only ever writes plain text (a hex string). Writes go through
//! the [`Clipboard`] trait so sessions can run against an in-memory
//! clipboard in tests and on machines without a display server.

use thiserror::Error;

/// Clipboard write failure. Never fatal; the shell reports it as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
}

/// Anything that can take a line of text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::ClipboardWriteFailed`] when the platform
    /// clipboard is unavailable or rejects the write.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard, via `arboard`.
///
/// The handle is opened on first use and kept for the life of the value:
/// on X11 the copied text is served by this process, so dropping the handle
/// early would drop the selection with it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        let cb = match self.inner.take() {
            Some(cb) => cb,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.inner.insert(cb))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()
            .and_then(|cb| cb.set_text(text))
            .map_err(|e| ClipboardError::ClipboardWriteFailed(e.to_string()))
    }
}

/// In-memory clipboard; keeps the last text written.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_write() {
        let mut cb = MemoryClipboard::new();
        assert_eq!(cb.contents(), None);
        cb.set_text("#845ec2").unwrap();
        cb.set_text("#51e178").unwrap();
        assert_eq!(cb.contents(), Some("#51e178"));
    }

    #[test]
    fn error_message() {
        let err = ClipboardError::ClipboardWriteFailed("no display".into());
        assert_eq!(err.to_string(), "clipboard write failed: no display");
    }
}
