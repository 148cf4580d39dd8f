//! Clipboard access for sharing questions.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Destination for copied text.
///
/// The desktop app uses [`SystemClipboard`]; tests substitute their own.
pub trait ClipboardSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `ClipboardError` if the host clipboard cannot be reached or
    /// rejects the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}
