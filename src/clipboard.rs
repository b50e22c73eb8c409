//! Clipboard sinks.
//!
//! [`SystemClipboard`] writes through `arboard`. On Linux (X11/Wayland) the
//! copying process owns the selection, so text written by a short-lived
//! process survives only if a clipboard manager takes it over.

use std::io::Write;

use arboard::Clipboard;

/// Errors that can occur while writing to a clipboard sink.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for formatted text.
pub trait ClipboardSink: Send + Sync {
    /// Sink name for logs.
    fn name(&self) -> &'static str;

    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Writes the text to stdout instead of the clipboard.
pub struct StdoutSink;

impl ClipboardSink for StdoutSink {
    fn name(&self) -> &'static str {
        "stdout"
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
