//! User-facing status messages.

/// Shown after the default handler copies.
pub const COPIED: &str = "Copied page info!";

/// Shown after the YouTube handler copies.
pub const COPIED_YOUTUBE: &str = "Copied YouTube info!";

/// Shown when the clipboard write fails.
pub const COPY_FAILED: &str = "Could not copy to clipboard";

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Success,
    Error,
}

/// Status and preview display area.
pub trait StatusReporter: Send {
    fn status(&mut self, message: &str, style: StatusStyle);

    /// Formatted text about to be copied.
    fn preview(&mut self, _text: &str) {}
}

/// Records everything reported, in order.
#[derive(Debug, Default)]
pub struct StatusLog {
    pub statuses: Vec<(String, StatusStyle)>,
    pub previews: Vec<String>,
}

impl StatusLog {
    pub fn last_status(&self) -> Option<(&str, StatusStyle)> {
        self.statuses.last().map(|(m, s)| (m.as_str(), *s))
    }
}

impl StatusReporter for StatusLog {
    fn status(&mut self, message: &str, style: StatusStyle) {
        self.statuses.push((message.to_string(), style));
    }

    fn preview(&mut self, text: &str) {
        self.previews.push(text.to_string());
    }
}
