use linkclip::{StatusReporter, StatusStyle};

/// Reports status lines (and optionally the preview) on stderr.
pub struct TerminalStatus {
    show_preview: bool,
}

impl TerminalStatus {
    pub fn new(show_preview: bool) -> Self {
        Self { show_preview }
    }
}

impl StatusReporter for TerminalStatus {
    fn status(&mut self, message: &str, style: StatusStyle) {
        match style {
            StatusStyle::Success => eprintln!("✅ {message}"),
            StatusStyle::Error => eprintln!("❌ {message}"),
        }
    }

    fn preview(&mut self, text: &str) {
        if self.show_preview {
            eprintln!("\n{text}\n");
        }
    }
}
