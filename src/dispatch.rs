//! One copy action: capture the tab, resolve a handler, extract, format, copy.
//!
//! The dispatcher holds no per-invocation state. Overlapping calls run
//! independently and each writes to the clipboard when it finishes, so the
//! last write to land wins.

use std::sync::Arc;

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::page::{PageExecutor, PageReference};
use crate::site::{FormatKind, HandlerRegistry};
use crate::status::StatusReporter;

/// Drives the copy pipeline against injected collaborators.
pub struct Dispatcher {
    registry: HandlerRegistry,
    executor: Arc<dyn PageExecutor>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl Dispatcher {
    pub fn new(
        registry: HandlerRegistry,
        executor: Arc<dyn PageExecutor>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        Self {
            registry,
            executor,
            clipboard,
        }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Build the tab reference for `url`.
    ///
    /// Without an explicit title the page's `<title>` is requested; if that
    /// fails or is empty the URL doubles as the title.
    pub async fn capture_tab(&self, url: &str, title: Option<String>) -> PageReference {
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            return PageReference::new(url, title);
        }

        let untitled = PageReference::new(url, url);
        let title = match self.executor.document_title(&untitled).await {
            Ok(Some(title)) => title,
            Ok(None) => url.to_string(),
            Err(e) => {
                tracing::warn!("Could not read title of {} via {}: {}", url, self.executor.name(), e);
                url.to_string()
            }
        };
        PageReference::new(url, title)
    }

    /// Copy `page` in `kind` format, reporting status and preview to `reporter`.
    ///
    /// Returns the copied text. Extraction problems degrade the output; only a
    /// failed clipboard write is an error.
    pub async fn copy(
        &self,
        page: &PageReference,
        kind: FormatKind,
        reporter: &mut dyn StatusReporter,
    ) -> Result<String, ClipboardError> {
        let handler = self.registry.resolve(&page.url);
        tracing::debug!("Matched handler: {}", handler.name());

        let metadata = handler.extract(page, self.executor.as_ref()).await;
        if metadata.is_none() {
            tracing::debug!("No metadata from {} for {}, using tab only", handler.name(), page.url);
        }

        handler.format_and_copy(page, metadata.as_ref(), kind, self.clipboard.as_ref(), reporter)
    }
}
