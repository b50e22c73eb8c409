//! The page-context boundary.
//!
//! Extraction routines run against the inspected page's document, which may
//! live in another process (a browser bridge), on the network, or in memory.
//! Callers never hand an executable closure across that boundary. They send an
//! [`ExtractionRequest`] naming the routine to run and receive an
//! [`ExtractionResponse`] carrying its plain, serializable result.
//!
//! # Executors
//!
//! - [`DocumentExecutor`]: an HTML document already held in memory
//! - [`HttpPageExecutor`]: fetches the live page over HTTP
//! - [`CommandExecutor`]: JSON over stdin/stdout to an external bridge process
//!
//! # Example
//!
//! ```rust
//! use linkclip::page::{DocumentExecutor, PageExecutor, PageReference};
//!
//! # async fn example() -> Result<(), linkclip::page::PageError> {
//! let page = PageReference::new("https://example.com", "Example");
//! let executor = DocumentExecutor::new(
//!     r#"<meta property="og:title" content="Example Domain">"#,
//! );
//!
//! let ogp = executor.open_graph(&page).await?;
//! assert_eq!(ogp.and_then(|m| m.title).as_deref(), Some("Example Domain"));
//! # Ok(())
//! # }
//! ```

mod bridge;
mod document;
mod http;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::site::OgpMetadata;

pub use bridge::{BridgeConfig, CommandExecutor};
pub use document::{extract_document_title, extract_open_graph, run_request, DocumentExecutor};
pub use http::{HttpPageExecutor, MAX_DOCUMENT_BYTES};

#[cfg(test)]
pub(crate) use http::test_server;

/// The tab's identity at the moment of invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReference {
    pub url: String,
    pub title: String,
}

impl PageReference {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Names the extraction routine to run inside the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRequest {
    /// Open Graph fields with Twitter card fallbacks.
    OpenGraph,
    /// The document's `<title>`.
    DocumentTitle,
}

impl ExtractionRequest {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenGraph => "open_graph",
            Self::DocumentTitle => "document_title",
        }
    }
}

/// Result of one extraction routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ExtractionResponse {
    OpenGraph(Option<OgpMetadata>),
    DocumentTitle(Option<String>),
}

impl ExtractionResponse {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenGraph(_) => ExtractionRequest::OpenGraph.as_str(),
            Self::DocumentTitle(_) => ExtractionRequest::DocumentTitle.as_str(),
        }
    }
}

/// Failures crossing the page-context boundary.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page unreachable: {0}")]
    Unreachable(String),

    #[error("page returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed extraction response: {0}")]
    Malformed(String),

    #[error("expected a {expected} response, got {got}")]
    UnexpectedResponse {
        expected: &'static str,
        got: &'static str,
    },

    #[error("page bridge failed: {0}")]
    Bridge(String),

    #[error("page extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs extraction routines inside a page's context.
#[async_trait]
pub trait PageExecutor: Send + Sync {
    /// Executor name for logs (e.g., "http", "bridge").
    fn name(&self) -> &'static str;

    /// Run one extraction routine against the page and return its result.
    async fn run(
        &self,
        page: &PageReference,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, PageError>;

    /// Run [`ExtractionRequest::OpenGraph`].
    async fn open_graph(&self, page: &PageReference) -> Result<Option<OgpMetadata>, PageError> {
        match self.run(page, ExtractionRequest::OpenGraph).await? {
            ExtractionResponse::OpenGraph(metadata) => Ok(metadata),
            other => Err(PageError::UnexpectedResponse {
                expected: ExtractionRequest::OpenGraph.as_str(),
                got: other.kind(),
            }),
        }
    }

    /// Run [`ExtractionRequest::DocumentTitle`].
    async fn document_title(&self, page: &PageReference) -> Result<Option<String>, PageError> {
        match self.run(page, ExtractionRequest::DocumentTitle).await? {
            ExtractionResponse::DocumentTitle(title) => Ok(title),
            other => Err(PageError::UnexpectedResponse {
                expected: ExtractionRequest::DocumentTitle.as_str(),
                got: other.kind(),
            }),
        }
    }
}
