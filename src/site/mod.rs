//! Site-specific metadata extraction and formatting.
//!
//! Each URL resolves to exactly one [`Handler`], which knows how to pull
//! metadata out of the page and render it for the clipboard.
//!
//! # Architecture
//!
//! - [`Handler`]: extraction + formatting strategy for a class of URLs
//! - [`HandlerRegistry`]: dispatches URLs to handlers, first match wins
//! - [`Metadata`]: what a handler's extraction produced
//! - [`FormatKind`]: plain text, Markdown, or HTML output
//!
//! # Example
//!
//! ```rust
//! use linkclip::page::PageReference;
//! use linkclip::site::{FormatKind, HandlerRegistry};
//!
//! let registry = HandlerRegistry::offline();
//! let page = PageReference::new("https://example.com/", "Example Domain");
//!
//! let handler = registry.resolve(&page.url);
//! assert_eq!(handler.name(), "opengraph");
//! assert_eq!(
//!     handler.format(&page, None, FormatKind::Markdown),
//!     "[Example Domain](https://example.com/)"
//! );
//! ```

pub mod oembed;
pub mod open_graph;
mod registry;
pub mod youtube;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::page::{PageExecutor, PageReference};
use crate::status::{self, StatusReporter, StatusStyle};

pub use oembed::{OEmbed, OEmbedSource, YouTubeOEmbed};
pub use open_graph::OpenGraphHandler;
pub use registry::{HandlerBinding, HandlerRegistry};
pub use youtube::YouTubeHandler;

/// Open Graph metadata with Twitter card fallbacks applied.
///
/// `None` means the page did not provide the field; formatters then fall
/// back to the tab's own URL and title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgpMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `og:type`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl OgpMetadata {
    /// True when none of the five fields is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.url.is_none()
            && self.kind.is_none()
    }
}

/// YouTube video metadata: the Open Graph baseline merged with oEmbed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YoutubeMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub thumbnail_url: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub embed_html: Option<String>,
}

/// Metadata produced by a handler's extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metadata {
    OpenGraph(OgpMetadata),
    YouTube(YoutubeMetadata),
}

impl Metadata {
    /// View any variant through the generic Open Graph fields.
    pub fn to_open_graph(&self) -> OgpMetadata {
        match self {
            Self::OpenGraph(ogp) => ogp.clone(),
            Self::YouTube(yt) => OgpMetadata {
                title: yt.title.clone(),
                description: yt.description.clone(),
                image: yt.thumbnail_url.clone().or_else(|| yt.image.clone()),
                url: yt.url.clone(),
                kind: yt.kind.clone(),
            },
        }
    }
}

/// Output rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatKind {
    #[default]
    Plain,
    Markdown,
    Html,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Plain, FormatKind::Markdown, FormatKind::Html];

    /// Parse a format name. Unrecognized names select [`FormatKind::Plain`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            "html" => Self::Html,
            "plain" | "text" | "" => Self::Plain,
            other => {
                tracing::debug!("Unrecognized format '{other}', using plain");
                Self::Plain
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extraction and formatting strategy for a class of URLs.
///
/// `extract` never fails: any error reaching the page or an enrichment
/// service is logged and yields `None`. `format` is total and returns a
/// non-empty string for every metadata shape, including `None`.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handler name (e.g., "opengraph", "youtube").
    fn name(&self) -> &'static str;

    /// Pull metadata for `page` through the page-context executor.
    async fn extract(&self, page: &PageReference, executor: &dyn PageExecutor) -> Option<Metadata>;

    /// Render `page` and its metadata as clipboard text.
    fn format(&self, page: &PageReference, metadata: Option<&Metadata>, kind: FormatKind) -> String;

    /// Status shown after a successful copy.
    fn success_message(&self) -> &'static str {
        status::COPIED
    }

    /// Format, hand the text to the preview area, then write it to the clipboard.
    ///
    /// The outcome of the clipboard write is the only failure reported to the
    /// user.
    fn format_and_copy(
        &self,
        page: &PageReference,
        metadata: Option<&Metadata>,
        kind: FormatKind,
        clipboard: &dyn ClipboardSink,
        reporter: &mut dyn StatusReporter,
    ) -> Result<String, ClipboardError> {
        let text = self.format(page, metadata, kind);
        reporter.preview(&text);

        match clipboard.write_text(&text) {
            Ok(()) => {
                tracing::info!(handler = self.name(), format = %kind, bytes = text.len(), "Copied");
                reporter.status(self.success_message(), StatusStyle::Success);
                Ok(text)
            }
            Err(e) => {
                tracing::warn!("Clipboard write via {} failed: {}", clipboard.name(), e);
                reporter.status(status::COPY_FAILED, StatusStyle::Error);
                Err(e)
            }
        }
    }
}
