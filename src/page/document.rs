//! Extraction routines over a parsed HTML document.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::{ExtractionRequest, ExtractionResponse, PageError, PageExecutor, PageReference};
use crate::site::OgpMetadata;

static META: Lazy<Selector> = Lazy::new(|| Selector::parse("meta[content]").expect("valid selector"));

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid selector"));

/// Run the routine named by `request` against `document`.
pub fn run_request(document: &Html, request: ExtractionRequest) -> ExtractionResponse {
    match request {
        ExtractionRequest::OpenGraph => ExtractionResponse::OpenGraph(extract_open_graph(document)),
        ExtractionRequest::DocumentTitle => {
            ExtractionResponse::DocumentTitle(extract_document_title(document))
        }
    }
}

/// Read Open Graph fields, falling back to Twitter card fields for title,
/// description and image.
///
/// Returns `None` when none of the five fields is present. Empty or
/// whitespace-only `content` counts as absent.
pub fn extract_open_graph(document: &Html) -> Option<OgpMetadata> {
    let metadata = OgpMetadata {
        title: meta_content(document, "property", "og:title")
            .or_else(|| meta_content(document, "name", "twitter:title")),
        description: meta_content(document, "property", "og:description")
            .or_else(|| meta_content(document, "name", "twitter:description")),
        image: meta_content(document, "property", "og:image")
            .or_else(|| meta_content(document, "name", "twitter:image")),
        url: meta_content(document, "property", "og:url"),
        kind: meta_content(document, "property", "og:type"),
    };

    (!metadata.is_empty()).then_some(metadata)
}

/// Text of the first `<title>` element, trimmed.
pub fn extract_document_title(document: &Html) -> Option<String> {
    document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// `content` of the first `<meta>` whose `attr` equals `key`.
fn meta_content(document: &Html, attr: &str, key: &str) -> Option<String> {
    document
        .select(&META)
        .find(|el| el.value().attr(attr) == Some(key))
        .and_then(|el| el.value().attr("content"))
        .filter(|c| !c.trim().is_empty())
        .map(String::from)
}

/// Executes extraction routines against an HTML document held in memory.
///
/// Used for saved pages and for tests. The document is parsed per request
/// since `scraper::Html` is not `Send`.
pub struct DocumentExecutor {
    html: String,
}

impl DocumentExecutor {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageExecutor for DocumentExecutor {
    fn name(&self) -> &'static str {
        "document"
    }

    async fn run(
        &self,
        _page: &PageReference,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, PageError> {
        let document = Html::parse_document(&self.html);
        Ok(run_request(&document, request))
    }
}
