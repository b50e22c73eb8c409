//! Default handler: Open Graph / Twitter card metadata.
//!
//! Matches every URL no other handler claims. Text is interpolated as-is in
//! all three formats.

use async_trait::async_trait;

use super::{FormatKind, Handler, Metadata, OgpMetadata};
use crate::page::{PageExecutor, PageReference};

/// Alt text and label for preview images.
pub(crate) const THUMBNAIL_LABEL: &str = "Thumbnail";

/// Handler for arbitrary pages using their Open Graph tags.
pub struct OpenGraphHandler;

impl OpenGraphHandler {
    /// Ask the page for its Open Graph metadata, mapping failures to `None`.
    pub async fn extract_ogp(
        page: &PageReference,
        executor: &dyn PageExecutor,
    ) -> Option<OgpMetadata> {
        match executor.open_graph(page).await {
            Ok(ogp) => ogp,
            Err(e) => {
                tracing::warn!(
                    "Open Graph extraction via {} failed for {}: {}",
                    executor.name(),
                    page.url,
                    e
                );
                None
            }
        }
    }
}

#[async_trait]
impl Handler for OpenGraphHandler {
    fn name(&self) -> &'static str {
        "opengraph"
    }

    async fn extract(&self, page: &PageReference, executor: &dyn PageExecutor) -> Option<Metadata> {
        Self::extract_ogp(page, executor).await.map(Metadata::OpenGraph)
    }

    fn format(&self, page: &PageReference, metadata: Option<&Metadata>, kind: FormatKind) -> String {
        let ogp = metadata.map(Metadata::to_open_graph);
        format_open_graph(page, ogp.as_ref(), kind)
    }
}

/// Render a page with optional Open Graph metadata.
///
/// Title and URL fall back to the tab's own values.
pub fn format_open_graph(page: &PageReference, ogp: Option<&OgpMetadata>, kind: FormatKind) -> String {
    let title = ogp.and_then(|m| m.title.as_deref()).unwrap_or(&page.title);
    let url = ogp.and_then(|m| m.url.as_deref()).unwrap_or(&page.url);
    let description = ogp.and_then(|m| m.description.as_deref());
    let image = ogp.and_then(|m| m.image.as_deref());

    let mut out = String::new();
    match kind {
        FormatKind::Markdown => {
            out.push_str(&format!("[{title}]({url})"));
            if let Some(description) = description {
                out.push_str(&format!("\n\n{description}"));
            }
            if let Some(image) = image {
                out.push_str(&format!("\n\n![{THUMBNAIL_LABEL}]({image})"));
            }
        }
        FormatKind::Html => {
            out.push_str(&format!("<a href=\"{url}\">{title}</a>"));
            if let Some(description) = description {
                out.push_str(&format!("<p>{description}</p>"));
            }
            if let Some(image) = image {
                out.push_str(&format!("<br><img src=\"{image}\" alt=\"{THUMBNAIL_LABEL}\">"));
            }
        }
        FormatKind::Plain => {
            out.push_str(&format!("{title}\n{url}"));
            if let Some(description) = description {
                out.push_str(&format!("\n\n{description}"));
            }
            if let Some(image) = image {
                out.push_str(&format!("\n{THUMBNAIL_LABEL}: {image}"));
            }
        }
    }
    out
}
