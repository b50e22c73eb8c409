//! YouTube handler: Open Graph baseline enriched with oEmbed.
//!
//! Extraction runs the Open Graph routine in the page and an oEmbed lookup
//! concurrently, then merges them. Either side may fail independently; a
//! failed or slow oEmbed lookup only drops the fields it would have supplied.
//!
//! # Example
//!
//! ```rust
//! use linkclip::page::PageReference;
//! use linkclip::site::youtube::{format_youtube, format_timestamp, parse_timestamp};
//! use linkclip::site::{FormatKind, YoutubeMetadata};
//!
//! let page = PageReference::new("https://www.youtube.com/watch?v=ABC123&t=90", "Tab");
//! assert_eq!(parse_timestamp(&page.url).map(format_timestamp).as_deref(), Some("1:30"));
//!
//! let metadata = YoutubeMetadata {
//!     video_id: Some("ABC123".to_string()),
//!     ..YoutubeMetadata::default()
//! };
//! let text = format_youtube(&page, &metadata, FormatKind::Plain);
//! assert!(text.ends_with("Video ID: ABC123 (from 1:30)"));
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::oembed::{OEmbed, OEmbedSource};
use super::open_graph::{format_open_graph, OpenGraphHandler, THUMBNAIL_LABEL};
use super::{FormatKind, Handler, Metadata, OgpMetadata, YoutubeMetadata};
use crate::escape::{escape_html, escape_markdown};
use crate::page::{PageExecutor, PageReference};
use crate::status;

/// URLs handled by [`YouTubeHandler`] (matched case-insensitively).
pub const YOUTUBE_URL_PATTERN: &str = r"youtube\.com/watch|youtu\.be/";

/// Default upper bound on the oEmbed lookup.
pub const DEFAULT_OEMBED_TIMEOUT: Duration = Duration::from_secs(5);

/// YouTube video handler.
pub struct YouTubeHandler {
    oembed: Option<Arc<dyn OEmbedSource>>,
    oembed_timeout: Duration,
}

impl YouTubeHandler {
    /// Handler that enriches metadata from `oembed`, bounded by `oembed_timeout`.
    pub fn new(oembed: Arc<dyn OEmbedSource>, oembed_timeout: Duration) -> Self {
        Self {
            oembed: Some(oembed),
            oembed_timeout,
        }
    }

    /// Handler that uses the Open Graph baseline only.
    pub fn offline() -> Self {
        Self {
            oembed: None,
            oembed_timeout: DEFAULT_OEMBED_TIMEOUT,
        }
    }

    /// oEmbed lookup with errors and timeouts mapped to `None`.
    async fn lookup_oembed(&self, page_url: &str) -> Option<OEmbed> {
        let source = self.oembed.as_ref()?;

        match tokio::time::timeout(self.oembed_timeout, source.lookup(page_url)).await {
            Ok(Ok(oembed)) => Some(oembed),
            Ok(Err(e)) => {
                tracing::warn!("oEmbed lookup via {} failed for {}: {:#}", source.name(), page_url, e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "oEmbed lookup via {} timed out after {:?} for {}",
                    source.name(),
                    self.oembed_timeout,
                    page_url
                );
                None
            }
        }
    }
}

#[async_trait]
impl Handler for YouTubeHandler {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn extract(&self, page: &PageReference, executor: &dyn PageExecutor) -> Option<Metadata> {
        let (ogp, oembed) = tokio::join!(
            OpenGraphHandler::extract_ogp(page, executor),
            self.lookup_oembed(&page.url),
        );

        let metadata = merge_metadata(video_id(&page.url), ogp, oembed);
        tracing::debug!(
            video_id = ?metadata.video_id,
            has_author = metadata.author_name.is_some(),
            has_embed = metadata.embed_html.is_some(),
            "Extracted YouTube metadata"
        );
        Some(Metadata::YouTube(metadata))
    }

    fn format(&self, page: &PageReference, metadata: Option<&Metadata>, kind: FormatKind) -> String {
        match metadata {
            Some(Metadata::YouTube(yt)) => format_youtube(page, yt, kind),
            Some(Metadata::OpenGraph(ogp)) => format_open_graph(page, Some(ogp), kind),
            None => format_open_graph(page, None, kind),
        }
    }

    fn success_message(&self) -> &'static str {
        status::COPIED_YOUTUBE
    }
}

/// Merge the Open Graph baseline with oEmbed fields.
///
/// Title and thumbnail prefer oEmbed. Description and URL come only from
/// Open Graph. Author and embed fields come only from oEmbed. When neither
/// source has a thumbnail, one is derived from the video id. Empty or
/// whitespace-only oEmbed fields count as absent.
pub fn merge_metadata(
    video_id: Option<String>,
    ogp: Option<OgpMetadata>,
    oembed: Option<OEmbed>,
) -> YoutubeMetadata {
    let ogp = ogp.unwrap_or_default();
    let oembed = oembed.unwrap_or_default();

    let thumbnail_url = present(oembed.thumbnail_url)
        .or_else(|| ogp.image.clone())
        .or_else(|| video_id.as_deref().map(derived_thumbnail));

    YoutubeMetadata {
        title: present(oembed.title).or(ogp.title),
        description: ogp.description,
        image: ogp.image,
        url: ogp.url,
        kind: ogp.kind,
        video_id,
        thumbnail_url,
        author_name: present(oembed.author_name),
        author_url: present(oembed.author_url),
        embed_html: present(oembed.html),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Highest-resolution still YouTube publishes for a video.
fn derived_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg")
}

/// Video id from a `youtube.com/watch?v=` or `youtu.be/` URL.
pub fn video_id(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();

    if lower.contains("youtube.com/watch") {
        return Url::parse(url)
            .ok()?
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|v| !v.is_empty());
    }

    // ASCII lowercasing keeps byte offsets, so the index applies to `url`.
    let start = lower.find("youtu.be/")? + "youtu.be/".len();
    let rest = &url[start..];
    let end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then(|| id.to_string())
}

/// Start offset in seconds from a `t=` query parameter.
///
/// Accepts `90`, `90s` and `1h2m3s`.
pub fn parse_timestamp(url: &str) -> Option<u64> {
    let parsed = Url::parse(url).ok()?;
    let (_, value) = parsed.query_pairs().find(|(key, _)| key == "t")?;
    parse_duration(&value)
}

fn parse_duration(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(seconds);
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let unit = match ch.to_ascii_lowercase() {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        let n: u64 = digits.parse().ok()?;
        total = total.checked_add(n.checked_mul(unit)?)?;
        digits.clear();
    }

    // Trailing digits without a unit ("1m30") are not a valid offset.
    digits.is_empty().then_some(total)
}

/// Display form of an offset: `0:05`, `2:05`, `1:01:01`.
pub fn format_timestamp(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Render YouTube metadata.
///
/// Markdown and HTML escape title, description and channel name.
pub fn format_youtube(page: &PageReference, meta: &YoutubeMetadata, kind: FormatKind) -> String {
    let title = meta.title.as_deref().unwrap_or(&page.title);
    let url = meta.url.as_deref().unwrap_or(&page.url);
    let timestamp = parse_timestamp(&page.url).map(format_timestamp);
    let video_line = meta.video_id.as_deref().map(|id| match &timestamp {
        Some(ts) => format!("Video ID: {id} (from {ts})"),
        None => format!("Video ID: {id}"),
    });

    let mut out = String::new();
    match kind {
        FormatKind::Markdown => {
            out.push_str(&format!("[{}]({url})", escape_markdown(title)));
            if let Some(author) = meta.author_name.as_deref() {
                let author = escape_markdown(author);
                match meta.author_url.as_deref() {
                    Some(author_url) => out.push_str(&format!("\n\nChannel: [{author}]({author_url})")),
                    None => out.push_str(&format!("\n\nChannel: {author}")),
                }
            }
            if let Some(description) = meta.description.as_deref() {
                out.push_str(&format!("\n\n{}", escape_markdown(description)));
            }
            if let Some(embed) = meta.embed_html.as_deref() {
                out.push_str(&format!("\n\n{embed}"));
            } else if let Some(thumbnail) = meta.thumbnail_url.as_deref() {
                out.push_str(&format!("\n\n![{THUMBNAIL_LABEL}]({thumbnail})"));
            }
            if let Some(line) = video_line {
                out.push_str(&format!("\n\n{line}"));
            }
        }
        FormatKind::Html => {
            out.push_str(&format!("<a href=\"{url}\">{}</a>", escape_html(title)));
            if let Some(author) = meta.author_name.as_deref() {
                let author = escape_html(author);
                match meta.author_url.as_deref() {
                    Some(author_url) => {
                        out.push_str(&format!("<p>Channel: <a href=\"{author_url}\">{author}</a></p>"));
                    }
                    None => out.push_str(&format!("<p>Channel: {author}</p>")),
                }
            }
            if let Some(description) = meta.description.as_deref() {
                out.push_str(&format!("<p>{}</p>", escape_html(description)));
            }
            if let Some(embed) = meta.embed_html.as_deref() {
                out.push_str(&format!("<br>{embed}"));
            } else if let Some(thumbnail) = meta.thumbnail_url.as_deref() {
                out.push_str(&format!("<br><img src=\"{thumbnail}\" alt=\"{THUMBNAIL_LABEL}\">"));
            }
            if let Some(line) = video_line {
                out.push_str(&format!("<p>{line}</p>"));
            }
        }
        FormatKind::Plain => {
            out.push_str(&format!("{title}\n{url}"));
            if let Some(author) = meta.author_name.as_deref() {
                match meta.author_url.as_deref() {
                    Some(author_url) => out.push_str(&format!("\nChannel: {author} ({author_url})")),
                    None => out.push_str(&format!("\nChannel: {author}")),
                }
            }
            if let Some(description) = meta.description.as_deref() {
                out.push_str(&format!("\n\n{description}"));
            }
            if let Some(embed) = meta.embed_html.as_deref() {
                out.push_str(&format!("\nEmbed: {embed}"));
            } else if let Some(thumbnail) = meta.thumbnail_url.as_deref() {
                out.push_str(&format!("\n{THUMBNAIL_LABEL}: {thumbnail}"));
            }
            if let Some(line) = video_line {
                out.push_str(&format!("\n{line}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{DocumentExecutor, ExtractionRequest, ExtractionResponse, PageError};
    use anyhow::{anyhow, Result};

    struct StaticOEmbed(OEmbed);

    #[async_trait]
    impl OEmbedSource for StaticOEmbed {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn lookup(&self, _page_url: &str) -> Result<OEmbed> {
            Ok(self.0.clone())
        }
    }

    struct FailingOEmbed;

    #[async_trait]
    impl OEmbedSource for FailingOEmbed {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn lookup(&self, _page_url: &str) -> Result<OEmbed> {
            Err(anyhow!("HTTP 404 Not Found"))
        }
    }

    struct SlowOEmbed;

    #[async_trait]
    impl OEmbedSource for SlowOEmbed {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn lookup(&self, _page_url: &str) -> Result<OEmbed> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(rick_oembed())
        }
    }

    struct UnreachablePage;

    #[async_trait]
    impl PageExecutor for UnreachablePage {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        async fn run(
            &self,
            page: &PageReference,
            _request: ExtractionRequest,
        ) -> Result<ExtractionResponse, PageError> {
            Err(PageError::Unreachable(page.url.clone()))
        }
    }

    const WATCH_PAGE: &str = r#"<html><head>
        <title>Video - YouTube</title>
        <meta property="og:title" content="OG Video Title">
        <meta property="og:description" content="OG description">
        <meta property="og:image" content="https://i.ytimg.com/vi/ABC123/og.jpg">
        <meta property="og:url" content="https://www.youtube.com/watch?v=ABC123">
        <meta property="og:type" content="video.other">
    </head></html>"#;

    fn rick_oembed() -> OEmbed {
        OEmbed {
            title: Some("oEmbed Title".to_string()),
            author_name: Some("Channel Name".to_string()),
            author_url: Some("https://www.youtube.com/@channel".to_string()),
            thumbnail_url: Some("https://i.ytimg.com/vi/ABC123/hqdefault.jpg".to_string()),
            html: Some("<iframe src=\"https://www.youtube.com/embed/ABC123\"></iframe>".to_string()),
        }
    }

    fn watch_page() -> PageReference {
        PageReference::new("https://www.youtube.com/watch?v=ABC123&t=90", "Tab Title - YouTube")
    }

    fn extracted(metadata: Option<Metadata>) -> YoutubeMetadata {
        match metadata {
            Some(Metadata::YouTube(yt)) => yt,
            other => panic!("expected YouTube metadata, got {other:?}"),
        }
    }

    // ─── URL parsing ────────────────────────────────────────────────────────

    #[test]
    fn video_id_from_watch_url() {
        assert_eq!(video_id("https://www.youtube.com/watch?v=ABC123&t=90").as_deref(), Some("ABC123"));
        assert_eq!(video_id("https://youtube.com/watch?feature=share&v=xyz").as_deref(), Some("xyz"));
        assert_eq!(video_id("https://WWW.YOUTUBE.COM/WATCH?v=Case"), Some("Case".to_string()));
    }

    #[test]
    fn video_id_from_short_url() {
        assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(video_id("https://youtu.be/dQw4w9WgXcQ?t=42").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(video_id("https://YOUTU.BE/AbC").as_deref(), Some("AbC"));
    }

    #[test]
    fn video_id_absent() {
        assert!(video_id("https://www.youtube.com/watch?list=PL123").is_none());
        assert!(video_id("https://youtu.be/").is_none());
        assert!(video_id("https://example.com/").is_none());
    }

    // ─── Timestamps ─────────────────────────────────────────────────────────

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(5), "0:05");
        assert_eq!(format_timestamp(59), "0:59");
        assert_eq!(format_timestamp(125), "2:05");
        assert_eq!(format_timestamp(3599), "59:59");
        assert_eq!(format_timestamp(3661), "1:01:01");
    }

    #[test]
    fn parses_timestamp_forms() {
        assert_eq!(parse_timestamp("https://youtu.be/x?t=90"), Some(90));
        assert_eq!(parse_timestamp("https://youtu.be/x?t=90s"), Some(90));
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&t=1h2m3s"), Some(3723));
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&t=2m"), Some(120));
    }

    #[test]
    fn ignores_invalid_or_unrelated_timestamps() {
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x"), None);
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&list=PLt=5"), None);
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&t="), None);
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&t=abc"), None);
        assert_eq!(parse_timestamp("https://www.youtube.com/watch?v=x&t=1m30"), None);
    }

    // ─── Merging ────────────────────────────────────────────────────────────

    #[test]
    fn oembed_title_and_thumbnail_take_precedence() {
        let ogp = OgpMetadata {
            title: Some("Y".to_string()),
            image: Some("https://example.com/og.jpg".to_string()),
            description: Some("desc".to_string()),
            ..OgpMetadata::default()
        };
        let oembed = OEmbed {
            title: Some("X".to_string()),
            thumbnail_url: Some("https://example.com/oembed.jpg".to_string()),
            ..OEmbed::default()
        };
        let merged = merge_metadata(Some("id".to_string()), Some(ogp), Some(oembed));
        assert_eq!(merged.title.as_deref(), Some("X"));
        assert_eq!(merged.thumbnail_url.as_deref(), Some("https://example.com/oembed.jpg"));
        assert_eq!(merged.description.as_deref(), Some("desc"));
    }

    #[test]
    fn thumbnail_falls_back_to_og_image_then_video_id() {
        let ogp = OgpMetadata {
            image: Some("https://example.com/og.jpg".to_string()),
            ..OgpMetadata::default()
        };
        let merged = merge_metadata(Some("id".to_string()), Some(ogp), None);
        assert_eq!(merged.thumbnail_url.as_deref(), Some("https://example.com/og.jpg"));

        let merged = merge_metadata(Some("id".to_string()), None, None);
        assert_eq!(
            merged.thumbnail_url.as_deref(),
            Some("https://img.youtube.com/vi/id/maxresdefault.jpg")
        );

        let merged = merge_metadata(None, None, None);
        assert!(merged.thumbnail_url.is_none());
    }

    #[test]
    fn empty_oembed_fields_count_as_absent() {
        let ogp = OgpMetadata {
            title: Some("OG Title".to_string()),
            image: Some("https://example.com/og.jpg".to_string()),
            ..OgpMetadata::default()
        };
        let oembed = OEmbed {
            title: Some(String::new()),
            author_name: Some("  ".to_string()),
            author_url: Some(String::new()),
            thumbnail_url: Some(String::new()),
            html: Some(" ".to_string()),
        };
        let merged = merge_metadata(Some("id".to_string()), Some(ogp), Some(oembed));
        assert_eq!(merged.title.as_deref(), Some("OG Title"));
        assert_eq!(merged.thumbnail_url.as_deref(), Some("https://example.com/og.jpg"));
        assert!(merged.author_name.is_none());
        assert!(merged.author_url.is_none());
        assert!(merged.embed_html.is_none());

        let page = PageReference::new("https://youtu.be/id", "Tab");
        let text = format_youtube(&page, &merged, FormatKind::Plain);
        assert!(!text.contains("Channel:"), "{text}");
        assert!(!text.contains("Embed:"), "{text}");
    }

    // ─── Extraction ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn extraction_with_failing_oembed_keeps_open_graph_baseline() {
        let handler = YouTubeHandler::new(Arc::new(FailingOEmbed), DEFAULT_OEMBED_TIMEOUT);
        let executor = DocumentExecutor::new(WATCH_PAGE);
        let page = watch_page();

        let yt = extracted(handler.extract(&page, &executor).await);
        assert_eq!(yt.video_id.as_deref(), Some("ABC123"));
        assert_eq!(yt.title.as_deref(), Some("OG Video Title"));
        assert!(yt.author_name.is_none());
        assert!(yt.author_url.is_none());
        assert!(yt.embed_html.is_none());

        let text = handler.format(&page, Some(&Metadata::YouTube(yt)), FormatKind::Plain);
        assert!(text.contains("Video ID: ABC123 (from 1:30)"), "{text}");
    }

    #[tokio::test]
    async fn extraction_merges_oembed() {
        let handler = YouTubeHandler::new(Arc::new(StaticOEmbed(rick_oembed())), DEFAULT_OEMBED_TIMEOUT);
        let executor = DocumentExecutor::new(WATCH_PAGE);

        let yt = extracted(handler.extract(&watch_page(), &executor).await);
        assert_eq!(yt.title.as_deref(), Some("oEmbed Title"));
        assert_eq!(yt.description.as_deref(), Some("OG description"));
        assert_eq!(yt.url.as_deref(), Some("https://www.youtube.com/watch?v=ABC123"));
        assert_eq!(yt.author_name.as_deref(), Some("Channel Name"));
        assert_eq!(yt.thumbnail_url.as_deref(), Some("https://i.ytimg.com/vi/ABC123/hqdefault.jpg"));
        assert!(yt.embed_html.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_oembed_is_abandoned_after_timeout() {
        let handler = YouTubeHandler::new(Arc::new(SlowOEmbed), Duration::from_secs(2));
        let executor = DocumentExecutor::new(WATCH_PAGE);

        let yt = extracted(handler.extract(&watch_page(), &executor).await);
        assert_eq!(yt.title.as_deref(), Some("OG Video Title"));
        assert!(yt.author_name.is_none());
    }

    #[tokio::test]
    async fn unreachable_page_still_yields_oembed_fields() {
        let handler = YouTubeHandler::new(Arc::new(StaticOEmbed(rick_oembed())), DEFAULT_OEMBED_TIMEOUT);

        let yt = extracted(handler.extract(&watch_page(), &UnreachablePage).await);
        assert_eq!(yt.title.as_deref(), Some("oEmbed Title"));
        assert!(yt.description.is_none());
        assert_eq!(yt.video_id.as_deref(), Some("ABC123"));
    }

    #[tokio::test]
    async fn offline_handler_skips_oembed() {
        let executor = DocumentExecutor::new(WATCH_PAGE);
        let yt = extracted(YouTubeHandler::offline().extract(&watch_page(), &executor).await);
        assert_eq!(yt.title.as_deref(), Some("OG Video Title"));
        assert!(yt.embed_html.is_none());
    }

    // ─── Formatting ─────────────────────────────────────────────────────────

    #[test]
    fn title_precedence_oembed_then_open_graph_then_tab() {
        let page = watch_page();

        let both = merge_metadata(
            None,
            Some(OgpMetadata { title: Some("Y".to_string()), ..OgpMetadata::default() }),
            Some(OEmbed { title: Some("X".to_string()), ..OEmbed::default() }),
        );
        assert!(format_youtube(&page, &both, FormatKind::Plain).starts_with("X\n"));

        let og_only = merge_metadata(
            None,
            Some(OgpMetadata { title: Some("Y".to_string()), ..OgpMetadata::default() }),
            None,
        );
        assert!(format_youtube(&page, &og_only, FormatKind::Plain).starts_with("Y\n"));

        let neither = merge_metadata(None, None, None);
        assert!(format_youtube(&page, &neither, FormatKind::Plain).starts_with("Tab Title - YouTube\n"));
    }

    #[test]
    fn missing_metadata_delegates_to_open_graph_formatter() {
        let page = watch_page();
        let handler = YouTubeHandler::offline();
        for kind in FormatKind::ALL {
            assert_eq!(handler.format(&page, None, kind), format_open_graph(&page, None, kind));
        }
    }

    #[test]
    fn markdown_full_layout() {
        let page = watch_page();
        let yt = merge_metadata(
            Some("ABC123".to_string()),
            Some(OgpMetadata {
                description: Some("Intro. Part 1!".to_string()),
                url: Some("https://www.youtube.com/watch?v=ABC123".to_string()),
                ..OgpMetadata::default()
            }),
            Some(OEmbed {
                html: None,
                ..rick_oembed()
            }),
        );
        assert_eq!(
            format_youtube(&page, &yt, FormatKind::Markdown),
            "[oEmbed Title](https://www.youtube.com/watch?v=ABC123)\n\n\
             Channel: [Channel Name](https://www.youtube.com/@channel)\n\n\
             Intro\\. Part 1\\!\n\n\
             ![Thumbnail](https://i.ytimg.com/vi/ABC123/hqdefault.jpg)\n\n\
             Video ID: ABC123 (from 1:30)"
        );
    }

    #[test]
    fn html_prefers_embed_and_escapes_text() {
        let page = PageReference::new("https://youtu.be/ABC123", "Tab");
        let yt = YoutubeMetadata {
            title: Some("Tom & Jerry <Live>".to_string()),
            author_name: Some("O'Brien".to_string()),
            description: Some("\"quoted\"".to_string()),
            video_id: Some("ABC123".to_string()),
            thumbnail_url: Some("https://i.ytimg.com/vi/ABC123/hqdefault.jpg".to_string()),
            embed_html: Some("<iframe src=\"https://www.youtube.com/embed/ABC123\"></iframe>".to_string()),
            ..YoutubeMetadata::default()
        };
        assert_eq!(
            format_youtube(&page, &yt, FormatKind::Html),
            "<a href=\"https://youtu.be/ABC123\">Tom &amp; Jerry &lt;Live&gt;</a>\
             <p>Channel: O&#039;Brien</p>\
             <p>&quot;quoted&quot;</p>\
             <br><iframe src=\"https://www.youtube.com/embed/ABC123\"></iframe>\
             <p>Video ID: ABC123</p>"
        );
    }

    #[test]
    fn plain_does_not_escape() {
        let page = watch_page();
        let yt = YoutubeMetadata {
            title: Some("a*b_c [live]".to_string()),
            author_name: Some("Chan".to_string()),
            ..YoutubeMetadata::default()
        };
        assert_eq!(
            format_youtube(&page, &yt, FormatKind::Plain),
            "a*b_c [live]\nhttps://www.youtube.com/watch?v=ABC123&t=90\nChannel: Chan"
        );
    }

    #[test]
    fn every_format_is_non_empty_for_empty_metadata() {
        let page = watch_page();
        for kind in FormatKind::ALL {
            let text = format_youtube(&page, &YoutubeMetadata::default(), kind);
            assert!(text.contains("Tab Title"), "{kind}: {text}");
        }
    }
}
