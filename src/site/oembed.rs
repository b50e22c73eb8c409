//! oEmbed lookups.
//!
//! YouTube's oEmbed endpoint supplies an authoritative title, the channel,
//! a thumbnail and an embeddable `<iframe>` fragment for a watch URL.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::http_client::HttpClient;

/// YouTube's public oEmbed endpoint.
pub const YOUTUBE_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// oEmbed response fields we use. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OEmbed {
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub html: Option<String>,
}

/// Source of oEmbed metadata keyed by page URL.
#[async_trait]
pub trait OEmbedSource: Send + Sync {
    /// Source name for logs.
    fn name(&self) -> &'static str;

    /// Look up oEmbed metadata for `page_url`.
    async fn lookup(&self, page_url: &str) -> Result<OEmbed>;
}

/// Build the oEmbed request URL for a page.
pub fn oembed_url(endpoint: &str, page_url: &str) -> String {
    format!(
        "{endpoint}?url={}&format=json",
        urlencoding::encode(page_url)
    )
}

/// oEmbed over HTTP against YouTube's endpoint.
pub struct YouTubeOEmbed {
    client: HttpClient,
    endpoint: String,
}

impl YouTubeOEmbed {
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoint(client, YOUTUBE_OEMBED_ENDPOINT)
    }

    /// Use a different endpoint (a proxy or a local test server).
    pub fn with_endpoint(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl OEmbedSource for YouTubeOEmbed {
    fn name(&self) -> &'static str {
        "youtube-oembed"
    }

    async fn lookup(&self, page_url: &str) -> Result<OEmbed> {
        let url = oembed_url(&self.endpoint, page_url);
        tracing::debug!("Fetching from YouTube oEmbed: {}", url);

        let response = self
            .client
            .fetch_text(&url)
            .await
            .context("Failed to fetch from YouTube oEmbed API")?;

        serde_json::from_str(&response).context("Failed to parse YouTube oEmbed response")
    }
}
