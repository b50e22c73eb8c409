//! Shared HTTP client
//!
//! Features:
//! - HTTP/2 negotiated via ALPN, TLS 1.3 (rustls)
//! - Brotli, Gzip, Deflate compression (auto-negotiated)
//! - Connection pooling with keep-alive
//! - Browser-like default headers so pages serve their full `<head>`

use std::time::Duration;

use anyhow::{bail, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument};

/// User agent sent unless overridden by configuration.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/131.0.0.0 Safari/537.36 linkclip/",
    env!("CARGO_PKG_VERSION")
);

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client used for page fetches and oEmbed lookups.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the default user agent and timeout.
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_USER_AGENT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with a specific user agent and overall request timeout.
    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,application/json;q=0.8,*/*;q=0.7",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            // ═══════════════════════════════════════════════════════════════
            // CONNECTIONS
            // ═══════════════════════════════════════════════════════════════
            .http2_adaptive_window(true)
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            // ═══════════════════════════════════════════════════════════════
            // TLS + COMPRESSION
            // ═══════════════════════════════════════════════════════════════
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            // ═══════════════════════════════════════════════════════════════
            // HEADERS
            // ═══════════════════════════════════════════════════════════════
            .default_headers(headers)
            // ═══════════════════════════════════════════════════════════════
            // TIMEOUTS + REDIRECTS
            // ═══════════════════════════════════════════════════════════════
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    /// Issue a GET request.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        debug!("Fetching");
        let response = self.client.get(url).send().await?;

        info!(
            status = %response.status(),
            version = ?response.version(),
            content_encoding = ?response.headers().get("content-encoding"),
            "Response received"
        );

        Ok(response)
    }

    /// Fetch and return the body as a string, failing on non-success status.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.fetch(url).await?;
        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {status} from {url}");
        }
        Ok(response.text().await?)
    }
}
