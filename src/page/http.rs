//! Executor that fetches the live page over HTTP.

use async_trait::async_trait;
use scraper::Html;
use tokio::sync::Mutex;

use super::{run_request, ExtractionRequest, ExtractionResponse, PageError, PageExecutor, PageReference};
use crate::http_client::HttpClient;

/// Upper bound on the bytes read from a page body.
pub const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

const HEAD_CLOSE: &[u8] = b"</head>";

/// Fetches `page.url` and runs the requested routine against the response body.
///
/// The last fetched document is kept, so every request against the same URL
/// (the tab title, then its metadata) is answered from one snapshot with one
/// round trip. Reading stops once `</head>` has arrived or after
/// [`MAX_DOCUMENT_BYTES`].
///
/// The fetched document reflects what the server sends, not scripts that ran
/// in a browser tab. For script-rendered metadata use a [`super::CommandExecutor`].
pub struct HttpPageExecutor {
    client: HttpClient,
    snapshot: Mutex<Option<(String, String)>>,
}

impl HttpPageExecutor {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            snapshot: Mutex::new(None),
        }
    }

    /// Drop the kept document so the next request fetches again.
    pub async fn forget(&self) {
        *self.snapshot.lock().await = None;
    }

    /// Body of `url`, fetched at most once while it stays the latest URL.
    async fn document(&self, url: &str) -> Result<String, PageError> {
        let mut snapshot = self.snapshot.lock().await;
        if let Some((cached_url, body)) = snapshot.as_ref() {
            if cached_url == url {
                tracing::debug!("Reusing fetched document for {}", url);
                return Ok(body.clone());
            }
        }

        let body = self.fetch_document(url).await?;
        *snapshot = Some((url.to_string(), body.clone()));
        Ok(body)
    }

    async fn fetch_document(&self, url: &str) -> Result<String, PageError> {
        let mut response = self
            .client
            .fetch(url)
            .await
            .map_err(|e| PageError::Unreachable(format!("{url}: {e:#}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| PageError::Malformed(format!("unreadable body from {url}: {e}")))?
        {
            let searched_from = body.len().saturating_sub(HEAD_CLOSE.len() - 1);
            body.extend_from_slice(&chunk);

            if body.len() >= MAX_DOCUMENT_BYTES {
                tracing::debug!("Stopped reading {} at {} bytes", url, MAX_DOCUMENT_BYTES);
                body.truncate(MAX_DOCUMENT_BYTES);
                break;
            }
            if contains_head_close(&body[searched_from..]) {
                break;
            }
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// True once `</head>` (any case) appears in `bytes`.
fn contains_head_close(bytes: &[u8]) -> bool {
    bytes
        .windows(HEAD_CLOSE.len())
        .any(|window| window.eq_ignore_ascii_case(HEAD_CLOSE))
}

#[async_trait]
impl PageExecutor for HttpPageExecutor {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn run(
        &self,
        page: &PageReference,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, PageError> {
        tracing::debug!("Running {} extraction over HTTP for {}", request.as_str(), page.url);
        let body = self.document(&page.url).await?;
        let document = Html::parse_document(&body);
        Ok(run_request(&document, request))
    }
}
