//! `linkclip` - Copy a page link with its metadata to the clipboard
//!
//! # Features
//!
//! - **Site handlers**: URLs resolve to a handler by regex, first match wins
//! - **Open Graph**: `og:*` meta tags with Twitter card fallbacks
//! - **YouTube**: oEmbed enrichment, channel, thumbnail, start timestamp
//! - **Formats**: plain text, Markdown, and HTML with escaping
//! - **Page access**: in-memory HTML, HTTP fetch, or an external bridge process
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use linkclip::{Dispatcher, FormatKind, HandlerRegistry, HttpClient, HttpPageExecutor, StatusLog, SystemClipboard};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpClient::new()?;
//!     let dispatcher = Dispatcher::new(
//!         HandlerRegistry::offline(),
//!         Arc::new(HttpPageExecutor::new(client)),
//!         Arc::new(SystemClipboard),
//!     );
//!
//!     let page = dispatcher.capture_tab("https://example.com/", None).await;
//!     let mut status = StatusLog::default();
//!     let copied = dispatcher.copy(&page, FormatKind::Markdown, &mut status).await?;
//!     println!("{copied}");
//!     Ok(())
//! }
//! ```

pub mod clipboard;
pub mod config;
pub mod dispatch;
pub mod escape;
pub mod http_client;
pub mod page;
pub mod site;
pub mod status;

pub use clipboard::{ClipboardError, ClipboardSink, StdoutSink, SystemClipboard};
pub use config::Config;
pub use dispatch::Dispatcher;
pub use escape::{escape_html, escape_markdown};
pub use http_client::HttpClient;
pub use page::{
    BridgeConfig, CommandExecutor, DocumentExecutor, ExtractionRequest, ExtractionResponse, HttpPageExecutor,
    PageError, PageExecutor, PageReference,
};
pub use site::{
    FormatKind, Handler, HandlerBinding, HandlerRegistry, Metadata, OEmbed, OEmbedSource, OgpMetadata,
    OpenGraphHandler, YouTubeHandler, YouTubeOEmbed, YoutubeMetadata,
};
pub use status::{StatusLog, StatusReporter, StatusStyle};

/// Version of linkclip
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
