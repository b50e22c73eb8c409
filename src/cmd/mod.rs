pub mod copy;
pub mod handlers;
pub mod output;

use std::sync::Arc;

use anyhow::Result;

use linkclip::{Config, HandlerRegistry, HttpClient, YouTubeOEmbed};

/// HTTP client honoring the configured user agent and timeout.
pub fn build_client(config: &Config) -> Result<HttpClient> {
    let user_agent = config
        .user_agent
        .as_deref()
        .unwrap_or(linkclip::http_client::DEFAULT_USER_AGENT);
    HttpClient::with_options(user_agent, config.request_timeout())
}

/// The built-in handler set, with or without oEmbed enrichment.
pub fn build_registry(config: &Config, client: &HttpClient, offline: bool) -> HandlerRegistry {
    if offline {
        HandlerRegistry::offline()
    } else {
        let oembed = Arc::new(YouTubeOEmbed::new(client.clone()));
        HandlerRegistry::standard(oembed, config.oembed_timeout())
    }
}
