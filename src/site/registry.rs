//! URL-to-handler registry.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use regex::{Regex, RegexBuilder};

use super::oembed::OEmbedSource;
use super::open_graph::OpenGraphHandler;
use super::youtube::{YouTubeHandler, YOUTUBE_URL_PATTERN};
use super::Handler;

/// A URL pattern bound to the handler it selects.
pub struct HandlerBinding {
    pattern: Regex,
    handler: Arc<dyn Handler>,
}

impl HandlerBinding {
    /// Bind `pattern` (a case-insensitive regex tested against the full URL)
    /// to `handler`.
    pub fn new(pattern: &str, handler: Arc<dyn Handler>) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern, handler })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    pub fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

impl fmt::Debug for HandlerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerBinding")
            .field("pattern", &self.pattern.as_str())
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Resolves URLs to handlers.
///
/// Bindings are checked in registration order and the first match wins, so
/// more specific patterns must be registered before general ones. A URL no
/// binding matches resolves to the default handler.
pub struct HandlerRegistry {
    bindings: Vec<HandlerBinding>,
    default: Arc<dyn Handler>,
}

impl HandlerRegistry {
    /// Registry with an explicit default handler and ordered bindings.
    pub fn new(default: Arc<dyn Handler>, bindings: Vec<HandlerBinding>) -> Self {
        Self { bindings, default }
    }

    /// Open Graph default plus the YouTube handler enriched by `oembed`.
    pub fn standard(oembed: Arc<dyn OEmbedSource>, oembed_timeout: Duration) -> Self {
        Self::with_youtube(YouTubeHandler::new(oembed, oembed_timeout))
    }

    /// Open Graph default plus a YouTube handler that skips oEmbed.
    pub fn offline() -> Self {
        Self::with_youtube(YouTubeHandler::offline())
    }

    fn with_youtube(youtube: YouTubeHandler) -> Self {
        let mut registry = Self::new(Arc::new(OpenGraphHandler), Vec::new());
        match HandlerBinding::new(YOUTUBE_URL_PATTERN, Arc::new(youtube)) {
            Ok(binding) => registry.register(binding),
            Err(e) => tracing::error!("Built-in YouTube pattern failed to compile: {e}"),
        }
        registry
    }

    /// Append a binding with the lowest priority so far.
    pub fn register(&mut self, binding: HandlerBinding) {
        tracing::debug!(
            "Registered handler {} for /{}/",
            binding.handler.name(),
            binding.pattern()
        );
        self.bindings.push(binding);
    }

    /// The handler of the first binding matching `url`, else the default.
    pub fn resolve(&self, url: &str) -> &dyn Handler {
        let handler = match self.bindings.iter().find(|binding| binding.matches(url)) {
            Some(binding) => binding.handler(),
            None => self.default.as_ref(),
        };
        tracing::debug!("Resolved {} to handler {}", url, handler.name());
        handler
    }

    pub fn bindings(&self) -> &[HandlerBinding] {
        &self.bindings
    }

    pub fn default_handler(&self) -> &dyn Handler {
        self.default.as_ref()
    }
}
