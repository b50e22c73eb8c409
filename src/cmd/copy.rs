use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use linkclip::{
    ClipboardSink, CommandExecutor, Config, Dispatcher, DocumentExecutor, FormatKind, HttpPageExecutor, PageExecutor,
    StdoutSink, SystemClipboard,
};

use super::output::TerminalStatus;
use super::{build_client, build_registry};

pub struct CopyOptions {
    pub title: Option<String>,
    pub format: Option<String>,
    pub html: Option<PathBuf>,
    pub bridge: bool,
    pub offline: bool,
    pub print: bool,
    pub preview: bool,
}

/// Copy `url` and report the outcome.
///
/// Returns `Ok(false)` when the clipboard write failed; that failure has
/// already been reported to the user.
pub async fn cmd_copy(url: &str, options: CopyOptions, config: &Config) -> Result<bool> {
    let client = build_client(config)?;

    let executor: Arc<dyn PageExecutor> = if let Some(path) = &options.html {
        let html = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Arc::new(DocumentExecutor::new(html))
    } else if options.bridge {
        let bridge = config
            .bridge
            .clone()
            .context("--bridge needs a [bridge] section in the config file")?;
        Arc::new(CommandExecutor::new(bridge))
    } else {
        Arc::new(HttpPageExecutor::new(client.clone()))
    };

    let clipboard: Arc<dyn ClipboardSink> = if options.print {
        Arc::new(StdoutSink)
    } else {
        Arc::new(SystemClipboard)
    };

    let kind = options
        .format
        .as_deref()
        .map_or_else(|| config.format_kind(), FormatKind::from_name);

    let registry = build_registry(config, &client, options.offline);
    let dispatcher = Dispatcher::new(registry, executor, clipboard);

    let page = dispatcher.capture_tab(url, options.title).await;
    tracing::info!("Copying {} as {}", page.url, kind);

    let mut status = TerminalStatus::new(options.preview);
    Ok(dispatcher.copy(&page, kind, &mut status).await.is_ok())
}
