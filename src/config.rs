//! Settings loaded from `~/.config/linkclip/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::page::BridgeConfig;
use crate::site::FormatKind;

fn default_oembed_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// Top-level configuration file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Format used when `--format` is not given (`plain`, `markdown`, `html`).
    #[serde(default)]
    pub default_format: Option<String>,
    /// Upper bound on the oEmbed lookup.
    #[serde(default = "default_oembed_timeout_secs")]
    pub oembed_timeout_secs: u64,
    /// Upper bound on page fetches.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Overrides the HTTP `User-Agent`.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Page bridge used by `copy --bridge`.
    #[serde(default)]
    pub bridge: Option<BridgeConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: None,
            oembed_timeout_secs: default_oembed_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: None,
            bridge: None,
        }
    }
}

impl Config {
    /// Load the config file, or defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a specific config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn format_kind(&self) -> FormatKind {
        self.default_format
            .as_deref()
            .map(FormatKind::from_name)
            .unwrap_or_default()
    }

    pub fn oembed_timeout(&self) -> Duration {
        Duration::from_secs(self.oembed_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkclip")
        .join("config.toml")
}
