//! Executor that delegates to an external bridge process.
//!
//! The bridge (for example a browser native-messaging host) receives one JSON
//! request on stdin and must answer with one JSON response on stdout:
//!
//! ```json
//! {"url": "https://example.com/", "title": "Example", "request": "open_graph"}
//! ```
//!
//! ```json
//! {"kind": "open_graph", "data": {"title": "Example Domain"}}
//! ```

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{ExtractionRequest, ExtractionResponse, PageError, PageExecutor, PageReference};

fn default_timeout_secs() -> u64 {
    10
}

/// How to launch the bridge process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BridgeConfig {
    /// Program to run.
    pub command: String,
    /// Arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
    /// Upper bound on one request/response exchange.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// JSON written to the bridge's stdin.
#[derive(Serialize)]
struct BridgeInput<'a> {
    url: &'a str,
    title: &'a str,
    request: ExtractionRequest,
}

/// Runs each extraction request through a fresh bridge process.
pub struct CommandExecutor {
    config: BridgeConfig,
}

impl CommandExecutor {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    async fn exchange(&self, input: &[u8]) -> Result<Vec<u8>, PageError> {
        let command = &self.config.command;

        let mut child = Command::new(command)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PageError::Bridge(format!("failed to spawn '{command}': {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input).await?;
            // Dropping stdin closes the pipe so the bridge sees EOF.
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PageError::Bridge(format!(
                "'{command}' exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl PageExecutor for CommandExecutor {
    fn name(&self) -> &'static str {
        "bridge"
    }

    async fn run(
        &self,
        page: &PageReference,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, PageError> {
        let input = serde_json::to_vec(&BridgeInput {
            url: &page.url,
            title: &page.title,
            request,
        })
        .map_err(|e| PageError::Malformed(e.to_string()))?;

        let timeout = self.timeout();
        let stdout = tokio::time::timeout(timeout, self.exchange(&input))
            .await
            .map_err(|_| PageError::Timeout(timeout))??;

        serde_json::from_slice::<ExtractionResponse>(&stdout).map_err(|e| {
            let text: String = String::from_utf8_lossy(&stdout).chars().take(200).collect();
            PageError::Malformed(format!("{e}: {text}"))
        })
    }
}
