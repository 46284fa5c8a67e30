//! Headless-render strategy: spawn a browser, dump the rendered DOM.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::fetch::FetchStrategy;
use crate::parse::paragraph_text;

/// Priority-3 strategy, for client-side-rendered pages the static fetches
/// cannot read. Spawns one headless browser process per call with a
/// virtual-time budget so the page's scripts get a bounded window to render
/// before the DOM is dumped, then runs the paragraph scrape over the output.
///
/// The child is spawned with `kill_on_drop`, so the render session is torn
/// down on every exit path — timeout and caller cancellation included.
pub struct HeadlessFetch {
    cmd: String,
    render_wait_ms: u64,
    timeout_secs: u64,
}

impl HeadlessFetch {
    #[must_use]
    pub fn new(cmd: &str, render_wait_ms: u64, timeout_secs: u64) -> Self {
        Self {
            cmd: cmd.to_string(),
            render_wait_ms,
            timeout_secs,
        }
    }
}

#[async_trait]
impl FetchStrategy for HeadlessFetch {
    fn name(&self) -> &'static str {
        "headless"
    }

    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let mut command = tokio::process::Command::new(&self.cmd);
        command
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg(format!("--virtual-time-budget={}", self.render_wait_ms))
            .arg("--dump-dom")
            .arg(url)
            .kill_on_drop(true);

        let output = tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            command.output(),
        )
        .await
        .map_err(|_| ExtractError::RenderTimeout {
            url: url.to_string(),
            timeout_secs: self.timeout_secs,
        })?
        .map_err(|e| ExtractError::Render {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(ExtractError::Render {
                url: url.to_string(),
                reason: format!("{} exited with {}", self.cmd, output.status),
            });
        }

        let html = String::from_utf8_lossy(&output.stdout);
        Ok(paragraph_text(&html))
    }
}
