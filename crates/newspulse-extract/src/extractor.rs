//! Ordered-fallback content extraction.

use crate::fetch::{FetchStrategy, HeadlessFetch, ParagraphFetch, ReaderFetch};
use crate::types::ExtractedContent;

/// Runs fetch strategies in priority order and keeps the first non-blank
/// result. Per-strategy failures are logged and swallowed; they only advance
/// the chain. Exhausting every strategy yields `None` — an expected outcome
/// for unreachable, JS-only, or paywalled pages, not an error.
pub struct ContentExtractor {
    strategies: Vec<Box<dyn FetchStrategy>>,
}

impl ContentExtractor {
    /// Build an extractor over an explicit strategy chain. Order is priority.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn FetchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Build the standard chain: article-reader parse, paragraph scrape,
    /// headless render. The render strategy is last because it spawns a
    /// browser process per call.
    #[must_use]
    pub fn with_default_strategies(
        client: reqwest::Client,
        user_agent: &str,
        headless_cmd: &str,
        render_wait_ms: u64,
        render_timeout_secs: u64,
    ) -> Self {
        Self::new(vec![
            Box::new(ReaderFetch::new(client.clone(), user_agent)),
            Box::new(ParagraphFetch::new(client, user_agent)),
            Box::new(HeadlessFetch::new(
                headless_cmd,
                render_wait_ms,
                render_timeout_secs,
            )),
        ])
    }

    /// Extract readable body text from `url`, or `None` when every strategy
    /// fails or returns blank text.
    pub async fn extract(&self, url: &str) -> Option<ExtractedContent> {
        for strategy in &self.strategies {
            match strategy.fetch(url).await {
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.is_empty() {
                        tracing::debug!(
                            url,
                            strategy = strategy.name(),
                            "strategy returned blank text, trying next"
                        );
                        continue;
                    }
                    tracing::debug!(
                        url,
                        strategy = strategy.name(),
                        chars = trimmed.chars().count(),
                        "extracted article text"
                    );
                    return Some(ExtractedContent {
                        text: trimmed.to_string(),
                        strategy: strategy.name(),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        url,
                        strategy = strategy.name(),
                        error = %e,
                        "fetch strategy failed, trying next"
                    );
                }
            }
        }

        tracing::info!(url, "all fetch strategies exhausted");
        None
    }
}
