//! Article-reader strategy: locate the page's main article container.

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::fetch::FetchStrategy;
use crate::parse::article_text;

/// Priority-1 strategy. Fetches the page and parses out the main article
/// container (`<article>`, `<main>`, common content classes). Misses on
/// pages without a recognizable container, which is common enough that the
/// paragraph scrape exists as the next rung.
pub struct ReaderFetch {
    client: reqwest::Client,
    user_agent: String,
}

impl ReaderFetch {
    #[must_use]
    pub fn new(client: reqwest::Client, user_agent: &str) -> Self {
        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }
}

#[async_trait]
impl FetchStrategy for ReaderFetch {
    fn name(&self) -> &'static str {
        "reader"
    }

    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        article_text(&html).ok_or_else(|| ExtractError::NoReadableText {
            url: url.to_string(),
        })
    }
}
