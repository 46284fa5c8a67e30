//! Paragraph-scrape strategy: plain GET plus a `<p>` text sweep.

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::fetch::FetchStrategy;
use crate::parse::paragraph_text;

/// Priority-2 strategy. Joins the text of every paragraph element on the
/// page. Cruder than the reader parse (picks up bylines and footers) but
/// works on pages with no semantic article markup.
pub struct ParagraphFetch {
    client: reqwest::Client,
    user_agent: String,
}

impl ParagraphFetch {
    #[must_use]
    pub fn new(client: reqwest::Client, user_agent: &str) -> Self {
        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }
}

#[async_trait]
impl FetchStrategy for ParagraphFetch {
    fn name(&self) -> &'static str {
        "paragraph"
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
        Ok(paragraph_text(&html))
    }
}
