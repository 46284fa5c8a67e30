//! Learned sentiment classifier client.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::NlpError;
use crate::types::ModelScore;

/// Black-box binary sentiment classifier.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Classify a short text span into POSITIVE/NEGATIVE with confidence.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError`] if the model call fails or returns an
    /// unparseable response. Callers are expected to degrade, not abort.
    async fn classify(&self, text: &str) -> Result<ModelScore, NlpError>;
}

/// HTTP client for a sentiment classification model service.
pub struct HttpSentimentModel {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

impl HttpSentimentModel {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{base_url}/classify"),
        }
    }
}

#[async_trait]
impl SentimentModel for HttpSentimentModel {
    async fn classify(&self, text: &str) -> Result<ModelScore, NlpError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NlpError::Model(format!(
                "classifier returned status {}",
                response.status()
            )));
        }

        response
            .json::<ModelScore>()
            .await
            .map_err(|e| NlpError::Model(format!("classifier response parse error: {e}")))
    }
}
