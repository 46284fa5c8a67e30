//! Named-entity recognition client.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::NlpError;
use crate::types::Entity;

/// Black-box NER capability, injected so components stay testable with
/// stub recognizers.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Recognize named entities in a text span.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError`] if the model call fails or returns an
    /// unparseable response.
    async fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError>;
}

/// HTTP client for an NER model service.
pub struct HttpNerClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

impl HttpNerClient {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{base_url}/ner"),
        }
    }
}

#[async_trait]
impl EntityRecognizer for HttpNerClient {
    async fn entities(&self, text: &str) -> Result<Vec<Entity>, NlpError> {
        let response = self
            .client
            .post(&self.url)
            .json(&NerRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NlpError::Ner(format!(
                "NER service returned status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<Entity>>()
            .await
            .map_err(|e| NlpError::Ner(format!("NER response parse error: {e}")))
    }
}
