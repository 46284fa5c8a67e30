use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error: {0}")]
    Ner(String),

    #[error("sentiment model error: {0}")]
    Model(String),
}
