use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("render failed for {url}: {reason}")]
    Render { url: String, reason: String },

    #[error("render timed out for {url} after {timeout_secs}s")]
    RenderTimeout { url: String, timeout_secs: u64 },

    #[error("no readable text at {url}")]
    NoReadableText { url: String },
}
