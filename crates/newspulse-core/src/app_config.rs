/// Runtime configuration for a newspulse scan.
///
/// Every field has an env-var default; see [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// `User-Agent` header sent on every discovery and article fetch.
    pub user_agent: String,
    /// Per-request timeout applied to the shared HTTP client.
    pub request_timeout_secs: u64,
    /// Maximum number of distinct article URLs processed per scan.
    pub result_cap: usize,
    /// Character budget for the relevant-text preview in the report.
    pub preview_chars: usize,
    /// Virtual-time budget granted to the headless render before the DOM
    /// is read, in milliseconds.
    pub render_wait_ms: u64,
    /// Headless browser binary invoked by the render fallback strategy.
    pub headless_cmd: String,
    /// Base URL of the NER model service.
    pub ner_url: String,
    /// Base URL of the learned sentiment model service.
    pub sentiment_url: String,
}
