//! Fetch strategies: interchangeable ways of turning a URL into page text.
//!
//! The extractor walks an ordered list of these, so a new strategy (feed
//! fetch, archive lookup) slots in without touching extraction logic.

mod headless;
mod paragraph;
mod reader;

pub use headless::HeadlessFetch;
pub use paragraph::ParagraphFetch;
pub use reader::ReaderFetch;

use async_trait::async_trait;

use crate::error::ExtractError;

/// One specific method of turning a URL into readable page text.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Short strategy name used in logs and the per-article report.
    fn name(&self) -> &'static str;

    /// Fetch the page and return its text.
    ///
    /// A blank (whitespace-only) `Ok` is treated as a miss by the extractor,
    /// same as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] on network failure, non-2xx status, render
    /// failure, or when the page has no readable text.
    async fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}
