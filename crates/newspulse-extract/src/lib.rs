//! Article discovery and content extraction for newspulse.
//!
//! Scrapes candidate article URLs from a news search-results page, shapes
//! them into a deduplicated, capped result set, and extracts readable body
//! text per URL through an ordered chain of fetch strategies: article-reader
//! parse, plain paragraph scrape, headless render.

pub mod discovery;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod resultset;
pub mod types;

mod parse;

pub use error::ExtractError;
pub use extractor::ContentExtractor;
pub use fetch::{FetchStrategy, HeadlessFetch, ParagraphFetch, ReaderFetch};
pub use resultset::build_result_set;
pub use types::ExtractedContent;
