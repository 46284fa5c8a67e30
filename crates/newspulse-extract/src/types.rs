/// Readable body text recovered from an article page.
///
/// Only ever constructed with non-blank text; "nothing extractable" is the
/// `None` outcome of [`crate::ContentExtractor::extract`], not an empty
/// string.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// Plain text of the article body.
    pub text: String,
    /// Name of the fetch strategy that produced the text.
    pub strategy: &'static str,
}
