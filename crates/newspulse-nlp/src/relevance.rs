//! Entity-relevance sentence filter.

use crate::ner::EntityRecognizer;
use crate::segment::{PeriodSpaceSegmenter, SentenceSegmenter};

/// Narrows article text to the sentence units that name the target entity.
///
/// A unit is kept when any recognized entity's surface text contains the
/// entity name as a case-insensitive substring. Fail-open: when nothing
/// matches, the original text is returned unchanged so downstream scoring
/// never receives an empty string for a non-empty article. This guards
/// against NER misses causing false negatives.
pub struct RelevanceFilter {
    segmenter: Box<dyn SentenceSegmenter>,
    recognizer: Box<dyn EntityRecognizer>,
}

impl RelevanceFilter {
    #[must_use]
    pub fn new(
        segmenter: Box<dyn SentenceSegmenter>,
        recognizer: Box<dyn EntityRecognizer>,
    ) -> Self {
        Self {
            segmenter,
            recognizer,
        }
    }

    /// Standard configuration: period-space segmentation.
    #[must_use]
    pub fn with_period_space(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self::new(Box::new(PeriodSpaceSegmenter), recognizer)
    }

    /// Filter `text` down to the units relevant to `entity_name`.
    ///
    /// A NER failure on one unit is logged and treated as "no entities" —
    /// a flaky model service degrades toward the full-text fallback rather
    /// than aborting the article.
    pub async fn filter(&self, text: &str, entity_name: &str) -> String {
        let needle = entity_name.to_lowercase();
        let mut kept: Vec<&str> = Vec::new();

        for unit in self.segmenter.segment(text) {
            match self.recognizer.entities(unit).await {
                Ok(entities) => {
                    if entities
                        .iter()
                        .any(|e| e.text.to_lowercase().contains(&needle))
                    {
                        kept.push(unit);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "NER failed for sentence unit, treating as unmatched");
                }
            }
        }

        if kept.is_empty() {
            text.to_string()
        } else {
            kept.join(". ")
        }
    }
}
