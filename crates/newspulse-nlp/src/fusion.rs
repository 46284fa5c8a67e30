//! Two-model sentiment fusion.

use crate::lexicon::lexicon_score;
use crate::model::SentimentModel;
use crate::types::{SentimentLabel, SentimentVerdict};

/// Scores above this are Positive; the boundary itself is Neutral.
const POSITIVE_THRESHOLD: f32 = 0.2;
/// Scores below this are Negative; the boundary itself is Neutral.
const NEGATIVE_THRESHOLD: f32 = -0.2;
/// Character budget handed to the learned classifier per article.
const MODEL_CHAR_CAP: usize = 512;

/// Equal-weight ensemble of the lexicon scorer and a learned classifier.
///
/// The lexicon is robust to novel vocabulary and scrape noise; the learned
/// model captures context the lexicon misses. Averaging smooths their
/// disagreement instead of picking a winner. A failed model call degrades
/// to the lexicon signal alone (halved by the average), never an abort.
pub struct SentimentEngine {
    model: Box<dyn SentimentModel>,
}

impl SentimentEngine {
    #[must_use]
    pub fn new(model: Box<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Produce the fused sentiment verdict for `text`.
    ///
    /// Blank (whitespace-only) input short-circuits to `(Neutral, 0.0)`
    /// without invoking either model.
    pub async fn analyze(&self, text: &str) -> SentimentVerdict {
        if text.trim().is_empty() {
            return SentimentVerdict {
                label: SentimentLabel::Neutral,
                score: 0.0,
            };
        }

        let lexicon = lexicon_score(text);

        let learned = match self.model.classify(truncate_chars(text, MODEL_CHAR_CAP)).await {
            Ok(model_score) => model_score.signed(),
            Err(e) => {
                tracing::warn!(error = %e, "learned sentiment model failed, using neutral signal");
                0.0
            }
        };

        let score = (lexicon + learned) / 2.0;
        SentimentVerdict {
            label: label_for(score),
            score,
        }
    }
}

fn label_for(score: f32) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Truncate to at most `cap` characters, respecting UTF-8 boundaries.
fn truncate_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
