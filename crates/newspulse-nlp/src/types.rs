use serde::Deserialize;

/// A named entity recognized in a text span.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Surface text of the entity as it appears in the input.
    pub text: String,
    /// Entity type tag from the model (PERSON, ORG, GPE, ...). Relevance
    /// matching ignores it; any type counts.
    #[serde(default)]
    pub label: String,
}

/// Binary label emitted by the learned sentiment classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelLabel {
    Positive,
    Negative,
}

/// Classifier output: label plus confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModelScore {
    pub label: ModelLabel,
    pub score: f32,
}

impl ModelScore {
    /// Signed value: `+confidence` for POSITIVE, `-confidence` for NEGATIVE.
    ///
    /// The confidence is clamped to `[0.0, 1.0]` first, so an out-of-range
    /// service response cannot push downstream scores past their bounds.
    #[must_use]
    pub fn signed(&self) -> f32 {
        let confidence = self.score.clamp(0.0, 1.0);
        match self.label {
            ModelLabel::Positive => confidence,
            ModelLabel::Negative => -confidence,
        }
    }
}

/// Categorical sentiment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// Terminal per-article sentiment verdict.
///
/// `label` is a deterministic function of `score` via the ±0.2 thresholds in
/// [`crate::fusion`]; the two are only ever constructed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentVerdict {
    pub label: SentimentLabel,
    /// Fused score in `[-1.0, 1.0]`.
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_follows_the_label_sign() {
        let positive = ModelScore {
            label: ModelLabel::Positive,
            score: 0.7,
        };
        let negative = ModelScore {
            label: ModelLabel::Negative,
            score: 0.7,
        };
        assert_eq!(positive.signed(), 0.7);
        assert_eq!(negative.signed(), -0.7);
    }

    #[test]
    fn signed_clamps_out_of_range_confidence() {
        let high = ModelScore {
            label: ModelLabel::Positive,
            score: 1.5,
        };
        let low = ModelScore {
            label: ModelLabel::Negative,
            score: 2.0,
        };
        assert_eq!(high.signed(), 1.0);
        assert_eq!(low.signed(), -1.0);
    }
}
