//! Sentence segmentation seam.

/// Splits text into sentence-like units for targeted entity matching.
///
/// A trait rather than a function so a real sentence-boundary model can
/// replace the heuristic without touching relevance logic.
pub trait SentenceSegmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on the literal two-character sequence `". "`.
///
/// Known limitation: abbreviations ("U.S. economy") and periods without a
/// trailing space mis-segment. Accepted as a documented trade-off; the
/// relevance filter's fail-open fallback bounds the damage.
pub struct PeriodSpaceSegmenter;

impl SentenceSegmenter for PeriodSpaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(". ").collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_period_space() {
        let units = PeriodSpaceSegmenter.segment("One thing happened. Then another. The end.");
        assert_eq!(units, vec!["One thing happened", "Then another", "The end."]);
    }

    #[test]
    fn no_delimiter_yields_single_unit() {
        let units = PeriodSpaceSegmenter.segment("A single sentence without the delimiter");
        assert_eq!(units.len(), 1);
    }

    #[test]
    fn abbreviations_mis_segment_as_documented() {
        // Not a bug to fix silently: the heuristic splits inside "U.S. ".
        let units = PeriodSpaceSegmenter.segment("The U.S. economy grew.");
        assert_eq!(units, vec!["The U.S", "economy grew."]);
    }

    #[test]
    fn empty_text_yields_one_empty_unit() {
        assert_eq!(PeriodSpaceSegmenter.segment(""), vec![""]);
    }
}
