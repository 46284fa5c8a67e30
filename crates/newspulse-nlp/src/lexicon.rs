//! Rule-based lexicon scorer for news text.

/// General news-vocabulary word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("growing", 0.3),
    ("profit", 0.4),
    ("profits", 0.4),
    ("surge", 0.5),
    ("surged", 0.5),
    ("record", 0.3),
    ("strong", 0.4),
    ("success", 0.5),
    ("successful", 0.5),
    ("win", 0.4),
    ("won", 0.4),
    ("victory", 0.5),
    ("best", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("innovative", 0.4),
    ("breakthrough", 0.5),
    ("approved", 0.4),
    ("expand", 0.3),
    ("expands", 0.3),
    ("rally", 0.4),
    ("beat", 0.3),
    ("upbeat", 0.4),
    ("optimistic", 0.4),
    ("soared", 0.5),
    ("launch", 0.2),
    // Negative signals
    ("loss", -0.4),
    ("losses", -0.4),
    ("decline", -0.4),
    ("declined", -0.4),
    ("drop", -0.3),
    ("dropped", -0.3),
    ("plunge", -0.6),
    ("plunged", -0.6),
    ("lawsuit", -0.5),
    ("fraud", -0.7),
    ("scandal", -0.6),
    ("fine", -0.3),
    ("fined", -0.4),
    ("layoffs", -0.5),
    ("bankruptcy", -0.7),
    ("recall", -0.5),
    ("crash", -0.6),
    ("crisis", -0.5),
    ("weak", -0.3),
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("failed", -0.4),
    ("failure", -0.4),
    ("problem", -0.3),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("warning", -0.4),
    ("probe", -0.4),
    ("investigation", -0.3),
    ("missed", -0.3),
    ("cut", -0.2),
    ("cuts", -0.2),
];

/// Words that flip the sign of the word immediately after them.
const NEGATORS: [&str; 4] = ["not", "no", "never", "without"];

/// Score a text string using the news lexicon.
///
/// Splits text into lowercase words, sums matching weights (flipping the
/// sign after a negator), and clamps the result to `[-1.0, 1.0]`.
/// Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    let mut negated = false;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();

        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += if negated { -weight } else { weight };
                break;
            }
        }

        negated = NEGATORS.contains(&w.as_str());
    }

    score.clamp(-1.0, 1.0)
}
