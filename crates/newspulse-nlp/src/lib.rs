//! Entity relevance and sentiment fusion for newspulse.
//!
//! Narrows article text to the sentences naming the target entity (NER via
//! a model service, fail-open when nothing matches) and scores the result
//! with an equal-weight ensemble of an in-process lexicon and a learned
//! classifier reached over HTTP.

pub mod error;
pub mod fusion;
pub mod lexicon;
pub mod model;
pub mod ner;
pub mod relevance;
pub mod segment;
pub mod types;

pub use error::NlpError;
pub use fusion::SentimentEngine;
pub use lexicon::lexicon_score;
pub use model::{HttpSentimentModel, SentimentModel};
pub use ner::{EntityRecognizer, HttpNerClient};
pub use relevance::RelevanceFilter;
pub use segment::{PeriodSpaceSegmenter, SentenceSegmenter};
pub use types::{Entity, ModelLabel, ModelScore, SentimentLabel, SentimentVerdict};
