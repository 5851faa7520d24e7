//! Rule-based sentiment classifier.
//!
//! Counts polarity keyword hits and turns the winning side's share into a
//! confidence. No model involved, so it works anywhere the crate does and
//! makes a sensible fallback when no inference layer is reachable.
//!
//! Unlike normalized classifier output, the result here is not one-hot:
//! the losing polarity slot keeps `1 - confidence`, reflecting that both
//! sides contributed hits.

use crate::lexicon::Lexicon;
use crate::types::{SentimentLabel, SentimentScores};

/// Classifier id reported for rule-based results.
pub const RULE_BASED_ID: &str = "rule-based";

static POSITIVE_WORDS: Lexicon = Lexicon::new(
    "positive",
    &[
        "good",
        "great",
        "excellent",
        "amazing",
        "wonderful",
        "fantastic",
        "awesome",
        "love",
        "like",
        "happy",
        "pleased",
        "satisfied",
        "perfect",
        "brilliant",
        "outstanding",
        "superb",
        "marvelous",
        "terrific",
        "fabulous",
        "incredible",
    ],
);

static NEGATIVE_WORDS: Lexicon = Lexicon::new(
    "negative",
    &[
        "bad",
        "terrible",
        "awful",
        "horrible",
        "hate",
        "dislike",
        "sad",
        "angry",
        "frustrated",
        "disappointed",
        "disgusted",
        "annoyed",
        "furious",
        "upset",
        "depressed",
        "miserable",
        "pathetic",
        "useless",
        "worthless",
        "dreadful",
    ],
);

/// Classify text by polarity keyword counting.
///
/// Tokens are exact whitespace-split matches only (no substring pass, so
/// punctuation blocks a hit). Zero hits on both sides produce the same
/// neutral shape as the normalizer's unknown-schema default. Ties count
/// as negative.
pub fn classify(text: &str) -> SentimentScores {
    let lowered = text.to_lowercase();
    let positive_hits = lowered
        .split_whitespace()
        .filter(|word| POSITIVE_WORDS.contains(word))
        .count();
    let negative_hits = lowered
        .split_whitespace()
        .filter(|word| NEGATIVE_WORDS.contains(word))
        .count();
    let total = positive_hits + negative_hits;

    if total == 0 {
        return SentimentScores::unknown();
    }

    if positive_hits > negative_hits {
        let confidence = positive_hits as f32 / total as f32;
        SentimentScores {
            sentiment: SentimentLabel::Positive,
            confidence,
            positive_score: confidence,
            negative_score: 1.0 - confidence,
            neutral_score: 0.0,
        }
    } else {
        let confidence = negative_hits as f32 / total as f32;
        SentimentScores {
            sentiment: SentimentLabel::Negative,
            confidence,
            positive_score: 1.0 - confidence,
            negative_score: confidence,
            neutral_score: 0.0,
        }
    }
}
