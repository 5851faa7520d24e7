//! Canonical sentiment types.
//!
//! Every supported classifier, whatever its native output schema, is
//! normalized into the same three-class shape so downstream consumers
//! never have to know which model produced a result.

use serde::{Deserialize, Serialize};

/// The canonical sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    /// Text expresses positive sentiment.
    Positive,
    /// Text expresses negative sentiment.
    Negative,
    /// Text is neutral or the classifier could not decide.
    Neutral,
}

impl SentimentLabel {
    /// Wire-format label text ("POSITIVE", "NEGATIVE", "NEUTRAL").
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical result of sentiment normalization.
///
/// `sentiment` names the winning class and `confidence` is the classifier's
/// score for it. The three per-class slots redundantly encode the same
/// distribution for consumers that chart all classes at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// The winning sentiment class.
    pub sentiment: SentimentLabel,
    /// Classifier confidence in the winning class (0.0 to 1.0).
    pub confidence: f32,
    /// Score for the positive class (0.0 to 1.0).
    pub positive_score: f32,
    /// Score for the negative class (0.0 to 1.0).
    pub negative_score: f32,
    /// Score for the neutral class (0.0 to 1.0).
    pub neutral_score: f32,
}

impl SentimentScores {
    /// Build the one-hot shape: the winning class's slot carries the
    /// confidence and the other two slots are zero.
    ///
    /// Confidence is clamped to `[0.0, 1.0]` so malformed classifier scores
    /// cannot leak out-of-range values downstream.
    pub fn one_hot(sentiment: SentimentLabel, confidence: f32) -> Self {
        let confidence = confidence.clamp(0.0, 1.0);
        let (positive_score, negative_score, neutral_score) = match sentiment {
            SentimentLabel::Positive => (confidence, 0.0, 0.0),
            SentimentLabel::Negative => (0.0, confidence, 0.0),
            SentimentLabel::Neutral => (0.0, 0.0, confidence),
        };
        Self {
            sentiment,
            confidence,
            positive_score,
            negative_score,
            neutral_score,
        }
    }

    /// The unknown-schema default: neutral at half confidence with a
    /// near-uniform distribution.
    ///
    /// This is the shape every degraded path converges on, and the only
    /// shape this crate produces that is not one-hot.
    pub fn unknown() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            confidence: 0.5,
            positive_score: 0.33,
            negative_score: 0.33,
            neutral_score: 0.34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_positive_fills_positive_slot() {
        let scores = SentimentScores::one_hot(SentimentLabel::Positive, 0.97);
        assert_eq!(scores.sentiment, SentimentLabel::Positive);
        assert_eq!(scores.positive_score, 0.97);
        assert_eq!(scores.negative_score, 0.0);
        assert_eq!(scores.neutral_score, 0.0);
    }

    #[test]
    fn one_hot_negative_fills_negative_slot() {
        let scores = SentimentScores::one_hot(SentimentLabel::Negative, 0.8);
        assert_eq!(scores.negative_score, 0.8);
        assert_eq!(scores.positive_score, 0.0);
        assert_eq!(scores.neutral_score, 0.0);
    }

    #[test]
    fn one_hot_neutral_fills_neutral_slot() {
        let scores = SentimentScores::one_hot(SentimentLabel::Neutral, 0.6);
        assert_eq!(scores.neutral_score, 0.6);
        assert_eq!(scores.positive_score, 0.0);
        assert_eq!(scores.negative_score, 0.0);
    }

    #[test]
    fn one_hot_clamps_out_of_range_confidence() {
        let high = SentimentScores::one_hot(SentimentLabel::Positive, 1.7);
        assert_eq!(high.confidence, 1.0);
        assert_eq!(high.positive_score, 1.0);

        let low = SentimentScores::one_hot(SentimentLabel::Negative, -0.2);
        assert_eq!(low.confidence, 0.0);
        assert_eq!(low.negative_score, 0.0);
    }

    #[test]
    fn unknown_default_shape() {
        let scores = SentimentScores::unknown();
        assert_eq!(scores.sentiment, SentimentLabel::Neutral);
        assert_eq!(scores.confidence, 0.5);
        assert_eq!(scores.positive_score, 0.33);
        assert_eq!(scores.negative_score, 0.33);
        assert_eq!(scores.neutral_score, 0.34);
    }

    #[test]
    fn label_serializes_as_upper_case() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        let back: SentimentLabel = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(back, SentimentLabel::Neutral);
    }
}
