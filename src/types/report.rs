//! Merged analysis report.

use serde::{Deserialize, Serialize};

use super::sentiment::SentimentScores;
use super::tone::ToneScores;

/// Full analysis result for one text: canonical sentiment and tone scores,
/// with the input text and classifier id echoed back for the caller.
///
/// Serializes flat (sentiment and tone fields at the top level alongside
/// `text` and `model`), matching the shape API consumers chart directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// The analyzed text, echoed verbatim.
    pub text: String,
    /// Classifier id the sentiment came from.
    pub model: String,
    /// Canonical sentiment scores.
    #[serde(flatten)]
    pub scores: SentimentScores,
    /// Rule-based tone scores.
    #[serde(flatten)]
    pub tone: ToneScores,
}

impl SentimentReport {
    /// Assemble a report from its parts.
    pub fn new(
        text: impl Into<String>,
        model: impl Into<String>,
        scores: SentimentScores,
        tone: ToneScores,
    ) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            scores,
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;

    #[test]
    fn report_serializes_flat() {
        let report = SentimentReport::new(
            "nice",
            "test-model",
            SentimentScores::one_hot(SentimentLabel::Positive, 0.9),
            ToneScores::default(),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["text"], "nice");
        assert_eq!(value["model"], "test-model");
        // Flattened: no nested "scores"/"tone" objects.
        assert_eq!(value["sentiment"], "POSITIVE");
        assert_eq!(value["joy"], 0.0);
        assert!(value.get("scores").is_none());
        assert!(value.get("tone").is_none());
    }

    #[test]
    fn report_round_trips() {
        let report = SentimentReport::new(
            "some text",
            "m",
            SentimentScores::unknown(),
            ToneScores::default(),
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: SentimentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
