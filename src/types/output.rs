//! Raw classifier output schemas.
//!
//! Each supported classifier family emits predictions in its own shape:
//! binary heads, three-class heads (full words or short codes), star
//! ratings with the rating embedded in label text, and zero-shot rankings.
//! [`ClassifierOutput`] captures those shapes verbatim; the normalizer in
//! [`crate::normalize`] is what turns them into canonical scores.

use serde::{Deserialize, Serialize};

/// One `(label, score)` candidate emitted by a classification head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Label text as the classifier produced it.
    pub label: String,
    /// Score the classifier assigned to this label.
    pub score: f32,
}

impl LabelScore {
    /// Create a candidate from label text and a score.
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Raw output of one classifier run, tagged by shape.
///
/// The variant records what the classifier emitted, not what the caller
/// expected; the expected schema for a given classifier id lives in the
/// [`crate::registry`] table. A mismatch between the two is not an error,
/// it degrades to the unknown-schema default during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum ClassifierOutput {
    /// Two-class head (e.g. SST-2 fine-tunes): "POSITIVE" or "NEGATIVE"
    /// plus a single confidence.
    Binary {
        /// Winning label text.
        label: String,
        /// Confidence in the winning label.
        score: f32,
    },
    /// Three-class head emitting full-word labels such as "POSITIVE",
    /// "negative", "Neutral".
    TriClass {
        /// Winning label text.
        label: String,
        /// Confidence in the winning label.
        score: f32,
    },
    /// Three-class head emitting short codes: "POS", "NEG", "NEU".
    ShortCode {
        /// Winning label text.
        label: String,
        /// Confidence in the winning label.
        score: f32,
    },
    /// Star-rating head: the rating is embedded in label text such as
    /// "4 stars" or "1 star".
    StarRating {
        /// Rating label text.
        label: String,
        /// Confidence in the rating.
        score: f32,
    },
    /// Zero-shot ranking over caller-supplied candidate labels.
    ZeroShot {
        /// All candidates with their scores, in classifier order.
        candidates: Vec<LabelScore>,
    },
    /// The classifier produced no usable prediction.
    Empty,
}

impl ClassifierOutput {
    /// Binary head output.
    pub fn binary(label: impl Into<String>, score: f32) -> Self {
        ClassifierOutput::Binary {
            label: label.into(),
            score,
        }
    }

    /// Full-word three-class head output.
    pub fn tri_class(label: impl Into<String>, score: f32) -> Self {
        ClassifierOutput::TriClass {
            label: label.into(),
            score,
        }
    }

    /// Short-code three-class head output.
    pub fn short_code(label: impl Into<String>, score: f32) -> Self {
        ClassifierOutput::ShortCode {
            label: label.into(),
            score,
        }
    }

    /// Star-rating head output.
    pub fn star_rating(label: impl Into<String>, score: f32) -> Self {
        ClassifierOutput::StarRating {
            label: label.into(),
            score,
        }
    }

    /// Zero-shot ranking output.
    pub fn zero_shot(candidates: Vec<LabelScore>) -> Self {
        ClassifierOutput::ZeroShot { candidates }
    }
}

/// Expected output schema for one classifier id.
///
/// The closed table in [`crate::registry`] maps every supported id to
/// exactly one kind; normalization dispatches on this, never on the shape
/// of the payload it happens to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Two-class positive/negative head; never emits neutral.
    Binary,
    /// Three-class head, full words or POS/NEG/NEU short codes.
    ThreeClass,
    /// Star ratings ("1 star" through "5 stars") mapped onto three classes.
    StarRating,
    /// Ranked candidate labels reduced by highest score.
    ZeroShot,
    /// Text-generation model with no sentiment head at all.
    Generative,
}

impl SchemaKind {
    /// Stable lowercase name, used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Binary => "binary",
            SchemaKind::ThreeClass => "three_class",
            SchemaKind::StarRating => "star_rating",
            SchemaKind::ZeroShot => "zero_shot",
            SchemaKind::Generative => "generative",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_serializes_with_schema_tag() {
        let output = ClassifierOutput::binary("POSITIVE", 0.99);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"schema\":\"binary\""), "got: {json}");
        assert!(json.contains("\"label\":\"POSITIVE\""), "got: {json}");
    }

    #[test]
    fn empty_output_round_trips() {
        let json = serde_json::to_string(&ClassifierOutput::Empty).unwrap();
        assert_eq!(json, "{\"schema\":\"empty\"}");
        let back: ClassifierOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClassifierOutput::Empty);
    }

    #[test]
    fn zero_shot_round_trips() {
        let output = ClassifierOutput::zero_shot(vec![
            LabelScore::new("positive", 0.1),
            LabelScore::new("negative", 0.7),
        ]);
        let json = serde_json::to_string(&output).unwrap();
        let back: ClassifierOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn unknown_schema_tag_is_rejected() {
        let err = serde_json::from_str::<ClassifierOutput>(
            "{\"schema\":\"emoji\",\"label\":\"🎉\",\"score\":1.0}",
        );
        assert!(err.is_err());
    }
}
