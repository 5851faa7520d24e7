//! Schema normalizer: raw classifier outputs to canonical scores.
//!
//! Every classifier family has its own output dialect. The normalizer
//! reconciles them into one three-class shape so callers never branch on
//! which model produced a result.
//!
//! Dispatch is by classifier id, never by payload shape: the closed table
//! in [`crate::registry`] names the expected schema for each supported id,
//! and the payload is interpreted against that expectation. An id outside
//! the table is the only error. Everything else a classifier can get wrong
//! (missing prediction, wrong shape for its schema, unrecognized label
//! text) degrades to [`SentimentScores::unknown`] so one bad output cannot
//! fail a request or a batch.

use tracing::{debug, instrument};

use crate::registry;
use crate::telemetry;
use crate::types::{ClassifierOutput, LabelScore, SchemaKind, SentimentLabel, SentimentScores};
use crate::{Result, TextaError};

/// Normalize one classifier's raw output into canonical sentiment scores.
///
/// Fails only when `model` is not in the supported table; malformed output
/// for a supported model degrades to the unknown-schema default instead.
#[instrument(skip(output), fields(operation = "normalize"))]
pub fn normalize(model: &str, output: &ClassifierOutput) -> Result<SentimentScores> {
    let kind = registry::schema_for(model)
        .ok_or_else(|| TextaError::ModelNotAvailable(model.to_string()))?;
    Ok(normalize_as(kind, output))
}

/// Normalize raw output against an explicit schema kind.
///
/// Infallible: payloads that do not match the kind degrade to the
/// unknown-schema default.
pub fn normalize_as(kind: SchemaKind, output: &ClassifierOutput) -> SentimentScores {
    match kind {
        SchemaKind::Binary => binary(output),
        SchemaKind::ThreeClass => three_class(output),
        SchemaKind::StarRating => star_rating(output),
        SchemaKind::ZeroShot => zero_shot(output),
        // A generative model has no sentiment head; there is nothing to
        // normalize even when the payload looks well-formed.
        SchemaKind::Generative => degraded(kind, "text_generation"),
    }
}

fn binary(output: &ClassifierOutput) -> SentimentScores {
    match output {
        ClassifierOutput::Binary { label, score } => {
            // Binary heads never emit neutral: anything that is not
            // POSITIVE lands in the negative slot.
            let sentiment = if label.eq_ignore_ascii_case("positive") {
                SentimentLabel::Positive
            } else {
                SentimentLabel::Negative
            };
            SentimentScores::one_hot(sentiment, *score)
        }
        other => mismatch(SchemaKind::Binary, other),
    }
}

fn three_class(output: &ClassifierOutput) -> SentimentScores {
    match output {
        // Full-word and short-code heads share one schema kind; the label
        // text disambiguates.
        ClassifierOutput::TriClass { label, score }
        | ClassifierOutput::ShortCode { label, score } => {
            SentimentScores::one_hot(class_label(label), *score)
        }
        other => mismatch(SchemaKind::ThreeClass, other),
    }
}

fn star_rating(output: &ClassifierOutput) -> SentimentScores {
    match output {
        ClassifierOutput::StarRating { label, score } => {
            let sentiment = match leading_rating(label) {
                rating if rating >= 4 => SentimentLabel::Positive,
                rating if rating <= 2 => SentimentLabel::Negative,
                _ => SentimentLabel::Neutral,
            };
            SentimentScores::one_hot(sentiment, *score)
        }
        other => mismatch(SchemaKind::StarRating, other),
    }
}

fn zero_shot(output: &ClassifierOutput) -> SentimentScores {
    match output {
        ClassifierOutput::ZeroShot { candidates } => match top_candidate(candidates) {
            Some(top) => SentimentScores::one_hot(class_label(&top.label), top.score),
            None => degraded(SchemaKind::ZeroShot, "empty_ranking"),
        },
        other => mismatch(SchemaKind::ZeroShot, other),
    }
}

/// Highest-scoring candidate, or `None` for an empty ranking.
fn top_candidate(candidates: &[LabelScore]) -> Option<&LabelScore> {
    candidates
        .iter()
        .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
}

/// Map three-class label text (full word or short code, any case) to its
/// canonical class. Unrecognized text counts as neutral.
fn class_label(label: &str) -> SentimentLabel {
    match label.to_lowercase().as_str() {
        "positive" | "pos" => SentimentLabel::Positive,
        "negative" | "neg" => SentimentLabel::Negative,
        // "neutral", "neu", and anything unrecognized
        _ => SentimentLabel::Neutral,
    }
}

/// Leading integer of star-rating label text ("4 stars" → 4).
/// Unparsable text counts as the middle rating.
fn leading_rating(label: &str) -> i32 {
    label
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(3)
}

/// Payload shape does not match the expected schema kind.
fn mismatch(kind: SchemaKind, output: &ClassifierOutput) -> SentimentScores {
    let reason = match output {
        ClassifierOutput::Empty => "empty_output",
        _ => "schema_mismatch",
    };
    degraded(kind, reason)
}

/// Fall back to the unknown-schema default, leaving a trace of why.
fn degraded(kind: SchemaKind, reason: &'static str) -> SentimentScores {
    debug!(schema = kind.as_str(), reason, "degrading classifier output to unknown default");
    metrics::counter!(telemetry::DEGRADED_OUTPUTS_TOTAL,
        "schema" => kind.as_str(),
        "reason" => reason,
    )
    .increment(1);
    SentimentScores::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_label_full_words() {
        assert_eq!(class_label("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(class_label("negative"), SentimentLabel::Negative);
        assert_eq!(class_label("Neutral"), SentimentLabel::Neutral);
    }

    #[test]
    fn class_label_short_codes() {
        assert_eq!(class_label("POS"), SentimentLabel::Positive);
        assert_eq!(class_label("NEG"), SentimentLabel::Negative);
        assert_eq!(class_label("NEU"), SentimentLabel::Neutral);
    }

    #[test]
    fn class_label_unrecognized_is_neutral() {
        assert_eq!(class_label("LABEL_1"), SentimentLabel::Neutral);
        assert_eq!(class_label(""), SentimentLabel::Neutral);
    }

    #[test]
    fn leading_rating_parses_first_token() {
        assert_eq!(leading_rating("4 stars"), 4);
        assert_eq!(leading_rating("1 star"), 1);
        assert_eq!(leading_rating("5"), 5);
    }

    #[test]
    fn leading_rating_defaults_to_middle() {
        assert_eq!(leading_rating("stars"), 3);
        assert_eq!(leading_rating(""), 3);
        assert_eq!(leading_rating("many stars"), 3);
    }

    #[test]
    fn top_candidate_picks_max() {
        let candidates = vec![
            LabelScore::new("neutral", 0.2),
            LabelScore::new("positive", 0.7),
            LabelScore::new("negative", 0.1),
        ];
        let top = top_candidate(&candidates).unwrap();
        assert_eq!(top.label, "positive");
    }

    #[test]
    fn top_candidate_empty_is_none() {
        assert!(top_candidate(&[]).is_none());
    }
}
