//! Analysis entry points: sentiment normalization and tone scoring merged
//! into one report per text.
//!
//! These are the functions a serving layer calls once it has classifier
//! output in hand. They stay synchronous and allocation-light; running
//! them off the hot path (or not) is the caller's decision.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::normalize::normalize_as;
use crate::registry;
use crate::telemetry;
use crate::tone::score_tone;
use crate::types::{ClassifierOutput, SentimentReport};
use crate::{Result, TextaError};

/// Largest batch a single request may carry.
///
/// Enforced at the transport edge, not here: the batch function itself
/// processes any length so internal callers can chunk however they like.
pub const MAX_BATCH_TEXTS: usize = 100;

/// Analyze one text: normalize the classifier output and score tone,
/// merged into a single report.
///
/// Fails only for an unsupported `model`. Blank text is not an error at
/// this level; it simply tone-scores to all zeros.
#[instrument(skip(text, output), fields(operation = "analyze"))]
pub fn analyze(text: &str, model: &str, output: &ClassifierOutput) -> Result<SentimentReport> {
    let start = Instant::now();
    let kind = match registry::schema_for(model) {
        Some(kind) => kind,
        None => {
            record_analysis("analyze", model, start, false);
            return Err(TextaError::ModelNotAvailable(model.to_string()));
        }
    };

    let scores = normalize_as(kind, output);
    let tone = score_tone(text);
    record_analysis("analyze", model, start, true);
    Ok(SentimentReport::new(text, model, scores, tone))
}

/// Analyze a batch of `(text, output)` pairs against one classifier.
///
/// The model check happens once, up front: an unsupported id fails the
/// whole batch before any item is processed. Blank texts are skipped
/// silently (no placeholder in the output), so results keep input order
/// but may be shorter than the input. Malformed outputs do not fail the
/// batch; the affected item degrades like it would on the single path.
#[instrument(skip(items), fields(operation = "analyze_batch"))]
pub fn analyze_batch<'a, I>(items: I, model: &str) -> Result<Vec<SentimentReport>>
where
    I: IntoIterator<Item = (&'a str, ClassifierOutput)>,
{
    let start = Instant::now();
    let kind = match registry::schema_for(model) {
        Some(kind) => kind,
        None => {
            record_analysis("analyze_batch", model, start, false);
            return Err(TextaError::ModelNotAvailable(model.to_string()));
        }
    };

    let mut reports = Vec::new();
    for (text, output) in items {
        if text.trim().is_empty() {
            debug!(model, "skipping blank batch item");
            metrics::counter!(telemetry::BATCH_ITEMS_SKIPPED_TOTAL, "reason" => "blank_text")
                .increment(1);
            continue;
        }
        let scores = normalize_as(kind, &output);
        reports.push(SentimentReport::new(text, model, scores, score_tone(text)));
    }

    record_analysis("analyze_batch", model, start, true);
    Ok(reports)
}

/// Record one analysis outcome (counter + duration histogram).
fn record_analysis(operation: &'static str, model: &str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::ANALYSES_TOTAL,
        "model" => model.to_owned(),
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::ANALYSIS_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(elapsed);
}
