//! Telemetry metric name constants.
//!
//! Centralised metric names for texta operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `texta_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `model` — classifier id (e.g. "ProsusAI/finbert")
//! - `operation` — entry point invoked ("analyze" | "analyze_batch")
//! - `status` — outcome: "ok" or "error"
//! - `schema` — expected output schema for the classifier
//! - `reason` — why an output degraded or a batch item was skipped

/// Total analyses performed.
///
/// Labels: `model`, `operation`, `status` ("ok" | "error").
pub const ANALYSES_TOTAL: &str = "texta_analyses_total";

/// Analysis duration in seconds.
///
/// Labels: `operation`.
pub const ANALYSIS_DURATION_SECONDS: &str = "texta_analysis_duration_seconds";

/// Total classifier outputs that degraded to the unknown-schema default.
///
/// Labels: `schema`, `reason` ("schema_mismatch" | "empty_output" |
/// "empty_ranking" | "text_generation").
pub const DEGRADED_OUTPUTS_TOTAL: &str = "texta_degraded_outputs_total";

/// Total batch items skipped without producing a result.
///
/// Labels: `reason` ("blank_text").
pub const BATCH_ITEMS_SKIPPED_TOTAL: &str = "texta_batch_items_skipped_total";
