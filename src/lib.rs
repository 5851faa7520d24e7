//! Texta core - sentiment normalization and tone scoring
//!
//! This crate reconciles the output dialects of different sentiment
//! classifiers (binary heads, three-class heads, star ratings, zero-shot
//! rankings) into one canonical three-class result, and scores eight
//! affect/register tone dimensions from fixed keyword lexicons. Everything
//! is synchronous and deterministic: no I/O, no model inference, no
//! global state. Serving layers run classifiers and move bytes; this
//! crate decides what their outputs mean.
//!
//! # Analysis Example
//!
//! ```rust
//! use texta_core::{ClassifierOutput, SentimentLabel, analyze};
//!
//! fn main() -> texta_core::Result<()> {
//!     let output = ClassifierOutput::binary("POSITIVE", 0.98);
//!     let report = analyze(
//!         "What a wonderful day, I am happy",
//!         "distilbert-base-uncased-finetuned-sst-2-english",
//!         &output,
//!     )?;
//!
//!     assert_eq!(report.scores.sentiment, SentimentLabel::Positive);
//!     assert_eq!(report.scores.positive_score, 0.98);
//!     assert!(report.tone.joy > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! # Tone Example
//!
//! ```rust
//! use texta_core::score_tone;
//!
//! let tone = score_tone("I am so happy and excited today");
//! assert_eq!(tone.joy, 1.0);
//! assert_eq!(tone.anger, 0.0);
//! ```

pub mod analyzer;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod registry;
pub mod rule_based;
pub mod telemetry;
pub mod tone;
pub mod types;
pub mod version;

// Re-export main entry points at crate root
pub use analyzer::{MAX_BATCH_TEXTS, analyze, analyze_batch};
pub use error::{Result, TextaError};
pub use normalize::{normalize, normalize_as};
pub use registry::{ClassifierEntry, DEFAULT_CLASSIFIER};
pub use tone::score_tone;
pub use version::{PKG_VERSION, version_string};

// Re-export all types
pub use types::{
    ClassifierOutput, LabelScore, SchemaKind, SentimentLabel, SentimentReport, SentimentScores,
    ToneDimension, ToneScores,
};
