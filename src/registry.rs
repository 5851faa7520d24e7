//! Closed catalog of supported classifiers.
//!
//! Maps every supported classifier id to the output schema it emits. The
//! table is compiled in and immutable: adding a classifier is a code
//! change, not a runtime event, so every process answers schema questions
//! identically. Which models are actually resident in an inference layer
//! is deliberately not tracked here; that is serving-side state.

use crate::types::SchemaKind;

/// One supported classifier: its id and the output schema it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierEntry {
    /// Classifier id as callers pass it (HuggingFace repo id style).
    pub id: &'static str,
    /// Output schema this classifier emits.
    pub schema: SchemaKind,
}

/// Classifier used when the caller does not specify one.
pub const DEFAULT_CLASSIFIER: &str = "distilbert-base-uncased-finetuned-sst-2-english";

const CLASSIFIERS: &[ClassifierEntry] = &[
    ClassifierEntry {
        id: "distilbert-base-uncased-finetuned-sst-2-english",
        schema: SchemaKind::Binary,
    },
    ClassifierEntry {
        id: "cardiffnlp/twitter-roberta-base-sentiment-latest",
        schema: SchemaKind::ThreeClass,
    },
    ClassifierEntry {
        id: "finiteautomata/bertweet-base-sentiment-analysis",
        schema: SchemaKind::ThreeClass,
    },
    ClassifierEntry {
        id: "ProsusAI/finbert",
        schema: SchemaKind::ThreeClass,
    },
    ClassifierEntry {
        id: "ahmedrachid/FinancialBERT-Sentiment-Analysis",
        schema: SchemaKind::ThreeClass,
    },
    ClassifierEntry {
        id: "nlptown/bert-base-multilingual-uncased-sentiment",
        schema: SchemaKind::StarRating,
    },
    ClassifierEntry {
        id: "facebook/bart-large-mnli",
        schema: SchemaKind::ZeroShot,
    },
    ClassifierEntry {
        id: "microsoft/DialoGPT-medium",
        schema: SchemaKind::Generative,
    },
];

/// Expected output schema for a classifier id, or `None` if the id is not
/// in the table. Ids are matched exactly (case-sensitive).
pub fn schema_for(model: &str) -> Option<SchemaKind> {
    CLASSIFIERS
        .iter()
        .find(|entry| entry.id == model)
        .map(|entry| entry.schema)
}

/// Whether a classifier id is in the supported table.
pub fn is_supported(model: &str) -> bool {
    schema_for(model).is_some()
}

/// All supported classifiers, in table order.
pub fn supported() -> &'static [ClassifierEntry] {
    CLASSIFIERS
}
