//! Tests for the closed classifier table.

use texta_core::{DEFAULT_CLASSIFIER, SchemaKind, registry};

#[test]
fn default_classifier_is_a_binary_head() {
    assert_eq!(
        registry::schema_for(DEFAULT_CLASSIFIER),
        Some(SchemaKind::Binary)
    );
}

#[test]
fn every_table_entry_resolves_to_itself() {
    for entry in registry::supported() {
        assert_eq!(registry::schema_for(entry.id), Some(entry.schema));
        assert!(registry::is_supported(entry.id));
    }
}

#[test]
fn table_ids_are_unique() {
    let entries = registry::supported();
    for (i, entry) in entries.iter().enumerate() {
        for other in &entries[i + 1..] {
            assert_ne!(entry.id, other.id, "duplicate id {}", entry.id);
        }
    }
}

#[test]
fn expected_schemas_for_known_classifiers() {
    let cases = [
        (
            "cardiffnlp/twitter-roberta-base-sentiment-latest",
            SchemaKind::ThreeClass,
        ),
        (
            "finiteautomata/bertweet-base-sentiment-analysis",
            SchemaKind::ThreeClass,
        ),
        ("ProsusAI/finbert", SchemaKind::ThreeClass),
        (
            "ahmedrachid/FinancialBERT-Sentiment-Analysis",
            SchemaKind::ThreeClass,
        ),
        (
            "nlptown/bert-base-multilingual-uncased-sentiment",
            SchemaKind::StarRating,
        ),
        ("facebook/bart-large-mnli", SchemaKind::ZeroShot),
        ("microsoft/DialoGPT-medium", SchemaKind::Generative),
    ];
    for (id, expected) in cases {
        assert_eq!(registry::schema_for(id), Some(expected), "id {id}");
    }
}

#[test]
fn every_schema_kind_has_a_classifier() {
    let kinds = [
        SchemaKind::Binary,
        SchemaKind::ThreeClass,
        SchemaKind::StarRating,
        SchemaKind::ZeroShot,
        SchemaKind::Generative,
    ];
    for kind in kinds {
        assert!(
            registry::supported().iter().any(|entry| entry.schema == kind),
            "no classifier with schema {kind}"
        );
    }
}

#[test]
fn unknown_ids_are_rejected() {
    for id in ["", "distilbert", "openai/gpt-4", "nlptown/some-other-model"] {
        assert!(!registry::is_supported(id), "id {id:?}");
    }
}
