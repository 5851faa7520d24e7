//! Tests for the rule-based fallback classifier.

use texta_core::rule_based::{RULE_BASED_ID, classify};
use texta_core::{SentimentLabel, SentimentScores};

#[test]
fn positive_text_classifies_positive() {
    let scores = classify("good great excellent");
    assert_eq!(scores.sentiment, SentimentLabel::Positive);
    assert_eq!(scores.confidence, 1.0);
    assert_eq!(scores.positive_score, 1.0);
    assert_eq!(scores.negative_score, 0.0);
    assert_eq!(scores.neutral_score, 0.0);
}

#[test]
fn negative_text_classifies_negative() {
    let scores = classify("this is bad and terrible");
    assert_eq!(scores.sentiment, SentimentLabel::Negative);
    assert_eq!(scores.confidence, 1.0);
    assert_eq!(scores.negative_score, 1.0);
}

#[test]
fn mixed_text_keeps_the_losing_share() {
    // Two positive hits, one negative: confidence 2/3 and the loser slot
    // keeps the remaining third. Deliberately not one-hot.
    let scores = classify("good good bad");
    assert_eq!(scores.sentiment, SentimentLabel::Positive);
    assert!((scores.confidence - 2.0 / 3.0).abs() < 1e-6);
    assert!((scores.positive_score - 2.0 / 3.0).abs() < 1e-6);
    assert!((scores.negative_score - 1.0 / 3.0).abs() < 1e-6);
    assert_eq!(scores.neutral_score, 0.0);
}

#[test]
fn tie_counts_as_negative() {
    let scores = classify("good bad");
    assert_eq!(scores.sentiment, SentimentLabel::Negative);
    assert_eq!(scores.confidence, 0.5);
    assert_eq!(scores.positive_score, 0.5);
    assert_eq!(scores.negative_score, 0.5);
}

#[test]
fn no_hits_is_the_neutral_default() {
    let scores = classify("the sky is blue today");
    assert_eq!(scores, SentimentScores::unknown());
}

#[test]
fn matching_is_case_insensitive() {
    let scores = classify("GOOD Great");
    assert_eq!(scores.sentiment, SentimentLabel::Positive);
}

#[test]
fn punctuation_blocks_a_hit() {
    // Exact token membership only; "good!" is not a lexicon word. This is
    // stricter than the tone scorer, which also runs a substring pass.
    let scores = classify("good!");
    assert_eq!(scores, SentimentScores::unknown());
}

#[test]
fn blank_text_is_neutral() {
    assert_eq!(classify(""), SentimentScores::unknown());
    assert_eq!(classify("   "), SentimentScores::unknown());
}

#[test]
fn reported_id_is_stable() {
    assert_eq!(RULE_BASED_ID, "rule-based");
}
