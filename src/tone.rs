//! Rule-based tone scorer.
//!
//! Scores eight affect/register dimensions from fixed keyword lexicons.
//! No model inference: the same text always produces the same scores, so
//! results can be compared across runs and versions.
//!
//! Per dimension, two passes run over the lowercased text:
//!
//! 1. **Exact pass** — every whitespace token that equals a lexicon entry
//!    counts once, repeats included. Tokens are not stripped of
//!    punctuation, so "happy!" does not exact-match "happy".
//! 2. **Substring pass** — every lexicon entry contained anywhere in the
//!    text counts once. This is what lets multi-word entries ("in
//!    addition") and punctuated or embedded words ("happy!", "unhappy")
//!    score at all.
//!
//! A clean standalone keyword hits both passes and counts twice. The
//! combined count maps through a fixed step function onto
//! `{0.0, 0.3, 0.6, 0.8, 1.0}`.

use crate::lexicon::Lexicon;
use crate::types::{ToneDimension, ToneScores};

/// Score all eight tone dimensions for one text.
///
/// Whitespace-only text short-circuits to all zeros; the substring pass
/// never runs, so nothing can match an empty token stream.
pub fn score_tone(text: &str) -> ToneScores {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return ToneScores::default();
    }

    let mut scores = ToneScores::default();
    for dimension in ToneDimension::ALL {
        scores.set(dimension, dimension_score(&lowered, &tokens, dimension.lexicon()));
    }
    scores
}

/// Combined exact-token and substring match count for one lexicon,
/// quantized onto the fixed scale.
fn dimension_score(text: &str, tokens: &[&str], lexicon: &Lexicon) -> f32 {
    let exact = tokens.iter().filter(|token| lexicon.contains(token)).count();
    let phrases = lexicon
        .entries()
        .iter()
        .filter(|entry| text.contains(**entry))
        .count();
    quantize(exact + phrases)
}

/// Step function from match count to score.
fn quantize(matches: usize) -> f32 {
    match matches {
        0 => 0.0,
        1 => 0.3,
        2 => 0.6,
        3 => 0.8,
        _ => 1.0,
    }
}
