//! Affect and tone score types.

use serde::{Deserialize, Serialize};

use crate::lexicon::{self, Lexicon};

/// One dimension scored by the rule-based tone scorer.
///
/// Four affect dimensions (joy, sadness, anger, fear) and four register
/// dimensions (formal, casual, emotional, objective). Dimensions are
/// independent: a text can score high on several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneDimension {
    Joy,
    Sadness,
    Anger,
    Fear,
    Formal,
    Casual,
    Emotional,
    Objective,
}

impl ToneDimension {
    /// All dimensions, in canonical order.
    pub const ALL: [ToneDimension; 8] = [
        ToneDimension::Joy,
        ToneDimension::Sadness,
        ToneDimension::Anger,
        ToneDimension::Fear,
        ToneDimension::Formal,
        ToneDimension::Casual,
        ToneDimension::Emotional,
        ToneDimension::Objective,
    ];

    /// Lowercase dimension name, matching the serialized field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneDimension::Joy => "joy",
            ToneDimension::Sadness => "sadness",
            ToneDimension::Anger => "anger",
            ToneDimension::Fear => "fear",
            ToneDimension::Formal => "formal",
            ToneDimension::Casual => "casual",
            ToneDimension::Emotional => "emotional",
            ToneDimension::Objective => "objective",
        }
    }

    /// The fixed keyword lexicon backing this dimension.
    pub fn lexicon(&self) -> &'static Lexicon {
        match self {
            ToneDimension::Joy => &lexicon::JOY,
            ToneDimension::Sadness => &lexicon::SADNESS,
            ToneDimension::Anger => &lexicon::ANGER,
            ToneDimension::Fear => &lexicon::FEAR,
            ToneDimension::Formal => &lexicon::FORMAL,
            ToneDimension::Casual => &lexicon::CASUAL,
            ToneDimension::Emotional => &lexicon::EMOTIONAL,
            ToneDimension::Objective => &lexicon::OBJECTIVE,
        }
    }
}

impl std::fmt::Display for ToneDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone scores for one text: eight independent values on a fixed
/// `{0.0, 0.3, 0.6, 0.8, 1.0}` scale.
///
/// `Default` is all zeros, the score of an empty text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToneScores {
    /// Joy affect score.
    pub joy: f32,
    /// Sadness affect score.
    pub sadness: f32,
    /// Anger affect score.
    pub anger: f32,
    /// Fear affect score.
    pub fear: f32,
    /// Formal register score.
    pub formal: f32,
    /// Casual register score.
    pub casual: f32,
    /// Emotional register score.
    pub emotional: f32,
    /// Objective register score.
    pub objective: f32,
}

impl ToneScores {
    /// Score for a single dimension.
    pub fn get(&self, dimension: ToneDimension) -> f32 {
        match dimension {
            ToneDimension::Joy => self.joy,
            ToneDimension::Sadness => self.sadness,
            ToneDimension::Anger => self.anger,
            ToneDimension::Fear => self.fear,
            ToneDimension::Formal => self.formal,
            ToneDimension::Casual => self.casual,
            ToneDimension::Emotional => self.emotional,
            ToneDimension::Objective => self.objective,
        }
    }

    /// Set the score for a single dimension.
    pub fn set(&mut self, dimension: ToneDimension, score: f32) {
        match dimension {
            ToneDimension::Joy => self.joy = score,
            ToneDimension::Sadness => self.sadness = score,
            ToneDimension::Anger => self.anger = score,
            ToneDimension::Fear => self.fear = score,
            ToneDimension::Formal => self.formal = score,
            ToneDimension::Casual => self.casual = score,
            ToneDimension::Emotional => self.emotional = score,
            ToneDimension::Objective => self.objective = score,
        }
    }
}
