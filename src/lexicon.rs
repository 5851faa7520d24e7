//! Fixed keyword lexicons for tone scoring.
//!
//! Each tone dimension is backed by a small curated set of lowercase
//! entries. Single-word entries can match both the exact-token pass and
//! the substring pass of the scorer; multi-word entries (e.g. "in
//! addition") can only match as substrings. The sets are compiled in and
//! never change at runtime, which is what keeps tone scoring
//! deterministic across processes and versions.

/// An immutable set of lowercase words and phrases for one scoring
/// dimension.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    name: &'static str,
    entries: &'static [&'static str],
}

impl Lexicon {
    /// Wrap a compiled-in entry list.
    pub const fn new(name: &'static str, entries: &'static [&'static str]) -> Self {
        Self { name, entries }
    }

    /// Dimension name this lexicon backs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries, lowercase, in definition order.
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Exact membership test. `word` must already be lowercased; entries
    /// are stored lowercase and no folding happens here.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| *entry == word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Joy affect keywords.
pub static JOY: Lexicon = Lexicon::new(
    "joy",
    &[
        "happy",
        "joy",
        "excited",
        "delighted",
        "pleased",
        "thrilled",
        "ecstatic",
        "elated",
        "cheerful",
        "jubilant",
        "wonderful",
        "fantastic",
        "amazing",
        "great",
        "good",
        "excellent",
        "superb",
        "marvelous",
        "terrific",
        "fabulous",
        "incredible",
        "love",
        "like",
        "enjoy",
        "fun",
        "laugh",
        "smile",
        "bright",
        "sunny",
        "positive",
        "optimistic",
        "hopeful",
        "inspired",
    ],
);

/// Sadness affect keywords.
pub static SADNESS: Lexicon = Lexicon::new(
    "sadness",
    &[
        "sad",
        "depressed",
        "melancholy",
        "sorrowful",
        "grief",
        "despair",
        "hopeless",
        "miserable",
        "gloomy",
        "unhappy",
        "disappointed",
        "heartbroken",
        "devastated",
        "crushed",
        "defeated",
        "lonely",
        "isolated",
        "abandoned",
        "rejected",
        "hurt",
        "pain",
        "suffering",
        "tears",
        "crying",
        "weep",
        "mourn",
        "grieve",
        "terrible",
        "awful",
        "dreadful",
        "horrible",
    ],
);

/// Anger affect keywords.
pub static ANGER: Lexicon = Lexicon::new(
    "anger",
    &[
        "angry",
        "furious",
        "enraged",
        "irritated",
        "annoyed",
        "frustrated",
        "outraged",
        "livid",
        "fuming",
        "mad",
        "rage",
        "wrath",
        "hostile",
        "aggressive",
        "violent",
        "hate",
        "despise",
        "loathe",
        "abhor",
        "detest",
        "resent",
        "bitter",
        "fierce",
        "savage",
        "brutal",
        "terrible",
        "awful",
        "horrible",
        "dreadful",
    ],
);

/// Fear affect keywords.
pub static FEAR: Lexicon = Lexicon::new(
    "fear",
    &[
        "afraid",
        "scared",
        "terrified",
        "anxious",
        "worried",
        "nervous",
        "fearful",
        "panicked",
        "horrified",
        "frightened",
        "alarmed",
        "startled",
        "shocked",
        "dread",
        "terror",
        "panic",
        "hysteria",
        "paranoia",
        "suspicious",
        "cautious",
        "hesitant",
        "timid",
        "shy",
        "cowardly",
        "weak",
        "vulnerable",
    ],
);

/// Formal register keywords. Includes multi-word connectives that only
/// the substring pass can match.
pub static FORMAL: Lexicon = Lexicon::new(
    "formal",
    &[
        "therefore",
        "consequently",
        "furthermore",
        "moreover",
        "thus",
        "hence",
        "accordingly",
        "subsequently",
        "nevertheless",
        "nonetheless",
        "however",
        "whereas",
        "although",
        "despite",
        "notwithstanding",
        "in addition",
        "further",
        "additionally",
        "as a result",
        "for this reason",
        "in conclusion",
        "to summarize",
    ],
);

/// Casual register keywords.
pub static CASUAL: Lexicon = Lexicon::new(
    "casual",
    &[
        "hey",
        "cool",
        "awesome",
        "great",
        "nice",
        "okay",
        "yeah",
        "yep",
        "nope",
        "wow",
        "omg",
        "lol",
        "haha",
        "fun",
        "amazing",
        "incredible",
        "fantastic",
        "super",
        "rad",
        "sweet",
        "neat",
        "wonderful",
        "lovely",
        "beautiful",
        "gorgeous",
        "stunning",
        "breathtaking",
        "mind-blowing",
        "epic",
        "legendary",
    ],
);

/// Emotional register keywords.
pub static EMOTIONAL: Lexicon = Lexicon::new(
    "emotional",
    &[
        "love",
        "hate",
        "feel",
        "emotion",
        "passion",
        "heart",
        "soul",
        "crying",
        "laughing",
        "happy",
        "sad",
        "angry",
        "scared",
        "excited",
        "worried",
        "nervous",
        "confident",
        "proud",
        "ashamed",
        "guilty",
        "jealous",
        "envious",
        "grateful",
        "thankful",
        "blessed",
        "fortunate",
        "lucky",
        "unlucky",
        "miserable",
        "ecstatic",
        "thrilled",
        "devastated",
        "heartbroken",
    ],
);

/// Objective register keywords.
pub static OBJECTIVE: Lexicon = Lexicon::new(
    "objective",
    &[
        "data",
        "evidence",
        "research",
        "study",
        "analysis",
        "statistics",
        "facts",
        "objective",
        "empirical",
        "scientific",
        "measured",
        "quantified",
        "verified",
        "confirmed",
        "validated",
        "proven",
        "demonstrated",
        "established",
        "documented",
        "recorded",
        "observed",
        "witnessed",
        "reported",
        "stated",
        "declared",
        "announced",
        "published",
        "released",
    ],
);
