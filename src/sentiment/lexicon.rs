//! Sentiment lexicon
//!
//! Each entry carries a polarity in `[-1, 1]`, a subjectivity in `[0, 1]`
//! and an intensity. Adverbs flagged as modifiers scale the next known word
//! by their intensity ("very good" > "good").

use rustc_hash::{FxHashMap, FxHashSet};

/// Scores attached to a lexicon word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    /// Adverb that modifies the following word
    pub modifier: bool,
}

/// Word lookup used by [`super::analyzer::LexiconAnalyzer`]
pub trait SentimentLexicon {
    /// Scores for a lowercased word
    fn entry(&self, word: &str) -> Option<LexiconEntry>;

    /// Whether the word negates the next known word
    fn is_negation(&self, word: &str) -> bool;

    /// Polarity of an emoticon token
    fn emoticon(&self, token: &str) -> Option<f64>;
}

// (word, polarity, subjectivity)
const ADJECTIVES: &[(&str, f64, f64)] = &[
    // strongly positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("brilliant", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("flawless", 0.8, 0.9),
    ("gorgeous", 0.7, 0.8),
    ("great", 0.8, 0.75),
    ("impressive", 1.0, 1.0),
    ("impressed", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("lovely", 0.5, 0.75),
    ("outstanding", 0.5, 0.75),
    ("perfect", 1.0, 1.0),
    ("superb", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    // moderately positive
    ("affordable", 0.3, 0.6),
    ("better", 0.5, 0.5),
    ("bright", 0.7, 0.9),
    ("cheap", 0.4, 0.7),
    ("clean", 0.3667, 0.6667),
    ("clear", 0.1, 0.3833),
    ("comfortable", 0.4, 0.7),
    ("convenient", 0.35, 0.55),
    ("cool", 0.35, 0.65),
    ("crisp", 0.3, 0.6),
    ("customizable", 0.25, 0.5),
    ("decent", 0.1667, 0.6667),
    ("easy", 0.4333, 0.8333),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("fine", 0.4167, 0.5),
    ("free", 0.4, 0.8),
    ("full", 0.35, 0.55),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("happy", 0.8, 1.0),
    ("helpful", 0.4, 0.6),
    ("intuitive", 0.3, 0.7),
    ("large", 0.2143, 0.4286),
    ("nice", 0.6, 1.0),
    ("ok", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("own", 0.6, 1.0),
    ("pleased", 0.5, 1.0),
    ("quick", 0.3333, 0.5),
    ("reliable", 0.4, 0.6),
    ("responsive", 0.3, 0.5),
    ("right", 0.2857, 0.5357),
    ("satisfied", 0.5, 1.0),
    ("sharp", 0.1, 0.5),
    ("sleek", 0.4, 0.8),
    ("smart", 0.2143, 0.6429),
    ("smooth", 0.4, 0.7),
    ("solid", 0.0, 0.1),
    ("stable", 0.2, 0.4),
    ("strong", 0.4333, 0.7333),
    ("sturdy", 0.3, 0.5),
    ("useful", 0.3, 0.0),
    ("warm", 0.6, 0.6),
    ("worth", 0.3, 0.1),
    // neutral-ish, but subjective or frequent
    ("big", 0.0, 0.1),
    ("final", 0.0, 1.0),
    ("high", 0.16, 0.54),
    ("long", -0.05, 0.4),
    ("low", 0.0, 0.3),
    ("new", 0.1364, 0.4545),
    ("recent", 0.0, 0.25),
    ("short", 0.0, 0.3),
    ("simple", 0.0, 0.3571),
    // moderately negative
    ("average", -0.15, 0.3917),
    ("cluttered", -0.3, 0.6),
    ("concerning", -0.3, 0.5),
    ("confusing", -0.3, 0.4),
    ("dark", -0.15, 0.4),
    ("dim", -0.25, 0.4),
    ("expensive", -0.5, 0.7),
    ("hard", -0.2917, 0.5417),
    ("heavy", -0.2, 0.5),
    ("inconvenient", -0.5, 0.6),
    ("less", -0.1667, 0.0667),
    ("little", -0.1875, 0.5),
    ("mediocre", -0.3, 0.6),
    ("noisy", -0.1, 0.4),
    ("overpriced", -0.5, 0.7),
    ("poor", -0.4, 0.6),
    ("previous", -0.1667, 0.1667),
    ("slow", -0.3, 0.3833),
    ("small", -0.25, 0.4),
    ("smaller", -0.1, 0.3),
    ("steep", -0.2, 0.5),
    ("unhelpful", -0.5, 0.6),
    ("weak", -0.375, 0.625),
    ("worse", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
    // strongly negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.6667),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("buggy", -0.6, 0.7),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("frustrating", -0.4, 0.7),
    ("horrible", -1.0, 1.0),
    ("sad", -0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("unreliable", -0.5, 0.7),
    ("unusable", -0.7, 0.8),
    ("useless", -0.5, 0.2),
    ("worst", -1.0, 1.0),
    // verbs that carry sentiment on their own
    ("hate", -0.8, 0.9),
    ("love", 0.5, 0.6),
];

// (word, polarity, subjectivity, intensity)
const MODIFIERS: &[(&str, f64, f64, f64)] = &[
    ("absolutely", 0.2, 0.9, 1.4),
    ("definitely", 0.0, 0.5, 1.2),
    ("extremely", 0.0, 1.0, 1.6),
    ("highly", 0.16, 0.54, 1.3),
    ("incredibly", 0.9, 0.9, 1.5),
    ("pretty", 0.25, 1.0, 1.1),
    ("quite", 0.0, 0.0, 1.1),
    ("really", 0.2, 0.2, 1.4),
    ("slightly", 0.0, 0.5, 0.7),
    ("somewhat", 0.0, 0.3, 0.8),
    ("super", 0.3333, 0.6667, 1.3),
    ("too", 0.0, 0.0, 1.2),
    ("totally", 0.0, 0.75, 1.4),
    ("truly", 0.0, 0.0, 1.3),
    ("very", 0.2, 0.3, 1.3),
];

const NEGATIONS: &[&str] = &["no", "not", "n't", "n\u{2019}t", "never"];

const EMOTICONS: &[(&str, f64)] = &[
    (":)", 0.5),
    (":-)", 0.5),
    ("=)", 0.5),
    (":]", 0.5),
    (":d", 1.0),
    (":-d", 1.0),
    (";)", 0.25),
    (";-)", 0.25),
    (":p", 0.25),
    (":-p", 0.25),
    (":(", -0.75),
    (":-(", -0.75),
    ("=(", -0.75),
    (":[", -0.75),
    (":/", -0.25),
    (":-/", -0.25),
    (":|", 0.0),
];

/// English review lexicon compiled into the binary
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    entries: FxHashMap<&'static str, LexiconEntry>,
    negations: FxHashSet<&'static str>,
    emoticons: FxHashMap<&'static str, f64>,
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishLexicon {
    pub fn new() -> Self {
        let mut entries = FxHashMap::default();

        for &(word, polarity, subjectivity) in ADJECTIVES {
            entries.insert(
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity: 1.0,
                    modifier: false,
                },
            );
        }
        for &(word, polarity, subjectivity, intensity) in MODIFIERS {
            entries.insert(
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity,
                    modifier: true,
                },
            );
        }

        Self {
            entries,
            negations: NEGATIONS.iter().copied().collect(),
            emoticons: EMOTICONS.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SentimentLexicon for EnglishLexicon {
    fn entry(&self, word: &str) -> Option<LexiconEntry> {
        self.entries.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    fn emoticon(&self, token: &str) -> Option<f64> {
        self.emoticons.get(token.to_lowercase().as_str()).copied()
    }
}
