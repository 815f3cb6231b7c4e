//! Core value types flowing between the digest stages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment of a span of text as returned by a [`crate::sentiment::SentimentAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    /// Aggregate polarity in `[-1.0, 1.0]`
    pub polarity: f64,
    /// Aggregate subjectivity in `[0.0, 1.0]`
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Three-way classification of the polarity.
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_polarity(self.polarity)
    }
}

/// Three-way partition of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// `Positive` iff `polarity > 0`, `Negative` iff `< 0`, otherwise `Neutral`.
    ///
    /// Both `0.0` and `-0.0` classify as neutral. NaN is neither greater nor
    /// less than zero and therefore also lands on neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Self::Positive
        } else if polarity < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence of a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Verbatim sentence text (trimmed)
    pub text: String,
    /// Position among the document's body sentences
    pub index: usize,
    /// Word tokens, original casing
    pub words: Vec<String>,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, words: Vec<String>) -> Self {
        Self {
            text: text.into(),
            index,
            words,
        }
    }
}
