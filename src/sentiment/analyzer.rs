//! Lexicon-based sentiment analyzer
//!
//! Walks the token stream once, collecting one assessment per known word:
//!
//! - a modifier adverb ("very", "really") folds into the next known word and
//!   scales its scores by the adverb's intensity;
//! - a negation ("not", "n't", "never") before a known word makes the final
//!   polarity `-0.5 ×` the word's polarity, so "not good" is mildly bad and
//!   "not bad" mildly good; the negation survives one-letter words
//!   ("not a good");
//! - `!` boosts the previous assessment's polarity by 25%;
//! - emoticons add their own assessment.
//!
//! The result is the mean polarity and subjectivity over all assessments, or
//! zero for text without any known word.

use tracing::trace;

use super::lexicon::{EnglishLexicon, LexiconEntry, SentimentLexicon};
use super::SentimentAnalyzer;
use crate::nlp::tokenizer::tokenize;
use crate::types::Sentiment;

/// Polarity multiplier for an exclamation mark
const EXCLAMATION_BOOST: f64 = 1.25;
/// Polarity multiplier for a negated assessment
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl Assessment {
    fn from_entry(entry: LexiconEntry) -> Self {
        Self {
            polarity: entry.polarity,
            subjectivity: entry.subjectivity,
            intensity: entry.intensity,
            negated: false,
        }
    }

    fn final_polarity(&self) -> f64 {
        if self.negated {
            self.polarity * NEGATION_FACTOR
        } else {
            self.polarity
        }
    }
}

/// Sentiment analyzer over a [`SentimentLexicon`]
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyzer<L = EnglishLexicon> {
    lexicon: L,
}

impl LexiconAnalyzer<EnglishLexicon> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: SentimentLexicon> LexiconAnalyzer<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Self { lexicon }
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let mut out: Vec<Assessment> = Vec::new();
        // Previous known word was a modifier adverb
        let mut modifying = false;
        let mut negated = false;

        for token in tokenize(text) {
            let word = token.to_lowercase();

            if let Some(entry) = self.lexicon.entry(&word) {
                match out.last_mut() {
                    Some(last) if modifying => {
                        last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                        last.subjectivity =
                            (entry.subjectivity * last.intensity).clamp(-1.0, 1.0);
                        last.intensity = entry.intensity;
                    }
                    _ => out.push(Assessment::from_entry(entry)),
                }
                if negated {
                    if let Some(last) = out.last_mut() {
                        last.intensity = 1.0 / last.intensity;
                        last.negated = true;
                    }
                }
                modifying = entry.modifier;
                negated = self.lexicon.is_negation(&word);
                continue;
            }

            if self.lexicon.is_negation(&word) {
                negated = true;
            } else if negated && word.trim_matches('\'').chars().count() > 1 {
                negated = false;
            }

            if negated && modifying {
                // "really not good": the negation attaches to the modifier
                if let Some(last) = out.last_mut() {
                    last.negated = true;
                }
                negated = false;
            } else if modifying && word.chars().count() > 2 {
                modifying = false;
            }

            if word == "!" {
                if let Some(last) = out.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_BOOST).clamp(-1.0, 1.0);
                }
            }

            if let Some(polarity) = self.lexicon.emoticon(&word) {
                out.push(Assessment {
                    polarity,
                    subjectivity: 1.0,
                    intensity: 1.0,
                    negated: false,
                });
            }
        }

        out
    }
}

impl<L: SentimentLexicon> SentimentAnalyzer for LexiconAnalyzer<L> {
    fn analyze(&self, text: &str) -> Sentiment {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return Sentiment::default();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(Assessment::final_polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;
        trace!(assessments = assessments.len(), polarity, subjectivity, "scored text");

        Sentiment::new(polarity, subjectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;

    fn polarity(text: &str) -> f64 {
        LexiconAnalyzer::new().analyze(text).polarity
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_word() {
        assert!(approx(polarity("The screen is good"), 0.7));
        assert!(approx(polarity("The screen is bad"), -0.7));
    }

    #[test]
    fn test_unknown_text_is_neutral() {
        let sentiment = LexiconAnalyzer::new().analyze("The phone has a screen");

        assert_eq!(sentiment, Sentiment::default());
        assert_eq!(sentiment.label(), SentimentLabel::Neutral);
        assert_eq!(LexiconAnalyzer::new().analyze(""), Sentiment::default());
    }

    #[test]
    fn test_modifier_scales_next_word() {
        // very (x1.3) good (0.7), one assessment
        assert!(approx(polarity("very good"), 0.91));
        // intensity is clamped
        assert!(approx(polarity("extremely impressive"), 1.0));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        assert!(approx(polarity("not good"), -0.35));
        assert!(approx(polarity("not bad"), 0.35));
        assert!(approx(polarity("it doesn't look good"), 0.7));
        assert!(approx(polarity("it isn't good"), -0.35));
    }

    #[test]
    fn test_negation_survives_short_words() {
        assert!(approx(polarity("not a good phone"), -0.35));
    }

    #[test]
    fn test_exclamation_boost() {
        assert!(approx(polarity("good!"), 0.875));
        assert!(approx(polarity("perfect!"), 1.0));
    }

    #[test]
    fn test_average_over_assessments() {
        // (0.8 + -0.7) / 2
        assert!(approx(polarity("great camera, bad battery"), 0.05));
    }

    #[test]
    fn test_emoticons_count() {
        assert!(approx(polarity("battery died :("), -0.75));
    }

    #[test]
    fn test_polarity_stays_in_range() {
        let sentiment =
            LexiconAnalyzer::new().analyze("really really really perfect!!! absolutely superb!!!");

        assert!((-1.0..=1.0).contains(&sentiment.polarity));
        assert!((0.0..=1.0).contains(&sentiment.subjectivity));
    }
}
