//! Sentiment scoring
//!
//! [`SentimentAnalyzer`] is the seam the aggregator scores text through;
//! [`LexiconAnalyzer`] is the built-in implementation.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::LexiconAnalyzer;
pub use lexicon::{EnglishLexicon, LexiconEntry, SentimentLexicon};

use crate::errors::{DigestError, Result};
use crate::types::Sentiment;

/// Scores a span of text.
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment;

    /// Polarity of each text, in input order.
    fn polarities<S: AsRef<str>>(&self, texts: &[S]) -> Vec<f64>
    where
        Self: Sized,
    {
        texts
            .iter()
            .map(|t| self.analyze(t.as_ref()).polarity)
            .collect()
    }
}

/// Arithmetic mean of `scores`; fails on an empty slice.
pub fn mean_polarity(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(DigestError::EmptyInput("polarity scores"));
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarities_keep_input_order() {
        let analyzer = LexiconAnalyzer::new();
        let texts = ["bad", "plain", "good"];
        let scores = analyzer.polarities(&texts);

        assert_eq!(scores.len(), 3);
        assert!(scores[0] < 0.0);
        assert_eq!(scores[1], 0.0);
        assert!(scores[2] > 0.0);
    }

    #[test]
    fn test_mean_polarity() {
        let mean = mean_polarity(&[0.5, -0.25, 0.0, 0.75]).unwrap();
        assert!((mean - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_mean_polarity_empty() {
        let err = mean_polarity(&[]).unwrap_err();
        assert!(matches!(err, DigestError::EmptyInput(_)));
    }
}
