//! The fixed review batch and its printed report.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregator::{ReviewAggregator, ReviewDigest};
use crate::config::DigestConfig;
use crate::errors::Result;
use crate::nlp::corpus::Corpus;
use crate::sentiment::SentimentAnalyzer;
use crate::summarizer::SentenceRanker;

/// Default sentence budget for the batch summary, header included
pub const SUMMARY_SENTENCES: usize = 4;

pub const SAMPLE_REVIEWS: [&str; 20] = [
    "This phone is amazing! The camera quality is outstanding, and the battery life is impressive.",
    "I'm disappointed with the build quality. It feels cheap compared to previous models.",
    "The new features are great, but the learning curve is steep. It took me a while to get used to it.",
    "Absolutely love this phone! It's fast, sleek, and the display is gorgeous.",
    "The price is too high for what you get. There are better options out there for less money.",
    "I've had issues with the touchscreen responsiveness. Sometimes it lags or doesn't register my taps.",
    "The camera's night mode is a game-changer. I can finally take great photos in low light!",
    "Battery life is decent, but not as long-lasting as advertised. Heavy users might struggle.",
    "The water resistance feature saved my phone during a recent accident. Definitely a plus!",
    "I'm not a fan of the new operating system update. It feels cluttered and less intuitive.",
    "The fast charging feature is fantastic. I can get a full charge in no time.",
    "The phone tends to overheat during gaming sessions, which is concerning.",
    "Customer support was unhelpful when I had issues. It took weeks to resolve a simple problem.",
    "The facial recognition is lightning fast and works even in dim lighting.",
    "I wish it had a headphone jack. Having to use an adapter is inconvenient.",
    "The amount of bloatware pre-installed on the phone is frustrating.",
    "Call quality is crystal clear, even in noisy environments.",
    "The new AI assistant is hit or miss. Sometimes it's helpful, other times it's just annoying.",
    "I love how customizable the interface is. I can make the phone truly my own.",
    "The phone is a bit too large for comfortable one-handed use. A smaller option would be nice.",
];

/// What the batch run prints, one line per field
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub polarities: Vec<f64>,
    pub average_polarity: f64,
    pub summary: String,
}

impl From<ReviewDigest> for BatchReport {
    fn from(digest: ReviewDigest) -> Self {
        Self {
            polarities: digest.polarities,
            average_polarity: digest.average_polarity,
            summary: digest.summary,
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.polarities)?;
        writeln!(f, "Average review polarity: {:.2}", self.average_polarity)?;
        write!(f, "Summary of the reviews: {}", self.summary)
    }
}

/// Score and summarize `reviews`.
pub fn run<A, R, S>(
    aggregator: &ReviewAggregator<'_, A, R>,
    reviews: &[S],
    sentences: usize,
) -> Result<BatchReport>
where
    A: SentimentAnalyzer,
    R: SentenceRanker,
    S: AsRef<str>,
{
    info!(reviews = reviews.len(), sentences, "running review batch");
    let digest = aggregator.digest(reviews, sentences)?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&digest) {
            Ok(json) => debug!(digest = %json, "batch digest"),
            Err(e) => debug!(error = %e, "digest not serializable"),
        }
    }

    Ok(digest.into())
}

/// Run the sample batch with the aggregator and sentence budget of `config`.
pub fn run_configured(corpus: &Corpus, config: &DigestConfig) -> Result<BatchReport> {
    let aggregator = ReviewAggregator::from_config(corpus, config)?;
    run(&aggregator, &SAMPLE_REVIEWS, config.sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme_words(summary: &str) -> Vec<&str> {
        summary
            .split("Common themes include: ")
            .nth(1)
            .and_then(|rest| rest.split(". ").next())
            .unwrap()
            .split(", ")
            .collect()
    }

    #[test]
    fn test_sample_batch() {
        let corpus = Corpus::bundled();
        let aggregator = ReviewAggregator::new(&corpus);
        let report = run(&aggregator, &SAMPLE_REVIEWS, SUMMARY_SENTENCES).unwrap();

        assert_eq!(report.polarities.len(), 20);
        assert!(report
            .polarities
            .iter()
            .all(|p| (-1.0..=1.0).contains(p)));
        assert!((-1.0..=1.0).contains(&report.average_polarity));
        assert_eq!(
            theme_words(&report.summary),
            vec!["phone", "quality", "fast", "this", "camera"]
        );
    }

    #[test]
    fn test_configured_sentence_budget_is_used() {
        let corpus = Corpus::bundled();
        let config = DigestConfig::from_json_str(r#"{ "sentences": 2 }"#).unwrap();
        let report = run_configured(&corpus, &config).unwrap();

        let aggregator = ReviewAggregator::new(&corpus);
        assert_eq!(
            report.summary,
            aggregator.summarize_reviews(&SAMPLE_REVIEWS, 2).unwrap()
        );
        let default_report = run_configured(&corpus, &DigestConfig::default()).unwrap();
        assert!(default_report.summary.len() > report.summary.len());
        assert_eq!(
            default_report.summary,
            aggregator
                .summarize_reviews(&SAMPLE_REVIEWS, SUMMARY_SENTENCES)
                .unwrap()
        );
    }

    #[test]
    fn test_configured_zero_budget_fails() {
        let corpus = Corpus::bundled();
        let config = DigestConfig {
            sentences: 0,
            ..DigestConfig::default()
        };

        assert!(run_configured(&corpus, &config).is_err());
    }

    #[test]
    fn test_first_reviews_lean_as_expected() {
        let corpus = Corpus::bundled();
        let aggregator = ReviewAggregator::new(&corpus);
        let polarities = aggregator.review_polarities(&SAMPLE_REVIEWS);

        // "amazing ... outstanding ... impressive"
        assert!(polarities[0] > 0.0);
        // "disappointed ... cheap"
        assert!(polarities[1] < 0.0);
    }

    #[test]
    fn test_output_lines() {
        let report = BatchReport {
            polarities: vec![0.8, -0.375, 0.0],
            average_polarity: 0.141_666,
            summary: "The overall sentiment of the reviews is positive. ".to_string(),
        };
        let printed = report.to_string();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[0.8, -0.375, 0.0]");
        assert_eq!(lines[1], "Average review polarity: 0.14");
        assert_eq!(
            lines[2],
            "Summary of the reviews: The overall sentiment of the reviews is positive. "
        );
    }

    #[test]
    fn test_stable_across_runs() {
        let corpus = Corpus::bundled();
        let aggregator = ReviewAggregator::new(&corpus);

        let first = run(&aggregator, &SAMPLE_REVIEWS, SUMMARY_SENTENCES).unwrap();
        let second = run(&aggregator, &SAMPLE_REVIEWS, SUMMARY_SENTENCES).unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }
}
