//! Review aggregation
//!
//! Joins a batch of reviews, classifies the overall sentiment, lists the most
//! common words as themes, and appends an LSA extract:
//!
//! ```text
//! The overall sentiment of the reviews is positive. Common themes include: phone, camera. <extract>
//! ```

use serde::Serialize;
use tracing::debug;

use crate::config::{DigestConfig, ThemeConfig};
use crate::errors::{DigestError, Result};
use crate::nlp::corpus::Corpus;
use crate::nlp::frequency::{WordCount, WordFrequency};
use crate::nlp::stopwords::StopwordFilter;
use crate::sentiment::{mean_polarity, LexiconAnalyzer, SentimentAnalyzer};
use crate::summarizer::{ExtractiveSummarizer, LsaRanker, SentenceRanker};
use crate::types::{Sentiment, SentimentLabel};

/// Everything computed for one batch of reviews
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDigest {
    /// Polarity of each review, in input order
    pub polarities: Vec<f64>,
    /// Mean of `polarities`
    pub average_polarity: f64,
    /// Sentiment of all reviews read as one text
    pub sentiment: Sentiment,
    pub label: SentimentLabel,
    pub themes: Vec<WordCount>,
    /// Extracted sentences, without the header
    pub extract: String,
    /// Header followed by the extract
    pub summary: String,
}

/// Sentiment, themes and an extractive summary over a batch of reviews
pub struct ReviewAggregator<'c, A = LexiconAnalyzer, R = LsaRanker> {
    analyzer: A,
    summarizer: ExtractiveSummarizer<'c, R>,
    themes: ThemeConfig,
    theme_stopwords: StopwordFilter,
}

impl<'c> ReviewAggregator<'c> {
    /// Default analyzer, default LSA ranker, five themes of four or more
    /// characters.
    pub fn new(corpus: &'c Corpus) -> Self {
        Self {
            analyzer: LexiconAnalyzer::new(),
            summarizer: ExtractiveSummarizer::new(corpus),
            themes: ThemeConfig::default(),
            theme_stopwords: StopwordFilter::empty(),
        }
    }

    pub fn from_config(corpus: &'c Corpus, config: &DigestConfig) -> Result<Self> {
        let ranker = LsaRanker::from_config(&config.summarizer)?;
        Self::with_parts(corpus, LexiconAnalyzer::new(), ranker, config.themes.clone())
    }
}

impl<'c, A: SentimentAnalyzer, R: SentenceRanker> ReviewAggregator<'c, A, R> {
    pub fn with_parts(
        corpus: &'c Corpus,
        analyzer: A,
        ranker: R,
        themes: ThemeConfig,
    ) -> Result<Self> {
        let theme_stopwords = if themes.exclude_stop_words {
            StopwordFilter::for_language(&themes.stop_words_language).ok_or_else(|| {
                DigestError::InvalidConfig(format!(
                    "no stopword list for language {:?}",
                    themes.stop_words_language
                ))
            })?
        } else {
            StopwordFilter::empty()
        };

        Ok(Self {
            analyzer,
            summarizer: ExtractiveSummarizer::with_ranker(corpus, ranker),
            themes,
            theme_stopwords,
        })
    }

    pub fn summarizer(&self) -> &ExtractiveSummarizer<'c, R> {
        &self.summarizer
    }

    /// Polarity of each review, in input order
    pub fn review_polarities<S: AsRef<str>>(&self, reviews: &[S]) -> Vec<f64> {
        self.analyzer.polarities(reviews)
    }

    /// LSA extract of `text`; see [`ExtractiveSummarizer::summarize_text`].
    pub fn summarize_text(&self, text: &str, sentences_count: usize) -> Result<String> {
        self.summarizer.summarize_text(text, sentences_count)
    }

    /// One-paragraph report over `reviews`.
    ///
    /// `sentences` counts the header as one sentence, so `sentences - 1`
    /// sentences are extracted. Fails with [`DigestError::EmptyInput`] for an
    /// empty batch and [`DigestError::InvalidArgument`] for `sentences == 0`.
    pub fn summarize_reviews<S: AsRef<str>>(&self, reviews: &[S], sentences: usize) -> Result<String> {
        Ok(self.digest(reviews, sentences)?.summary)
    }

    pub fn digest<S: AsRef<str>>(&self, reviews: &[S], sentences: usize) -> Result<ReviewDigest> {
        trace_stage!("aggregate");

        if reviews.is_empty() {
            return Err(DigestError::EmptyInput("review list"));
        }
        if sentences == 0 {
            return Err(DigestError::InvalidArgument(
                "sentences must be at least 1; the header takes one".to_string(),
            ));
        }

        let polarities = self.review_polarities(reviews);
        let average_polarity = mean_polarity(&polarities)?;

        let combined = reviews
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");

        let sentiment = self.analyzer.analyze(&combined);
        let label = sentiment.label();

        let themes = WordFrequency::from_text(
            &combined,
            self.themes.min_word_chars,
            &self.theme_stopwords,
        )
        .most_common(self.themes.top_n);

        let extract = self.summarizer.summarize_text(&combined, sentences - 1)?;

        let theme_list = themes
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let summary = format!(
            "The overall sentiment of the reviews is {label}. \
             Common themes include: {theme_list}. {extract}"
        );

        debug!(
            reviews = reviews.len(),
            polarity = sentiment.polarity,
            %label,
            themes = themes.len(),
            "aggregated reviews"
        );

        Ok(ReviewDigest {
            polarities,
            average_polarity,
            sentiment,
            label,
            themes,
            extract,
            summary,
        })
    }
}
