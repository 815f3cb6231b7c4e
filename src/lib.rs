//! # review-digest
//!
//! Extractive summarization and sentiment aggregation over product reviews.
//!
//! - [`summarizer`]: LSA sentence ranking and top-N extraction
//! - [`sentiment`]: lexicon polarity and subjectivity scoring
//! - [`aggregator`]: one-paragraph digest of a review batch
//! - [`nlp`]: tokenization, word counts, stopwords, and the tokenizer corpus
//! - [`config`]: JSON configuration with rule-based validation
//!
//! ## Example
//!
//! ```rust
//! use review_digest::{Corpus, ReviewAggregator};
//!
//! let corpus = Corpus::bundled();
//! let aggregator = ReviewAggregator::new(&corpus);
//! let summary = aggregator
//!     .summarize_reviews(&["The camera is great.", "The battery is bad."], 2)
//!     .unwrap();
//! assert!(summary.starts_with("The overall sentiment of the reviews is"));
//! ```

/// Enter a debug span named after a processing stage for the rest of the scope.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("digest_stage", stage = $name).entered();
    };
}

pub mod aggregator;
pub mod batch;
pub mod config;
pub mod errors;
pub mod nlp;
pub mod sentiment;
pub mod summarizer;
pub mod types;

pub use aggregator::{ReviewAggregator, ReviewDigest};
pub use config::DigestConfig;
pub use errors::{DigestError, Result};
pub use nlp::corpus::{BundledCorpus, CachedCorpus, Corpus, CorpusProvider};
pub use sentiment::{mean_polarity, LexiconAnalyzer, SentimentAnalyzer};
pub use summarizer::{ExtractiveSummarizer, LsaRanker, SentenceRanker};
pub use types::{Sentiment, SentimentLabel};
