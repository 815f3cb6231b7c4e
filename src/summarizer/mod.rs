//! Extractive summarization
//!
//! Text is parsed into a [`Document`], every sentence is scored by a
//! [`SentenceRanker`] (LSA by default), and the top sentences are returned
//! verbatim in document order.

pub mod document;
pub mod lsa;
pub mod selector;
pub mod svd;

pub use document::Document;
pub use lsa::LsaRanker;
pub use selector::{SentenceSelector, SummaryResult};

use tracing::debug;

use crate::errors::{DigestError, Result};
use crate::nlp::corpus::Corpus;
use crate::nlp::tokenizer::Tokenizer;

/// Scores every sentence of a document; higher is more representative.
pub trait SentenceRanker {
    /// One rank per `document.sentences()` entry, same order.
    fn rank(&self, document: &Document) -> Result<Vec<f64>>;
}

/// Extractive summarizer over a tokenizer and a ranker
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer<'c, R = LsaRanker> {
    tokenizer: Tokenizer<'c>,
    ranker: R,
}

impl<'c> ExtractiveSummarizer<'c, LsaRanker> {
    /// LSA summarizer with default settings
    pub fn new(corpus: &'c Corpus) -> Self {
        Self::with_ranker(corpus, LsaRanker::new())
    }
}

impl<'c, R: SentenceRanker> ExtractiveSummarizer<'c, R> {
    pub fn with_ranker(corpus: &'c Corpus, ranker: R) -> Self {
        Self {
            tokenizer: Tokenizer::new(corpus),
            ranker,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer<'c> {
        &self.tokenizer
    }

    /// Select up to `sentences_count` sentences of `text`.
    ///
    /// A count of zero yields an empty result; a count above the number of
    /// sentences yields every sentence. Fails with
    /// [`DigestError::EmptyInput`] when `text` has no words.
    pub fn summarize(&self, text: &str, sentences_count: usize) -> Result<SummaryResult> {
        trace_stage!("summarize");

        if text.trim().is_empty() {
            return Err(DigestError::EmptyInput("text to summarize"));
        }
        let document = Document::parse(text, &self.tokenizer);
        if document.word_count() == 0 {
            return Err(DigestError::EmptyInput("text to summarize has no words"));
        }
        if sentences_count == 0 {
            return Ok(SummaryResult::default());
        }

        let ranks = self.ranker.rank(&document)?;
        if ranks.len() != document.len() {
            return Err(DigestError::Collaborator(format!(
                "ranker returned {} ranks for {} sentences",
                ranks.len(),
                document.len()
            )));
        }

        let result = SentenceSelector::new(sentences_count).select(document.sentences(), &ranks);
        debug!(
            sentences = document.len(),
            headings = document.headings().len(),
            requested = sentences_count,
            selected = result.len(),
            "summarized text"
        );
        Ok(result)
    }

    /// Selected sentences joined by single spaces.
    pub fn summarize_text(&self, text: &str, sentences_count: usize) -> Result<String> {
        Ok(self.summarize(text, sentences_count)?.text())
    }
}
