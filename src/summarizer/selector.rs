//! Rank-based sentence selection for summarization
//!
//! Picks the `num_sentences` highest-ranked sentences and returns them in
//! document order. Sorting is stable, so among equal ranks the earlier
//! sentence wins.

use crate::types::Sentence;

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
}

impl SummaryResult {
    /// Sentence texts joined by single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A selected sentence with its rank
#[derive(Debug, Clone)]
pub struct SelectedSentence {
    pub sentence: Sentence,
    pub rank: f64,
}

/// Top-N sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl SentenceSelector {
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Select sentences; `ranks[i]` belongs to `sentences[i]`.
    pub fn select(&self, sentences: &[Sentence], ranks: &[f64]) -> SummaryResult {
        let mut order: Vec<usize> = (0..sentences.len().min(ranks.len())).collect();
        order.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]));
        order.truncate(self.num_sentences);
        order.sort_unstable();

        SummaryResult {
            sentences: order
                .into_iter()
                .map(|i| SelectedSentence {
                    sentence: sentences[i].clone(),
                    rank: ranks[i],
                })
                .collect(),
        }
    }
}
