//! Latent Semantic Analysis sentence ranking
//!
//! 1. Build a terms × sentences count matrix over the document dictionary.
//! 2. Smooth each column: `smooth + (1 - smooth) * count / column_max`.
//!    Zero cells of a non-empty column are lifted to `smooth` as well.
//! 3. Take the SVD and keep `max(min_dimensions, len(σ) * reduction_ratio)`
//!    singular values.
//! 4. A sentence's rank is `sqrt(Σ σᵢ² · vᵢ²)` over its right singular
//!    vector components.

use ndarray::Array2;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::document::Document;
use super::svd::{right_singular, RightSingular};
use super::SentenceRanker;
use crate::config::LsaConfig;
use crate::errors::{DigestError, Result};
use crate::nlp::stopwords::StopwordFilter;

/// LSA ranker
#[derive(Debug, Clone)]
pub struct LsaRanker {
    smoothing: f64,
    min_dimensions: usize,
    reduction_ratio: f64,
    stopwords: StopwordFilter,
}

impl Default for LsaRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl LsaRanker {
    pub fn new() -> Self {
        let defaults = LsaConfig::default();
        Self {
            smoothing: defaults.smoothing,
            min_dimensions: defaults.min_dimensions,
            reduction_ratio: defaults.reduction_ratio,
            stopwords: StopwordFilter::empty(),
        }
    }

    pub fn from_config(config: &LsaConfig) -> Result<Self> {
        if !(0.0..1.0).contains(&config.smoothing) {
            return Err(DigestError::InvalidConfig(format!(
                "smoothing must be in [0, 1), got {}",
                config.smoothing
            )));
        }

        let stopwords = match config.stop_words.as_deref() {
            None => StopwordFilter::empty(),
            Some(language) => StopwordFilter::for_language(language).ok_or_else(|| {
                DigestError::InvalidConfig(format!("no stopword list for language {language:?}"))
            })?,
        };

        Ok(Self {
            smoothing: config.smoothing,
            ..Self::new()
        }
        .with_stopwords(stopwords)
        .with_reduction(config.min_dimensions, config.reduction_ratio))
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_reduction(mut self, min_dimensions: usize, reduction_ratio: f64) -> Self {
        self.min_dimensions = min_dimensions;
        self.reduction_ratio = reduction_ratio;
        self
    }

    /// Distinct lowercased words, numbered by first occurrence
    fn dictionary(&self, document: &Document) -> FxHashMap<String, usize> {
        let mut dictionary = FxHashMap::default();
        for word in document.sentences().iter().flat_map(|s| &s.words) {
            if self.stopwords.is_stopword(word) {
                continue;
            }
            let next = dictionary.len();
            dictionary.entry(word.to_lowercase()).or_insert(next);
        }
        dictionary
    }

    fn count_matrix(
        &self,
        document: &Document,
        dictionary: &FxHashMap<String, usize>,
    ) -> Array2<f64> {
        let mut matrix = Array2::zeros((dictionary.len(), document.len()));
        for (col, sentence) in document.sentences().iter().enumerate() {
            for word in &sentence.words {
                if let Some(&row) = dictionary.get(&word.to_lowercase()) {
                    matrix[[row, col]] += 1.0;
                }
            }
        }
        matrix
    }

    pub(crate) fn term_frequency(&self, mut matrix: Array2<f64>) -> Array2<f64> {
        let smooth = self.smoothing;
        for mut column in matrix.columns_mut() {
            let max = column.fold(0.0_f64, |acc, &x| acc.max(x));
            if max != 0.0 {
                column.mapv_inplace(|x| smooth + (1.0 - smooth) * x / max);
            }
        }
        matrix
    }

    fn ranks(&self, svd: &RightSingular) -> Vec<f64> {
        let kept = (svd.sigma.len() as f64 * self.reduction_ratio) as usize;
        let dimensions = self.min_dimensions.max(kept);
        let powered: Vec<f64> = svd
            .sigma
            .iter()
            .enumerate()
            .map(|(i, s)| if i < dimensions { s * s } else { 0.0 })
            .collect();

        svd.v
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .zip(&powered)
                    .map(|(v, p)| p * v * v)
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl SentenceRanker for LsaRanker {
    fn rank(&self, document: &Document) -> Result<Vec<f64>> {
        let dictionary = self.dictionary(document);
        if dictionary.is_empty() {
            return Ok(vec![0.0; document.len()]);
        }
        if dictionary.len() < document.len() {
            debug!(
                terms = dictionary.len(),
                sentences = document.len(),
                "fewer terms than sentences; ranking may be degenerate"
            );
        }

        let matrix = self.term_frequency(self.count_matrix(document, &dictionary));
        let svd = right_singular(&matrix)?;
        Ok(self.ranks(&svd))
    }
}
