//! Word frequency counting for theme extraction.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::stopwords::StopwordFilter;
use super::tokenizer::words;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Case-insensitive word histogram that remembers first-occurrence order.
///
/// [`most_common`](Self::most_common) breaks count ties by first occurrence:
/// the word seen earlier in the text ranks higher.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    /// word -> index into `entries`
    index: FxHashMap<String, usize>,
    /// Counts in first-occurrence order
    entries: Vec<WordCount>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count words of `text` with at least `min_chars` characters,
    /// skipping stopwords.
    pub fn from_text(text: &str, min_chars: usize, stopwords: &StopwordFilter) -> Self {
        let mut freq = Self::new();
        for word in words(text) {
            if word.chars().count() >= min_chars && !stopwords.is_stopword(&word) {
                freq.add(&word);
            }
        }
        freq
    }

    /// Record one occurrence (lowercased).
    pub fn add(&mut self, word: &str) {
        let key = word.to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(WordCount {
                    word: key,
                    count: 1,
                });
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(&word.to_lowercase())
            .map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `n` words by descending count, ties by first occurrence.
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<&WordCount> = self.entries.iter().collect();
        // Stable: equal counts keep insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.into_iter().take(n).cloned().collect()
    }
}

/// Histogram of words longer than three characters, no stopword filtering.
pub fn word_frequencies(text: &str) -> WordFrequency {
    WordFrequency::from_text(text, 4, &StopwordFilter::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str) -> WordFrequency {
        WordFrequency::from_text(text, 4, &StopwordFilter::empty())
    }

    #[test]
    fn test_short_words_excluded() {
        let freq = count("The cat sat on the mat with a phone");

        assert_eq!(freq.count("the"), 0);
        assert_eq!(freq.count("cat"), 0);
        assert_eq!(freq.count("with"), 1);
        assert_eq!(freq.count("phone"), 1);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_word_frequencies_defaults() {
        let freq = word_frequencies("I'm not a fan. The fans aren't happy, fans!");

        assert_eq!(freq.count("fans"), 2);
        assert_eq!(freq.count("fan"), 0);
        assert_eq!(freq.count("happy"), 1);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_case_insensitive() {
        let freq = count("Camera camera CAMERA");

        assert_eq!(freq.count("camera"), 3);
        assert_eq!(freq.count("Camera"), 3);
        assert_eq!(freq.len(), 1);
    }

    #[test]
    fn test_most_common_orders_by_count() {
        let freq = count("battery phone battery screen phone battery");
        let top = freq.most_common(2);

        assert_eq!(top[0].word, "battery");
        assert_eq!(top[0].count, 3);
        assert_eq!(top[1].word, "phone");
        assert_eq!(top[1].count, 2);
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let freq = count("zebra apple mango apple zebra mango");
        let top: Vec<_> = freq.most_common(3).into_iter().map(|w| w.word).collect();

        assert_eq!(top, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_most_common_short_list() {
        let freq = count("phone camera");

        assert_eq!(freq.most_common(5).len(), 2);
        assert!(count("a an the").most_common(5).is_empty());
    }

    #[test]
    fn test_stopwords_excluded_when_requested() {
        let stop = StopwordFilter::from_list(&["with"]);
        let freq = WordFrequency::from_text("phone with case with cover", 4, &stop);

        assert_eq!(freq.count("with"), 0);
        assert_eq!(freq.count("phone"), 1);
    }
}
