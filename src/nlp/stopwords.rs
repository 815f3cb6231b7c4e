//! Stopword filtering
//!
//! Wraps the `stop-words` crate. Both the LSA dictionary and the theme
//! counter can opt into filtering; neither filters by default.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A case-insensitive set of words to ignore
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Lowercased stopwords
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the list for `language` (ISO code or English name).
    ///
    /// Returns `None` for languages the `stop-words` crate does not ship.
    pub fn for_language(language: &str) -> Option<Self> {
        let lang = Self::resolve(language)?;
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Some(Self { stopwords })
    }

    /// A filter that keeps every word
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Whether `language` names a list this filter can load
    pub fn is_supported(language: &str) -> bool {
        Self::resolve(language).is_some()
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.is_empty() {
            return false;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn resolve(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => return None,
        };
        Some(lang)
    }
}
