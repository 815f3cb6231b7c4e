//! Plain-text document model for extractive summarization.
//!
//! Paragraphs are separated by blank lines. A line written entirely in
//! uppercase is a heading: it breaks the paragraph but is never a summary
//! candidate. The remaining lines of a paragraph are joined with single
//! spaces and split into sentences.

use crate::nlp::tokenizer::{is_word, tokenize, Tokenizer};
use crate::types::Sentence;

/// Sentences of a text, headings set aside
#[derive(Debug, Clone, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
    headings: Vec<String>,
}

impl Document {
    pub fn parse(text: &str, tokenizer: &Tokenizer<'_>) -> Self {
        let mut doc = Self::default();
        let mut paragraph = String::new();

        for line in text.lines().map(str::trim) {
            if is_heading(line) {
                doc.flush(&mut paragraph, tokenizer);
                doc.headings.push(line.to_string());
            } else if line.is_empty() {
                doc.flush(&mut paragraph, tokenizer);
            } else {
                if !paragraph.is_empty() {
                    paragraph.push(' ');
                }
                paragraph.push_str(line);
            }
        }
        doc.flush(&mut paragraph, tokenizer);

        doc
    }

    fn flush(&mut self, paragraph: &mut String, tokenizer: &Tokenizer<'_>) {
        for text in tokenizer.sentences(paragraph.as_str()) {
            let words = tokenize(text).into_iter().filter(|t| is_word(t)).collect();
            let index = self.sentences.len();
            self.sentences.push(Sentence::new(text, index, words));
        }
        paragraph.clear();
    }

    /// Body sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total word tokens across body sentences
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }
}

/// At least one uppercase letter and no lowercase ones
fn is_heading(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}
