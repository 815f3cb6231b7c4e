//! Sentence and word tokenization
//!
//! Sentences come from Unicode (UAX #29) sentence boundaries, re-joined where
//! a boundary follows a known abbreviation. Words follow Penn Treebank
//! conventions closely enough for counting and ranking: punctuation is split
//! off, clitics (`n't`, `'s`, `'re`, ...) become their own tokens, internal
//! hyphens and apostrophes stay.

use unicode_segmentation::UnicodeSegmentation;

use super::corpus::Corpus;

/// Clitic suffixes split from the end of a word, longest first
const CLITICS: &[&str] = &[
    "n't", "n\u{2019}t", "'ll", "\u{2019}ll", "'re", "\u{2019}re", "'ve", "\u{2019}ve", "'s",
    "\u{2019}s", "'m", "\u{2019}m", "'d", "\u{2019}d",
];

/// Sentence splitter backed by a [`Corpus`]
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'c> {
    corpus: &'c Corpus,
}

impl<'c> Tokenizer<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    /// Split `text` into trimmed, non-empty sentences.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let start = pending.unwrap_or(offset);
            if self.ends_with_abbreviation(piece) {
                pending = Some(start);
                continue;
            }
            pending = None;

            let sentence = text[start..offset + piece.len()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }

        if let Some(start) = pending {
            let sentence = text[start..].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }

        sentences
    }

    /// Whether a boundary after `piece` is a false break after an abbreviation.
    ///
    /// Only listed abbreviations count; a lone capital ("plan B.") does not.
    fn ends_with_abbreviation(&self, piece: &str) -> bool {
        let Some(stem) = piece.trim_end().strip_suffix('.') else {
            return false;
        };
        let last = stem
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(stem)
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        !last.is_empty() && self.corpus.is_abbreviation(last)
    }
}

/// Treebank-style tokens, punctuation included.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        if is_emoticon(chunk) {
            tokens.push(chunk.to_string());
        } else {
            split_chunk(chunk, &mut tokens);
        }
    }
    tokens
}

/// Word tokens: [`tokenize`] minus pure punctuation.
pub fn words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect()
}

/// A letter followed by letters, hyphens or apostrophes
pub fn is_word(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '-' | '\u{2019}'))
        }
        _ => false,
    }
}

/// `:)`, `:-(`, `;D` and friends
pub fn is_emoticon(chunk: &str) -> bool {
    let Some(rest) = chunk
        .strip_prefix(':')
        .or_else(|| chunk.strip_prefix(';'))
        .or_else(|| chunk.strip_prefix('='))
    else {
        return false;
    };
    let mouth = rest.strip_prefix('-').unwrap_or(rest);
    matches!(mouth, ")" | "(" | "D" | "P" | "p" | "/" | "|" | "]" | "[")
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let start = chunk.find(|c: char| c.is_alphanumeric());
    let end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8());

    let (Some(start), Some(end)) = (start, end) else {
        push_punctuation(chunk, out);
        return;
    };

    push_punctuation(&chunk[..start], out);
    split_clitic(&chunk[start..end], out);
    push_punctuation(&chunk[end..], out);
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    for clitic in CLITICS {
        let Some(cut) = word.len().checked_sub(clitic.len()) else {
            continue;
        };
        if cut == 0 {
            continue;
        }
        if let Some(suffix) = word.get(cut..) {
            if suffix.eq_ignore_ascii_case(clitic) {
                out.push(word[..cut].to_string());
                out.push(suffix.to_string());
                return;
            }
        }
    }
    out.push(word.to_string());
}

/// Each punctuation mark is a token, except runs of periods ("...")
fn push_punctuation(marks: &str, out: &mut Vec<String>) {
    let mut run = String::new();
    for c in marks.chars() {
        if c == '.' {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            out.push(std::mem::take(&mut run));
        }
        out.push(c.to_string());
    }
    if !run.is_empty() {
        out.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn test_punctuation_is_split() {
        assert_eq!(
            toks("This phone is amazing!"),
            vec!["This", "phone", "is", "amazing", "!"]
        );
        assert_eq!(toks("(fast, sleek)"), vec!["(", "fast", ",", "sleek", ")"]);
        assert_eq!(toks("Wait..."), vec!["Wait", "..."]);
    }

    #[test]
    fn test_clitics_are_split() {
        assert_eq!(toks("doesn't"), vec!["does", "n't"]);
        assert_eq!(toks("I'm"), vec!["I", "'m"]);
        assert_eq!(toks("camera's"), vec!["camera", "'s"]);
        assert_eq!(toks("it\u{2019}s"), vec!["it", "\u{2019}s"]);
    }

    #[test]
    fn test_internal_hyphens_are_kept() {
        assert_eq!(
            toks("a game-changer, pre-installed."),
            vec!["a", "game-changer", ",", "pre-installed", "."]
        );
    }

    #[test]
    fn test_emoticons_survive() {
        assert_eq!(toks("love it :) really"), vec!["love", "it", ":)", "really"]);
        assert!(is_emoticon(":-("));
        assert!(!is_emoticon(":"));
        assert!(!is_emoticon("::"));
    }

    #[test]
    fn test_words_drop_punctuation() {
        assert_eq!(
            words("I'm not a fan, honestly!"),
            vec!["I", "'m", "not", "a", "fan", "honestly"]
        );
        assert!(words("!!! ... ,").is_empty());
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("camera"));
        assert!(is_word("game-changer"));
        assert!(is_word("n't"));
        assert!(!is_word("'s"));
        assert!(!is_word("3d"));
        assert!(!is_word("!"));
    }

    #[test]
    fn test_sentence_split() {
        let corpus = Corpus::bundled();
        let tokenizer = Tokenizer::new(&corpus);

        let sentences = tokenizer.sentences(
            "This phone is amazing! The camera quality is outstanding. Is it worth it? Yes.",
        );
        assert_eq!(
            sentences,
            vec![
                "This phone is amazing!",
                "The camera quality is outstanding.",
                "Is it worth it?",
                "Yes."
            ]
        );
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        let corpus = Corpus::bundled();
        let tokenizer = Tokenizer::new(&corpus);

        let sentences =
            tokenizer.sentences("I asked Dr. Smith about it. Prof. Doe agreed with Mr. Jones.");
        assert_eq!(
            sentences,
            vec!["I asked Dr. Smith about it.", "Prof. Doe agreed with Mr. Jones."]
        );
    }

    #[test]
    fn test_single_capital_ends_sentence() {
        let corpus = Corpus::bundled();
        let tokenizer = Tokenizer::new(&corpus);

        let sentences =
            tokenizer.sentences("I picked plan B. It was great. Vitamin C. Works well.");
        assert_eq!(
            sentences,
            vec!["I picked plan B.", "It was great.", "Vitamin C.", "Works well."]
        );
    }

    #[test]
    fn test_sentence_split_empty() {
        let corpus = Corpus::bundled();
        let tokenizer = Tokenizer::new(&corpus);

        assert!(tokenizer.sentences("").is_empty());
        assert!(tokenizer.sentences("   \n ").is_empty());
    }
}
