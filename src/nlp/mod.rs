//! Natural Language Processing components
//!
//! This module provides tokenization, the tokenizer corpus, stopword
//! filtering and word frequency counting.

pub mod corpus;
pub mod frequency;
pub mod stopwords;
pub mod tokenizer;
