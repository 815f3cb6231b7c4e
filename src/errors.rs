//! Error types shared by every stage of the digest.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by tokenization, sentiment scoring, summarization and
/// aggregation.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Input that must be non-empty was empty (review list, text to summarize).
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// An argument was outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The tokenizer corpus could not be loaded and no cached copy exists.
    #[error("tokenizer corpus unavailable at {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A ranking or scoring collaborator failed.
    #[error("collaborator failure: {0}")]
    Collaborator(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DigestError>;
