//! Tokenizer corpus and its one-time acquisition.
//!
//! The sentence splitter needs an abbreviation list so that "Dr. Lee" or
//! "e.g. this" do not end a sentence. A [`CorpusProvider`] is asked for the
//! [`Corpus`] once at startup; everything downstream borrows it.
//!
//! [`CachedCorpus`] keeps a copy on disk: the first acquisition materializes
//! the bundled list into the cache directory, later ones read it back and
//! skip the write.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::errors::{DigestError, Result};

/// File name of the abbreviation list inside a cache directory.
pub const ABBREVIATIONS_FILE: &str = "english.abbrev";

/// English abbreviations that may be followed by a period mid-sentence.
/// One per line, without the trailing period; `#` starts a comment.
const BUNDLED_ABBREVIATIONS: &str = "\
# titles
mr
mrs
ms
dr
prof
sr
jr
st
rev
gen
sgt
capt
lt
col
# latin and reference
e.g
i.e
etc
vs
cf
al
approx
ca
viz
vol
fig
p
pp
ed
# organisations and places
inc
ltd
co
corp
dept
univ
u.s
u.k
mt
ave
blvd
# time
a.m
p.m
jan
feb
apr
jun
jul
aug
sep
sept
oct
nov
dec
mon
tue
wed
thu
fri
";

/// Linguistic resources needed by the tokenizer
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    abbreviations: FxHashSet<String>,
}

impl Corpus {
    /// Parse an abbreviation list in the bundled line format
    pub fn from_abbreviation_list(raw: &str) -> Self {
        let abbreviations = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.trim_end_matches('.').to_lowercase())
            .collect();
        Self { abbreviations }
    }

    /// The list compiled into the binary
    pub fn bundled() -> Self {
        Self::from_abbreviation_list(BUNDLED_ABBREVIATIONS)
    }

    /// Whether `word` (without its trailing period, any case) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

/// Capability that hands out the tokenizer corpus.
///
/// Acquire once, before the first tokenization, and pass the result by
/// reference.
pub trait CorpusProvider {
    fn acquire(&self) -> Result<Corpus>;
}

/// Serves the compiled-in corpus; never touches the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCorpus;

impl CorpusProvider for BundledCorpus {
    fn acquire(&self) -> Result<Corpus> {
        Ok(Corpus::bundled())
    }
}

/// Serves the corpus from a cache directory, populating it on first use.
#[derive(Debug, Clone)]
pub struct CachedCorpus {
    dir: PathBuf,
}

impl CachedCorpus {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<platform cache dir>/review-digest/tokenizers`, if the platform has one
    pub fn default_location() -> Option<Self> {
        dirs::cache_dir().map(|base| Self::new(base.join("review-digest").join("tokenizers")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(ABBREVIATIONS_FILE)
    }

    /// Whether a cached copy is already present
    pub fn is_cached(&self) -> bool {
        self.path().is_file()
    }

    fn materialize(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| DigestError::ResourceUnavailable {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(path, BUNDLED_ABBREVIATIONS).map_err(|source| {
            DigestError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl CorpusProvider for CachedCorpus {
    fn acquire(&self) -> Result<Corpus> {
        let path = self.path();
        if self.is_cached() {
            debug!(path = %path.display(), "using cached tokenizer corpus");
        } else {
            info!(path = %path.display(), "caching tokenizer corpus");
            self.materialize(&path)?;
        }

        let raw = fs::read_to_string(&path)
            .map_err(|source| DigestError::ResourceUnavailable { path, source })?;
        Ok(Corpus::from_abbreviation_list(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_corpus_knows_common_abbreviations() {
        let corpus = BundledCorpus.acquire().unwrap();

        assert!(corpus.is_abbreviation("dr"));
        assert!(corpus.is_abbreviation("Mr"));
        assert!(corpus.is_abbreviation("e.g"));
        assert!(!corpus.is_abbreviation("phone"));
    }

    #[test]
    fn test_list_parsing_skips_comments_and_periods() {
        let corpus = Corpus::from_abbreviation_list("# heading\n\nAbbr.\n  misc  \n");

        assert_eq!(corpus.len(), 2);
        assert!(corpus.is_abbreviation("abbr"));
        assert!(corpus.is_abbreviation("misc"));
        assert!(!corpus.is_abbreviation("# heading"));
    }

    #[test]
    fn test_cached_corpus_materializes_then_reuses() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = CachedCorpus::new(tmp.path().join("tokenizers"));

        assert!(!provider.is_cached());
        let first = provider.acquire().unwrap();
        assert!(provider.is_cached());

        // A cached copy takes precedence over the bundled list
        fs::write(provider.path(), "custom\n").unwrap();
        let second = provider.acquire().unwrap();

        assert!(first.is_abbreviation("dr"));
        assert!(second.is_abbreviation("custom"));
        assert!(!second.is_abbreviation("dr"));
    }

    #[test]
    fn test_cached_corpus_unwritable_location() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let provider = CachedCorpus::new(blocker.join("tokenizers"));
        let err = provider.acquire().unwrap_err();

        assert!(matches!(err, DigestError::ResourceUnavailable { .. }));
    }
}
