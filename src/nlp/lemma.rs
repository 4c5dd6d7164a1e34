//! Lemmatization dictionary
//!
//! A read-only `word -> lemma` mapping. It is loaded once and then shared by
//! every document that normalizes against it, including documents summarized
//! in parallel, so the map sits behind an `Arc` and is never mutated after
//! construction.

use crate::errors::{Result, SummaryError};
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

/// A shared, immutable lemmatization dictionary
#[derive(Debug, Clone, Default)]
pub struct LemmaDict {
    lemmas: Arc<FxHashMap<String, String>>,
}

impl LemmaDict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a lemma list held in memory.
    ///
    /// Each non-blank line is `lemma<TAB>word`. Everything after the first tab
    /// is the inflected word; blank lines are skipped.
    pub fn parse(list: &str) -> Result<Self> {
        Self::from_reader(list.as_bytes())
    }

    /// Read a lemma list from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lemmas = FxHashMap::default();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let (lemma, word) = line.split_once('\t').ok_or_else(|| {
                SummaryError::lemma_parse(line_idx + 1, "expected `lemma<TAB>word`")
            })?;
            if word.is_empty() {
                return Err(SummaryError::lemma_parse(line_idx + 1, "empty word"));
            }

            lemmas.insert(word.to_string(), lemma.to_string());
        }

        Ok(Self {
            lemmas: Arc::new(lemmas),
        })
    }

    /// Load a lemma list from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref()).map_err(|err| SummaryError::Io {
            message: format!("{}: {err}", path.as_ref().display()),
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Look up the lemma for a word
    pub fn get(&self, word: &str) -> Option<&str> {
        self.lemmas.get(word).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LemmaDict
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let lemmas = iter
            .into_iter()
            .map(|(word, lemma)| (word.into(), lemma.into()))
            .collect();
        Self {
            lemmas: Arc::new(lemmas),
        }
    }
}
