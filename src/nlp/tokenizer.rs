//! Word tokenization of normalized sentences
//!
//! Splits on runs of whitespace and discards empty tokens, so doubled spaces,
//! tabs and trailing whitespace never produce phantom words.

use crate::types::WordSet;

/// Word tokenizer for normalized sentence text
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize normalized text into its sorted unique words and the total
    /// (non-unique) word count
    pub fn tokenize(&self, normalized: &str) -> (WordSet, usize) {
        let mut word_count = 0;
        let words = WordSet::from_words(normalized.split_whitespace().inspect(|_| word_count += 1));
        (words, word_count)
    }

    /// Count the words of normalized text without building the set
    pub fn word_count(&self, normalized: &str) -> usize {
        normalized.split_whitespace().count()
    }
}

/// Convenience function to tokenize with the default tokenizer
pub fn tokenize(normalized: &str) -> (WordSet, usize) {
    Tokenizer::new().tokenize(normalized)
}
