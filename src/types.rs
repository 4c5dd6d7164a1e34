//! Core types for rapid_textsum
//!
//! This module defines the fundamental data structures used throughout the library:
//! the sorted word set, sentences, and ranking/summary configuration.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Word Set
// ============================================================================

/// The unique words of a sentence, in lexicographic order.
///
/// Similarity scoring walks two word sets with a linear merge, which only
/// counts overlaps correctly when both sides are sorted and free of
/// duplicates. The constructor is the only way in, so every `WordSet` holds
/// that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordSet(Vec<String>);

impl WordSet {
    /// Create a word set from any collection of words (sorted and deduplicated here)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        Self(words)
    }

    /// Number of unique words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the sorted words
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Check membership (binary search over the sorted words)
    pub fn contains(&self, word: &str) -> bool {
        self.0.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for WordSet {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<WordSet> for Vec<String> {
    fn from(set: WordSet) -> Self {
        set.0
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence of the input document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    /// Display text: the source span with whitespace runs collapsed to one space
    pub text: String,
    /// Comparison form (punctuation stripped, lowercased, optionally lemmatized)
    pub normalized: String,
    /// Unique words of `normalized`
    pub words: WordSet,
    /// Total word occurrences in `normalized` (used for the summary budget)
    pub word_count: usize,
    /// Importance score, written by the ranker
    pub score: f64,
    /// Sentence index within the document
    pub index: usize,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text
    pub end: usize,
}

impl Sentence {
    /// Score every sentence starts from before the first ranking sweep
    pub const INITIAL_SCORE: f64 = 1.0;

    /// Create a new sentence
    pub fn new(
        text: impl Into<String>,
        normalized: impl Into<String>,
        words: WordSet,
        word_count: usize,
        index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            normalized: normalized.into(),
            words,
            word_count,
            score: Self::INITIAL_SCORE,
            index,
            start: 0,
            end: 0,
        }
    }

    /// Set the byte span of the sentence in the original text
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }
}

// ============================================================================
// Budget Mode
// ============================================================================

/// How the summary length is bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetMode {
    /// `max(1, round(fraction * total_words))` words
    #[default]
    Words,
    /// `max(1, floor(fraction * sentence_count))` sentences
    Sentences,
}

impl BudgetMode {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "sentences" | "sentence" | "sentence_count" => BudgetMode::Sentences,
            _ => BudgetMode::Words,
        }
    }
}

impl std::str::FromStr for BudgetMode {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BudgetMode::parse(value))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sentence ranking and summary selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Damping factor balancing propagated score against the uniform baseline
    pub damping: f64,
    /// Maximum ranking sweeps
    pub max_iterations: usize,
    /// Stop once no score moves by more than this between sweeps
    pub convergence_threshold: f64,
    /// How the summary length is bounded
    pub budget: BudgetMode,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 30,
            convergence_threshold: 1e-4,
            budget: BudgetMode::Words,
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(SummaryError::invalid_config(format!(
                "convergence_threshold must be a finite value >= 0, got {}",
                self.convergence_threshold
            )));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set budget mode
    pub fn with_budget(mut self, budget: BudgetMode) -> Self {
        self.budget = budget;
        self
    }
}
