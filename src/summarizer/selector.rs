//! Budgeted sentence selection
//!
//! Sentences are taken from the top of the ranking until the budget is used
//! up, then put back into document order. Acceptance stops at the first
//! sentence that does not fit instead of skipping it, so a larger fraction
//! always selects a superset of a smaller one.

use crate::errors::{Result, SummaryError};
use crate::types::{BudgetMode, Sentence};
use serde::{Deserialize, Serialize};

/// An extracted summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentence texts in document order, joined by single spaces
    pub text: String,
    /// Indices of the selected sentences, ascending
    pub selected: Vec<usize>,
    /// Budget the selection was made against (words or sentences)
    pub budget: usize,
    /// Total word count of the selected sentences
    pub word_count: usize,
}

impl Summary {
    /// The summary of a document with no sentences
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            selected: Vec::new(),
            budget: 0,
            word_count: 0,
        }
    }
}

/// Score-ordered sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector {
    budget_mode: BudgetMode,
}

impl SentenceSelector {
    /// Create a selector with a word budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget mode
    pub fn with_budget_mode(mut self, mode: BudgetMode) -> Self {
        self.budget_mode = mode;
        self
    }

    /// Select a summary covering `target_fraction` of the document.
    ///
    /// `sentences` must be in document order with their scores filled in.
    pub fn select(&self, sentences: &[Sentence], target_fraction: f64) -> Result<Summary> {
        if !target_fraction.is_finite() || target_fraction < 0.0 {
            return Err(SummaryError::invalid_fraction(target_fraction));
        }
        if sentences.is_empty() {
            return Ok(Summary::empty());
        }

        let ranked = rank_by_score(sentences);
        let (budget, mut selected) = match self.budget_mode {
            BudgetMode::Words => {
                let total_words = sentences.iter().map(|s| s.word_count).sum();
                let budget = word_budget(target_fraction, total_words);
                (budget, take_within_words(sentences, &ranked, budget))
            }
            BudgetMode::Sentences => {
                let budget = sentence_budget(target_fraction, sentences.len());
                (budget, ranked.into_iter().take(budget).collect::<Vec<_>>())
            }
        };

        selected.sort_unstable();
        let word_count = selected.iter().map(|&i| sentences[i].word_count).sum();
        let text = join_sentences(sentences, &selected);

        Ok(Summary {
            text,
            selected,
            budget,
            word_count,
        })
    }
}

/// Word budget for a fraction of the document: `max(1, round(fraction * total))`
pub fn word_budget(target_fraction: f64, total_words: usize) -> usize {
    ((target_fraction * total_words as f64).round() as usize).max(1)
}

/// Sentence budget for a fraction of the document: `max(1, floor(fraction * count))`
pub fn sentence_budget(target_fraction: f64, sentence_count: usize) -> usize {
    ((target_fraction * sentence_count as f64).floor() as usize).max(1)
}

/// Positions of `sentences` ordered by score descending, ties by position
fn rank_by_score(sentences: &[Sentence]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| {
        sentences[b]
            .score
            .total_cmp(&sentences[a].score)
            .then(a.cmp(&b))
    });
    order
}

fn take_within_words(sentences: &[Sentence], ranked: &[usize], budget: usize) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut used = 0;

    for &idx in ranked {
        let words = sentences[idx].word_count;
        // The top sentence is always kept, even when it alone is over budget.
        if !selected.is_empty() && (used >= budget || used + words > budget) {
            break;
        }
        selected.push(idx);
        used += words;
    }

    selected
}

fn join_sentences(sentences: &[Sentence], selected: &[usize]) -> String {
    let capacity = selected.iter().map(|&i| sentences[i].text.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for &idx in selected {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&sentences[idx].text);
    }
    text
}
