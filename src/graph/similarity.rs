//! Lexical-overlap similarity between sentences
//!
//! Weights follow Mihalcea & Tarau (2004): shared words normalized by the
//! log lengths of both sentences.

use crate::types::WordSet;
use std::cmp::Ordering;

/// Count the words two sets have in common.
///
/// Linear two-pointer merge; relies on both sets being sorted, which
/// [`WordSet`] guarantees.
pub fn overlap(a: &WordSet, b: &WordSet) -> usize {
    let (a, b) = (a.as_slice(), b.as_slice());
    let (mut i, mut j) = (0, 0);
    let mut shared = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }

    shared
}

/// Similarity of two sentences: `overlap / (ln|a| + ln|b|)`.
///
/// A set of zero or one word makes the denominator zero, negative infinity or
/// too small to be meaningful; such pairs score 0.
pub fn similarity(a: &WordSet, b: &WordSet) -> f64 {
    if a.len() <= 1 || b.len() <= 1 {
        return 0.0;
    }

    let denominator = (a.len() as f64).ln() + (b.len() as f64).ln();
    if !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }

    overlap(a, b) as f64 / denominator
}
