//! Sentence normalization
//!
//! Produces the comparison form of a sentence. Two sentences are compared
//! only through their normalized text, never through the display text.

use super::lemma::LemmaDict;

/// Characters removed before comparison
pub const PUNCTUATION: [char; 15] = [
    '.', '?', '!', ',', ';', ':', '-', '[', ']', '{', '}', '(', ')', '\'', '"',
];

/// Check if a character belongs to the stripped punctuation set
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Normalize a sentence for comparison.
///
/// Strips punctuation, lowercases, then (when a dictionary is given) maps
/// each whitespace-delimited token to its lemma and rejoins with single
/// spaces. Without a dictionary the whitespace of the input is kept as is.
pub fn normalize(sentence: &str, lemmas: Option<&LemmaDict>) -> String {
    let mut stripped = String::with_capacity(sentence.len());
    stripped.extend(sentence.chars().filter(|&c| !is_punctuation(c)));
    let lowered = stripped.to_lowercase();

    match lemmas {
        Some(dict) => lemmatize(&lowered, dict),
        None => lowered,
    }
}

fn lemmatize(text: &str, dict: &LemmaDict) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(dict.get(token).unwrap_or(token));
    }
    out
}

/// Collapse every whitespace run (tabs and newlines included) to one space
/// and trim the ends. Used for the display text of a sentence.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
