//! Sentence segmentation
//!
//! Boundary detection is a collaborator of the summarizer, not part of it.
//! [`Segmenter`] is the seam; [`UnicodeSegmenter`] is the built-in UAX #29
//! implementation used when the caller brings nothing better.
//!
//! UAX #29 treats every line feed as a paragraph separator, which would cut
//! hard-wrapped prose mid-sentence. Single line breaks are therefore read as
//! spaces; a blank line still ends a sentence.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A sentence span produced by segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// The original substring
    pub text: String,
    /// Start byte offset in the source text
    #[serde(default)]
    pub start: usize,
    /// End byte offset in the source text
    #[serde(default)]
    pub end: usize,
}

impl SentenceSpan {
    /// Create a new span
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Splits raw text into ordered sentence spans
pub trait Segmenter {
    /// Segment `text` into sentences, in document order.
    ///
    /// An error aborts summarization of the whole document.
    fn segment(&self, text: &str) -> Result<Vec<SentenceSpan>>;
}

/// UAX #29 sentence segmentation
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Find sentence boundaries in text, skipping whitespace-only segments
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let unwrapped = join_wrapped_lines(text);
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in unwrapped.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }
}

/// Replace line breaks inside whitespace runs holding fewer than two line
/// feeds with spaces. Every replacement is one ASCII byte for another, so
/// byte offsets into the result are valid offsets into `text`.
fn join_wrapped_lines(text: &str) -> String {
    fn flush(out: &mut String, run: &mut String) {
        if run.matches('\n').count() < 2 {
            out.extend(run.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        } else {
            out.push_str(run);
        }
        run.clear();
    }

    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
        } else {
            flush(&mut out, &mut run);
            out.push(c);
        }
    }
    flush(&mut out, &mut run);
    out
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<SentenceSpan>> {
        Ok(self
            .sentence_boundaries(text)
            .into_iter()
            .map(|(start, end)| SentenceSpan::new(&text[start..end], start, end))
            .collect())
    }
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Result<Vec<SentenceSpan>>,
{
    fn segment(&self, text: &str) -> Result<Vec<SentenceSpan>> {
        self(text)
    }
}
