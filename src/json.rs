//! JSON interface for single documents and batches
//!
//! Input documents carry either raw `text` or pre-segmented `sentences`
//! (for callers running their own boundary detection), an optional per-document
//! lemma map and an optional config. Output reports the summary together with
//! every sentence's score so callers can inspect the ranking.

use crate::document::Document;
use crate::errors::Result;
use crate::nlp::lemma::LemmaDict;
use crate::nlp::segmenter::SentenceSpan;
use crate::types::SummaryConfig;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    /// Raw text, segmented with the built-in segmenter
    #[serde(default)]
    pub text: String,
    /// Pre-segmented sentences; when present, `text` is ignored
    #[serde(default)]
    pub sentences: Option<Vec<SentenceSpan>>,
    /// Fraction of the document's words to keep
    #[serde(default = "default_target_fraction")]
    pub target_fraction: f64,
    /// `word -> lemma` pairs applied during normalization
    #[serde(default)]
    pub lemmas: Option<FxHashMap<String, String>>,
    #[serde(default)]
    pub config: Option<SummaryConfig>,
}

fn default_target_fraction() -> f64 {
    0.2
}

/// A ranked sentence in the JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
    pub word_count: usize,
    pub selected: bool,
}

/// Output for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResult {
    pub summary: String,
    pub budget: usize,
    pub word_count: usize,
    pub sentences: Vec<JsonSentence>,
    pub converged: bool,
    pub iterations: usize,
}

/// One entry of a batch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonBatchItem {
    Summary(JsonResult),
    Error { error: String },
}

impl JsonDocument {
    /// Build, rank and summarize this document
    pub fn summarize(self) -> Result<JsonResult> {
        let config = self.config.unwrap_or_default();
        let lemmas: Option<LemmaDict> = self.lemmas.map(|map| map.into_iter().collect());

        let document = match self.sentences {
            Some(spans) => Document::from_spans(spans, lemmas.as_ref(), config)?,
            None => Document::with_config(&self.text, lemmas.as_ref(), config)?,
        };
        let summary = document.summary(self.target_fraction)?;

        let sentences = document
            .sentences()
            .iter()
            .map(|s| JsonSentence {
                index: s.index,
                text: s.text.clone(),
                score: s.score,
                word_count: s.word_count,
                selected: summary.selected.binary_search(&s.index).is_ok(),
            })
            .collect();

        Ok(JsonResult {
            summary: summary.text,
            budget: summary.budget,
            word_count: summary.word_count,
            sentences,
            converged: document.converged(),
            iterations: document.iterations(),
        })
    }
}

/// Summarize one JSON document, returning the JSON result
pub fn summarize_json(json_input: &str) -> Result<String> {
    let doc: JsonDocument = serde_json::from_str(json_input)?;
    let result = doc.summarize()?;
    Ok(serde_json::to_string(&result)?)
}

/// Summarize a JSON array of documents in parallel.
///
/// A document that fails is reported in place as `{"error": "..."}`; only
/// malformed top-level JSON fails the whole call.
pub fn summarize_batch_json(json_input: &str) -> Result<String> {
    let docs: Vec<JsonDocument> = serde_json::from_str(json_input)?;

    let results: Vec<JsonBatchItem> = docs
        .into_par_iter()
        .map(|doc| match doc.summarize() {
            Ok(result) => JsonBatchItem::Summary(result),
            Err(err) => JsonBatchItem::Error {
                error: err.to_string(),
            },
        })
        .collect();

    Ok(serde_json::to_string(&results)?)
}
