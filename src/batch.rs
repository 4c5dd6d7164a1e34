//! Parallel summarization of independent documents
//!
//! Each document is built and ranked by exactly one rayon task; nothing
//! mutable is shared. The lemma dictionary is the only shared input and is
//! read-only.

use crate::document::Document;
use crate::errors::{Result, SummaryError};
use crate::nlp::lemma::LemmaDict;
use crate::summarizer::selector::Summary;
use crate::types::SummaryConfig;
use rayon::prelude::*;

/// Summarizes many documents with one configuration
#[derive(Debug, Clone, Default)]
pub struct BatchSummarizer {
    config: SummaryConfig,
    lemmas: Option<LemmaDict>,
    threads: Option<usize>,
}

impl BatchSummarizer {
    /// Create a batch summarizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ranking/selection config used for every document
    pub fn with_config(mut self, config: SummaryConfig) -> Self {
        self.config = config;
        self
    }

    /// Share a lemma dictionary across all documents
    pub fn with_lemmas(mut self, lemmas: LemmaDict) -> Self {
        self.lemmas = Some(lemmas);
        self
    }

    /// Cap the number of worker threads (default: rayon's global pool)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    /// Build and rank every text. Results keep input order; one document
    /// failing does not affect the others.
    pub fn documents<T>(&self, texts: &[T]) -> Result<Vec<Result<Document>>>
    where
        T: AsRef<str> + Sync,
    {
        self.scoped(|| {
            texts
                .par_iter()
                .map(|text| {
                    Document::with_config(text.as_ref(), self.lemmas.as_ref(), self.config.clone())
                })
                .collect()
        })
    }

    /// Summarize every text to `target_fraction`, keeping input order
    pub fn summaries<T>(&self, texts: &[T], target_fraction: f64) -> Result<Vec<Result<Summary>>>
    where
        T: AsRef<str> + Sync,
    {
        self.scoped(|| {
            texts
                .par_iter()
                .map(|text| {
                    Document::with_config(text.as_ref(), self.lemmas.as_ref(), self.config.clone())?
                        .summary(target_fraction)
                })
                .collect()
        })
    }

    /// Summary texts for every input, keeping input order
    pub fn summarize<T>(&self, texts: &[T], target_fraction: f64) -> Result<Vec<Result<String>>>
    where
        T: AsRef<str> + Sync,
    {
        Ok(self
            .summaries(texts, target_fraction)?
            .into_iter()
            .map(|summary| summary.map(|s| s.text))
            .collect())
    }

    /// Run `f` inside a pool limited to `threads`, or on the global pool
    fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> Result<R> {
        match self.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SummaryError::invalid_config(format!("thread pool: {e}")))?;
                Ok(pool.install(f))
            }
            None => Ok(f()),
        }
    }
}

/// Summarize a batch of texts in parallel with the default configuration
pub fn summarize_batch<T>(
    texts: &[T],
    target_fraction: f64,
    lemmas: Option<&LemmaDict>,
) -> Result<Vec<Result<String>>>
where
    T: AsRef<str> + Sync,
{
    let mut batch = BatchSummarizer::new();
    if let Some(dict) = lemmas {
        batch = batch.with_lemmas(dict.clone());
    }
    batch.summarize(texts, target_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::summarize;

    const TEXTS: [&str; 3] = [
        "Cats are mammals. Dogs are mammals. The stock market rose today.",
        "",
        "Rust is fast. Rust is safe. Python is popular. Rust and Python interoperate.",
    ];

    #[test]
    fn test_batch_matches_sequential() {
        let results = summarize_batch(&TEXTS, 0.4, None).unwrap();

        assert_eq!(results.len(), TEXTS.len());
        for (text, result) in TEXTS.iter().zip(results) {
            assert_eq!(result.unwrap(), summarize(text, 0.4, None).unwrap());
        }
    }

    #[test]
    fn test_thread_limit() {
        let batch = BatchSummarizer::new().with_threads(2);
        let results = batch.summarize(&TEXTS, 0.4).unwrap();
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(results[1].as_ref().unwrap(), "");
    }

    #[test]
    fn test_shared_lemmas() {
        let dict: LemmaDict = [("cats", "cat"), ("dogs", "dog")].into_iter().collect();
        let texts = vec!["Cats sleep. Dogs bark loudly.".to_string(); 4];
        let docs = BatchSummarizer::new()
            .with_lemmas(dict)
            .documents(&texts)
            .unwrap();

        for doc in docs {
            assert_eq!(doc.unwrap().sentences()[0].normalized, "cat sleep");
        }
    }

    #[test]
    fn test_error_stays_per_document() {
        let results = BatchSummarizer::new().summaries(&TEXTS, -1.0).unwrap();
        assert!(results
            .iter()
            .all(|r| matches!(r, Err(SummaryError::InvalidFraction { .. }))));
    }
}
