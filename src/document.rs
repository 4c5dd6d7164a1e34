//! Document: the summarization entry point
//!
//! A [`Document`] is built once per input text. Construction segments the
//! text, normalizes and tokenizes every sentence, builds the similarity graph
//! and ranks it. After that, [`Document::summarize`] only selects, so it can
//! be called repeatedly with different fractions at no ranking cost.

use crate::errors::Result;
use crate::graph::builder::SimilarityGraph;
use crate::nlp::lemma::LemmaDict;
use crate::nlp::normalizer::{collapse_whitespace, normalize};
use crate::nlp::segmenter::{Segmenter, SentenceSpan, UnicodeSegmenter};
use crate::nlp::tokenizer::Tokenizer;
use crate::rank::ranker::SentenceRanker;
use crate::summarizer::selector::{SentenceSelector, Summary};
use crate::types::{Sentence, SummaryConfig};

/// Enter a tracing span for a construction stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("document_stage", stage = $name).entered();
    };
}

/// A segmented, ranked document
#[derive(Debug, Clone)]
pub struct Document {
    sentences: Vec<Sentence>,
    graph: SimilarityGraph,
    config: SummaryConfig,
    total_word_count: usize,
    iterations: usize,
    delta: f64,
    converged: bool,
}

impl Document {
    /// Build a document with the default configuration and segmenter
    pub fn new(text: &str, lemmas: Option<&LemmaDict>) -> Result<Self> {
        Self::with_config(text, lemmas, SummaryConfig::default())
    }

    /// Build a document with a custom configuration
    pub fn with_config(
        text: &str,
        lemmas: Option<&LemmaDict>,
        config: SummaryConfig,
    ) -> Result<Self> {
        Self::with_segmenter(text, lemmas, config, &UnicodeSegmenter::new())
    }

    /// Build a document from raw bytes, which must be valid UTF-8
    pub fn from_bytes(
        bytes: &[u8],
        lemmas: Option<&LemmaDict>,
        config: SummaryConfig,
    ) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Self::with_config(text, lemmas, config)
    }

    /// Build a document using a caller-supplied segmenter
    pub fn with_segmenter<S>(
        text: &str,
        lemmas: Option<&LemmaDict>,
        config: SummaryConfig,
        segmenter: &S,
    ) -> Result<Self>
    where
        S: Segmenter + ?Sized,
    {
        config.validate()?;

        let spans = {
            trace_stage!("segment");
            segmenter.segment(text)?
        };

        Self::from_spans(spans, lemmas, config)
    }

    /// Build a document from already-segmented sentences.
    ///
    /// Spans with no visible text are dropped; the remaining spans keep their
    /// order and become sentences `0..N`.
    pub fn from_spans(
        spans: Vec<SentenceSpan>,
        lemmas: Option<&LemmaDict>,
        config: SummaryConfig,
    ) -> Result<Self> {
        config.validate()?;

        let sentences = {
            trace_stage!("normalize");
            build_sentences(spans, lemmas)
        };
        let total_word_count = sentences.iter().map(|s| s.word_count).sum();

        let graph = {
            trace_stage!("graph");
            SimilarityGraph::from_word_sets(sentences.iter().map(|s| &s.words))
        };

        let mut document = Self {
            sentences,
            graph,
            config,
            total_word_count,
            iterations: 0,
            delta: 0.0,
            converged: true,
        };
        document.rank();

        Ok(document)
    }

    fn rank(&mut self) {
        trace_stage!("rank");

        let result = SentenceRanker::from_config(&self.config).run(&self.graph);
        for (sentence, score) in self.sentences.iter_mut().zip(result.scores) {
            sentence.score = score;
        }
        self.iterations = result.iterations;
        self.delta = result.delta;
        self.converged = result.converged;
    }

    /// Select a summary covering `target_fraction` of the document
    pub fn summary(&self, target_fraction: f64) -> Result<Summary> {
        SentenceSelector::new()
            .with_budget_mode(self.config.budget)
            .select(&self.sentences, target_fraction)
    }

    /// Summary text covering `target_fraction` of the document
    pub fn summarize(&self, target_fraction: f64) -> Result<String> {
        Ok(self.summary(target_fraction)?.text)
    }

    /// Sentences in document order, with their final scores
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// The similarity graph (node `i` is sentence `i`)
    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    /// Configuration the document was ranked with
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Final score of every sentence, in document order
    pub fn scores(&self) -> Vec<f64> {
        self.sentences.iter().map(|s| s.score).collect()
    }

    /// Sum of all sentences' word counts
    pub fn total_word_count(&self) -> usize {
        self.total_word_count
    }

    /// Number of ranking sweeps performed
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Largest per-sentence score change in the last sweep
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Whether ranking settled before hitting `max_iterations`
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

fn build_sentences(spans: Vec<SentenceSpan>, lemmas: Option<&LemmaDict>) -> Vec<Sentence> {
    let tokenizer = Tokenizer::new();

    spans
        .into_iter()
        .filter_map(|span| {
            let text = collapse_whitespace(&span.text);
            if text.is_empty() {
                return None;
            }
            let normalized = normalize(&span.text, lemmas);
            let (words, word_count) = tokenizer.tokenize(&normalized);
            Some((text, normalized, words, word_count, span.start, span.end))
        })
        .enumerate()
        .map(|(index, (text, normalized, words, word_count, start, end))| {
            Sentence::new(text, normalized, words, word_count, index).with_span(start, end)
        })
        .collect()
}

/// Summarize `text` down to `target_fraction` of its words.
///
/// Convenience wrapper over [`Document::new`] and [`Document::summarize`].
/// Text with no sentences yields an empty summary.
pub fn summarize(text: &str, target_fraction: f64, lemmas: Option<&LemmaDict>) -> Result<String> {
    Document::new(text, lemmas)?.summarize(target_fraction)
}
