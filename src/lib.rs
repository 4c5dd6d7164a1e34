//! # rapid_textsum
//!
//! Extractive text summarization with TextRank over sentences.
//!
//! A document is split into sentences, each sentence is reduced to its set
//! of normalized words, and sentences are linked by how many words they
//! share. Scores are propagated over that graph until they settle; the
//! best-scoring sentences that fit a word budget form the summary, in their
//! original order.
//!
//! ## Features
//!
//! - **Deterministic**: same text and fraction, same summary, byte for byte
//! - **Reusable ranking**: build a [`Document`] once, summarize at any length
//! - **Pluggable segmentation**: bring your own [`Segmenter`], or use the UAX #29 default
//! - **Lemmatization**: optional shared [`LemmaDict`] to match inflected forms
//! - **Batch**: summarize many documents in parallel with [`BatchSummarizer`]
//!
//! ```
//! use rapid_textsum::summarize;
//!
//! let text = "Cats are mammals. Dogs are mammals. The stock market rose today.";
//! let summary = summarize(text, 0.34, None).unwrap();
//! assert_eq!(summary, "Cats are mammals.");
//! ```

pub mod batch;
pub mod document;
pub mod errors;
pub mod graph;
pub mod json;
pub mod nlp;
pub mod rank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{BudgetMode, Sentence, SummaryConfig, WordSet};

// Re-export main functionality
pub use batch::{summarize_batch, BatchSummarizer};
pub use document::{summarize, Document};
pub use graph::builder::{GraphBuilder, SimilarityGraph};
pub use json::{summarize_batch_json, summarize_json};
pub use nlp::lemma::LemmaDict;
pub use nlp::normalizer::normalize;
pub use nlp::segmenter::{Segmenter, SentenceSpan, UnicodeSegmenter};
pub use nlp::tokenizer::{tokenize, Tokenizer};
pub use rank::{ranker::SentenceRanker, RankResult};
pub use summarizer::selector::{SentenceSelector, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
