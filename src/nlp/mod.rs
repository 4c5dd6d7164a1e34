//! Text processing ahead of ranking
//!
//! Segmentation into sentences, normalization of each sentence into its
//! comparison form, and tokenization into word sets.

pub mod lemma;
pub mod normalizer;
pub mod segmenter;
pub mod tokenizer;
