//! Summarization components
//!
//! Extractive selection of ranked sentences under a word (or sentence) budget.

pub mod selector;
