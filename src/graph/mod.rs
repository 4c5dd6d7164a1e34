//! Sentence graph construction

pub mod builder;
pub mod similarity;
