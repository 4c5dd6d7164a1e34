//! Sentence ranking
//!
//! Iterative score propagation over the similarity graph.

pub mod ranker;

/// Result of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Scores for each sentence (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of sweeps performed
    pub iterations: usize,
    /// Largest per-node change in the final sweep
    pub delta: f64,
    /// Whether the scores settled within the threshold
    pub converged: bool,
}

impl RankResult {
    /// Create a new ranking result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Node IDs ordered by score descending; equal scores keep index order
    pub fn ranked(&self) -> Vec<u32> {
        let mut order: Vec<u32> = (0..self.scores.len() as u32).collect();
        order.sort_by(|&a, &b| {
            self.scores[b as usize]
                .total_cmp(&self.scores[a as usize])
                .then(a.cmp(&b))
        });
        order
    }
}
