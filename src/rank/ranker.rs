//! TextRank sentence ranker
//!
//! Every sweep reads the previous score vector and writes a fresh one; the
//! two buffers are swapped only after the whole sweep. Updating in place
//! would let early nodes see this sweep's scores and change where the
//! iteration settles.

use super::RankResult;
use crate::graph::builder::SimilarityGraph;
use crate::types::{Sentence, SummaryConfig};

/// Iterative sentence ranker
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of sweeps
    pub max_iterations: usize,
    /// Convergence threshold on the largest per-node change
    pub threshold: f64,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

impl SentenceRanker {
    /// Create a new ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from a summary config
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank the graph's nodes, starting every score at
    /// [`Sentence::INITIAL_SCORE`].
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &SimilarityGraph) -> RankResult {
        self.run_from(graph, vec![Sentence::INITIAL_SCORE; graph.num_nodes()])
    }

    /// Rank starting from the given scores (one per node)
    pub fn run_from(&self, graph: &SimilarityGraph, initial: Vec<f64>) -> RankResult {
        let n = graph.num_nodes();
        debug_assert_eq!(initial.len(), n);
        if n == 0 {
            return RankResult::new(Vec::new(), 0, 0.0, true);
        }

        let baseline = 1.0 - self.damping;
        let mut scores = initial;
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            for (node, new_score) in new_scores.iter_mut().enumerate() {
                let mut raw = 0.0;
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    let source_total = graph.total_weight(neighbor);
                    if source_total == 0.0 {
                        continue;
                    }
                    raw += weight / source_total * scores[neighbor as usize];
                }
                *new_score = raw * self.damping + baseline;
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut new_scores);

            if delta <= self.threshold {
                break;
            }
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        tracing::debug!(iterations, delta, converged, "sentence ranking finished");

        RankResult::new(scores, iterations, delta, converged)
    }
}
