//! Sentence similarity graph
//!
//! Nodes live in a `Vec` and are addressed by sentence index; each node owns
//! an FxHashMap adjacency of `neighbor -> weight`. Construction happens in a
//! mutable [`GraphBuilder`]; [`SimilarityGraph::from_builder`] freezes it and
//! fills every node's total incident weight exactly once.

use super::similarity::similarity;
use crate::types::WordSet;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with `node_count` nodes and no edges
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); node_count],
        }
    }

    /// Append a node, returning its ID
    pub fn add_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(BuilderNode::default());
        id
    }

    /// Set the weight of the undirected edge between two nodes.
    ///
    /// Both directions are written, so the weights stay symmetric.
    /// Self-loops and unknown node IDs are ignored.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return;
        }
        let len = self.nodes.len() as u32;
        if from >= len || to >= len {
            return;
        }

        self.nodes[from as usize].edges.insert(to, weight);
        self.nodes[to as usize].edges.insert(from, weight);
    }

    /// Build the complete similarity graph over a sequence of word sets.
    ///
    /// Every pair of distinct sentences gets an edge, computed once per
    /// unordered pair. Pairs with nothing in common carry weight 0.
    pub fn from_word_sets<'a, I>(word_sets: I) -> Self
    where
        I: IntoIterator<Item = &'a WordSet>,
    {
        let sets: Vec<&WordSet> = word_sets.into_iter().collect();
        let mut builder = Self::with_nodes(sets.len());

        for i in 0..sets.len() {
            for j in (i + 1)..sets.len() {
                builder.set_edge(i as u32, j as u32, similarity(sets[i], sets[j]));
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A node of the frozen graph
#[derive(Debug, Clone, Default)]
pub struct SentenceNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
    /// Sum of all incident edge weights, computed once at freeze time
    pub total_weight: f64,
}

/// Immutable, undirected, weighted sentence graph
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    nodes: Vec<SentenceNode>,
}

impl SimilarityGraph {
    /// Freeze a builder, caching each node's total incident weight
    pub fn from_builder(builder: GraphBuilder) -> Self {
        let nodes = builder
            .nodes
            .into_iter()
            .map(|node| {
                let total_weight = node.edges.values().sum();
                SentenceNode {
                    edges: node.edges,
                    total_weight,
                }
            })
            .collect();

        Self { nodes }
    }

    /// Build and freeze the complete similarity graph over word sets
    pub fn from_word_sets<'a, I>(word_sets: I) -> Self
    where
        I: IntoIterator<Item = &'a WordSet>,
    {
        Self::from_builder(GraphBuilder::from_word_sets(word_sets))
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges (zero-weight edges included)
    pub fn num_edges(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID
    pub fn node(&self, id: u32) -> Option<&SentenceNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &SentenceNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Weight of the edge between two nodes (0 when absent)
    pub fn weight(&self, from: u32, to: u32) -> f64 {
        self.node(from)
            .and_then(|n| n.edges.get(&to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate over a node's neighbors and edge weights
    pub fn neighbors(&self, id: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|n| n.edges.iter().map(|(&to, &w)| (to, w)))
    }

    /// Cached total incident weight of a node (0 for unknown IDs)
    pub fn total_weight(&self, id: u32) -> f64 {
        self.node(id).map_or(0.0, |n| n.total_weight)
    }

    /// Check if a node shares no words with any other node
    pub fn is_isolated(&self, id: u32) -> bool {
        self.total_weight(id) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        WordSet::from_words(words.iter().copied())
    }

    #[test]
    fn test_set_edge_symmetric_without_self_loops() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.set_edge(0, 1, 0.5);
        builder.set_edge(2, 2, 1.0);
        builder.set_edge(0, 7, 1.0);

        assert_eq!(builder.edge_count(), 1);
        assert!(builder.get_node(2).unwrap().edges.is_empty());

        let graph = SimilarityGraph::from_builder(builder);
        assert_eq!(graph.weight(0, 1), 0.5);
        assert_eq!(graph.weight(1, 0), 0.5);
        assert_eq!(graph.weight(2, 2), 0.0);
    }

    #[test]
    fn test_complete_graph_over_sentences() {
        let sets = vec![
            set(&["are", "cats", "mammals"]),
            set(&["are", "dogs", "mammals"]),
            set(&["market", "rose", "stock", "the", "today"]),
        ];
        let graph = SimilarityGraph::from_word_sets(&sets);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert!(graph.weight(0, 1) > 0.0);
        assert_eq!(graph.weight(0, 2), 0.0);
        assert_eq!(graph.weight(1, 2), 0.0);
    }

    #[test]
    fn test_total_weight_cached() {
        let sets = vec![
            set(&["a", "b", "c"]),
            set(&["a", "b", "d"]),
            set(&["a", "e", "f"]),
        ];
        let graph = SimilarityGraph::from_word_sets(&sets);

        for (id, node) in graph.nodes() {
            let sum: f64 = graph.neighbors(id).map(|(_, w)| w).sum();
            assert!((node.total_weight - sum).abs() < 1e-12);
        }
        assert!(!graph.is_isolated(0));
    }

    #[test]
    fn test_isolated_node() {
        let sets = vec![set(&["a", "b"]), set(&["a", "b"]), WordSet::default()];
        let graph = SimilarityGraph::from_word_sets(&sets);

        assert!(graph.is_isolated(2));
        assert_eq!(graph.neighbors(2).count(), 2);
        assert_eq!(graph.total_weight(2), 0.0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = SimilarityGraph::from_word_sets(std::iter::empty());
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.neighbors(0).count(), 0);
    }
}
