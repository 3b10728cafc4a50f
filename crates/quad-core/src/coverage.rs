//! Adjacency graph over transmitters whose coverage zones touch or overlap.

use crate::geometry::overlaps;
use crate::models::Transmitter;
use std::collections::HashMap;

/// Transmitter adjacency built from pairwise zone overlap.
///
/// Every transmitter is a key, even when it has no neighbors. Neighbor
/// lists follow the registration order of the input slice.
#[derive(Debug, Clone, Default)]
pub struct CoverageGraph {
    adjacency: HashMap<Transmitter, Vec<Transmitter>>,
}

impl CoverageGraph {
    /// Build the graph with an O(n²) pairwise scan.
    pub fn build(transmitters: &[Transmitter]) -> Self {
        let mut adjacency = HashMap::with_capacity(transmitters.len());
        for t1 in transmitters {
            let neighbors: Vec<Transmitter> = transmitters
                .iter()
                .filter(|t2| *t2 != t1 && overlaps(t1, t2))
                .copied()
                .collect();
            adjacency.insert(*t1, neighbors);
        }

        let graph = Self { adjacency };
        tracing::debug!(
            transmitters = graph.len(),
            edges = graph.edge_count(),
            "Coverage graph built"
        );
        graph
    }

    pub fn neighbors(&self, transmitter: &Transmitter) -> Option<&[Transmitter]> {
        self.adjacency.get(transmitter).map(Vec::as_slice)
    }

    pub fn contains(&self, transmitter: &Transmitter) -> bool {
        self.adjacency.contains_key(transmitter)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}
