//! All-simple-paths search over the coverage graph.

use crate::coverage::CoverageGraph;
use crate::models::{Path, Transmitter};

/// Enumerate every simple path from `start` to `end`.
///
/// Returns `None` when `start` is not part of the graph, and an empty list
/// when it is but `end` cannot be reached. When `start == end` the single
/// one-element path is returned without consulting the graph.
pub fn find_paths(graph: &CoverageGraph, start: Transmitter, end: Transmitter) -> Option<Vec<Path>> {
    if start == end {
        return Some(vec![vec![start]]);
    }
    if !graph.contains(&start) {
        return None;
    }

    let mut prefix = Vec::new();
    let mut paths = Vec::new();
    extend_paths(graph, start, end, &mut prefix, &mut paths);
    tracing::debug!(%start, %end, paths = paths.len(), "Route search finished");
    Some(paths)
}

/// Depth-first step. `prefix` doubles as the visited set for the current
/// branch and is restored before returning.
fn extend_paths(
    graph: &CoverageGraph,
    node: Transmitter,
    end: Transmitter,
    prefix: &mut Path,
    paths: &mut Vec<Path>,
) {
    prefix.push(node);
    if node == end {
        paths.push(prefix.clone());
    } else if let Some(neighbors) = graph.neighbors(&node) {
        for next in neighbors {
            if !prefix.contains(next) {
                extend_paths(graph, *next, end, prefix, paths);
            }
        }
    }
    prefix.pop();
}
