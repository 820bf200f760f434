//! Path reconstruction from BFS parent pointers

use crate::graph::types::Edge;
use std::collections::HashMap;

/// Walk parent pointers back from the destination and reverse, yielding
/// the source-to-destination node sequence.
pub(super) fn reconstruct(
    source: &str,
    destination: &str,
    parent: &HashMap<String, String>,
) -> Vec<String> {
    let mut nodes = vec![destination.to_string()];
    let mut current = destination;
    while current != source {
        match parent.get(current) {
            Some(pred) => {
                nodes.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }
    nodes.reverse();
    nodes
}

/// Resolve each consecutive node pair on the path to a stored edge.
///
/// Directed graphs match the declared orientation only; undirected
/// graphs accept either orientation. The first stored match wins, so
/// parallel edges resolve by insertion order.
pub(super) fn resolve_edges(path: &[String], edges: &[Edge], directed: bool) -> Vec<Edge> {
    path.windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            edges.iter().find(|e| {
                (e.from == *from && e.to == *to)
                    || (!directed && e.from == *to && e.to == *from)
            })
        })
        .cloned()
        .collect()
}
