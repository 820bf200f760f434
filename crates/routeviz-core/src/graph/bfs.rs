mod path;

use crate::error::{Result, RoutevizError};
use crate::graph::model::Graph;
use crate::graph::types::{SearchOptions, SearchOutcome, SearchResult};
use std::collections::{HashMap, HashSet, VecDeque};

impl Graph {
    /// Breadth-first search from `source` to `destination`.
    ///
    /// Plain hop-count BFS: a FIFO queue seeded with the source,
    /// neighbors expanded in edge-insertion order, parent pointers for
    /// path reconstruction once the destination is dequeued. Edge
    /// weights are display labels and play no role in traversal order;
    /// the simulator this reimplements behaved the same way, so the
    /// result is the minimum-hop path, not the minimum-weight one.
    ///
    /// The registered observer hears every visit and enqueue event
    /// inline. `opts.step_delay` paces the loop for animation and is
    /// `None` for deterministic runs; `opts.cancel` is checked once per
    /// dequeued node.
    #[tracing::instrument(skip(self, opts), fields(source = %source, destination = %destination))]
    pub fn breadth_first_search(
        &self,
        source: &str,
        destination: &str,
        opts: &SearchOptions,
    ) -> Result<SearchResult> {
        if !self.contains(source) || !self.contains(destination) {
            return Err(RoutevizError::InvalidEndpoints {
                source_node: source.into(),
                destination: destination.into(),
            });
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut parent: HashMap<String, String> = HashMap::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut visit_order: Vec<String> = Vec::new();

        queue.push_back(source.to_string());
        visited.insert(source.to_string());

        let mut outcome = SearchOutcome::NotFound;
        while let Some(current) = queue.pop_front() {
            if opts.cancel.is_cancelled() {
                outcome = SearchOutcome::Cancelled;
                tracing::debug!(node = %current, "search cancelled");
                break;
            }

            self.observer().on_visit(&current);
            visit_order.push(current.clone());
            if let Some(delay) = opts.step_delay {
                std::thread::sleep(delay);
            }

            if current == destination {
                outcome = SearchOutcome::Found;
                break;
            }

            for edge in self.neighbors(&current) {
                if !visited.contains(&edge.to) {
                    visited.insert(edge.to.clone());
                    parent.insert(edge.to.clone(), current.clone());
                    queue.push_back(edge.to.clone());
                    self.observer().on_enqueue(&edge.to, &current);
                }
            }
        }

        let node_path = if outcome == SearchOutcome::Found {
            path::reconstruct(source, destination, &parent)
        } else {
            Vec::new()
        };
        let path_edges = path::resolve_edges(&node_path, self.edges(), self.is_directed());

        let result = SearchResult {
            source: source.to_string(),
            destination: destination.to_string(),
            outcome,
            visited: visit_order,
            path: node_path,
            path_edges,
        };
        tracing::debug!(outcome = ?result.outcome, hops = result.path_edges.len(), "search finished");
        self.observer().on_result(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests;
