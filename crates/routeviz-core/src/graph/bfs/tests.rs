use crate::error::RoutevizError;
use crate::graph::model::Graph;
use crate::graph::observer::SearchObserver;
use crate::graph::types::{Edge, SearchOptions, SearchOutcome, SearchResult};
use std::sync::{Arc, Mutex};

/// Observer that records every hook invocation for assertions
#[derive(Debug, Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SearchObserver for Recorder {
    fn on_visit(&self, node: &str) {
        self.push(format!("visit {}", node));
    }

    fn on_enqueue(&self, node: &str, parent: &str) {
        self.push(format!("enqueue {} parent {}", node, parent));
    }

    fn on_result(&self, result: &SearchResult) {
        self.push(format!("result {:?}", result.outcome));
    }
}

/// Undirected diamond from the reference scenario:
/// A-B(1), B-C(1), A-D(1), D-C(1)
fn diamond() -> Graph {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name, 0.0, 0.0).unwrap();
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();
    graph.add_edge("A", "D", 1).unwrap();
    graph.add_edge("D", "C", 1).unwrap();
    graph
}

#[test]
fn test_diamond_visits_level_order_and_finds_three_node_path() {
    let graph = diamond();
    let result = graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();

    assert!(result.found());
    // A first, then its neighbors in insertion order, then the destination
    assert_eq!(result.visited, vec!["A", "B", "D", "C"]);
    // B was enqueued before D, so the tie resolves through B
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(
        result.path_edges,
        vec![Edge::new("A", "B", 1), Edge::new("B", "C", 1)]
    );
}

#[test]
fn test_insertion_order_breaks_ties() {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D"] {
        graph.add_node(name, 0.0, 0.0).unwrap();
    }
    // Same shape as the diamond but D's branch registered first
    graph.add_edge("A", "D", 9).unwrap();
    graph.add_edge("D", "C", 9).unwrap();
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();

    let result = graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();
    assert_eq!(result.path, vec!["A", "D", "C"]);
}

#[test]
fn test_bfs_returns_minimum_hop_path_ignoring_weights() {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D", "E"] {
        graph.add_node(name, 0.0, 0.0).unwrap();
    }
    // Heavy two-hop route vs. light three-hop route; hop count wins
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();
    graph.add_edge("C", "D", 1).unwrap();
    graph.add_edge("A", "E", 100).unwrap();
    graph.add_edge("E", "D", 100).unwrap();

    let result = graph
        .breadth_first_search("A", "D", &SearchOptions::default())
        .unwrap();
    assert_eq!(result.path, vec!["A", "E", "D"]);
}

#[test]
fn test_disconnected_graph_reports_not_found_after_component() {
    let mut graph = Graph::new();
    for name in ["A", "B", "C"] {
        graph.add_node(name, 0.0, 0.0).unwrap();
    }
    graph.add_edge("A", "B", 1).unwrap();

    let result = graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();
    assert_eq!(result.outcome, SearchOutcome::NotFound);
    assert_eq!(result.visited, vec!["A", "B"]);
    assert!(result.path.is_empty());
    assert!(result.path_edges.is_empty());
}

#[test]
fn test_absent_endpoints_are_rejected() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0).unwrap();

    let err = graph
        .breadth_first_search("A", "Z", &SearchOptions::default())
        .unwrap_err();
    assert!(matches!(err, RoutevizError::InvalidEndpoints { .. }));

    let err = graph
        .breadth_first_search("Z", "A", &SearchOptions::default())
        .unwrap_err();
    assert!(matches!(err, RoutevizError::InvalidEndpoints { .. }));
}

#[test]
fn test_directed_graph_only_follows_declared_direction() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0).unwrap();
    graph.add_node("B", 1.0, 0.0).unwrap();
    graph.set_directed(true);
    graph.add_edge("A", "B", 1).unwrap();

    let forward = graph
        .breadth_first_search("A", "B", &SearchOptions::default())
        .unwrap();
    assert!(forward.found());

    let backward = graph
        .breadth_first_search("B", "A", &SearchOptions::default())
        .unwrap();
    assert_eq!(backward.outcome, SearchOutcome::NotFound);
    assert_eq!(backward.visited, vec!["B"]);
}

#[test]
fn test_undirected_path_edges_match_stored_orientation() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0).unwrap();
    graph.add_node("B", 1.0, 0.0).unwrap();
    // Stored as B -> A; traversed A -> B
    graph.add_edge("B", "A", 7).unwrap();

    let result = graph
        .breadth_first_search("A", "B", &SearchOptions::default())
        .unwrap();
    assert!(result.found());
    assert_eq!(result.path_edges, vec![Edge::new("B", "A", 7)]);
}

#[test]
fn test_source_equals_destination() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0).unwrap();

    let result = graph
        .breadth_first_search("A", "A", &SearchOptions::default())
        .unwrap();
    assert!(result.found());
    assert_eq!(result.path, vec!["A"]);
    assert!(result.path_edges.is_empty());
}

#[test]
fn test_observer_hears_visits_enqueues_and_result() {
    let recorder = Arc::new(Recorder::default());
    let mut graph = diamond();
    graph.set_observer(recorder.clone());

    graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();

    let events = recorder.events();
    assert_eq!(
        events,
        vec![
            "visit A",
            "enqueue B parent A",
            "enqueue D parent A",
            "visit B",
            "enqueue C parent B",
            "visit D",
            "visit C",
            "result Found",
        ]
    );
}

#[test]
fn test_cancelled_token_stops_the_search() {
    let graph = diamond();
    let opts = SearchOptions::default();
    opts.cancel.cancel();

    let result = graph.breadth_first_search("A", "C", &opts).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Cancelled);
    assert!(result.visited.is_empty());
    assert!(result.path.is_empty());
}

#[test]
fn test_search_after_undo_uses_restored_edges() {
    let mut graph = diamond();
    graph.delete_node("B").unwrap();

    // Only the D branch remains
    let via_d = graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();
    assert_eq!(via_d.path, vec!["A", "D", "C"]);

    graph.undo().unwrap();
    let restored = graph
        .breadth_first_search("A", "C", &SearchOptions::default())
        .unwrap();
    assert!(restored.found());
    assert_eq!(restored.path.len(), 3);
}
