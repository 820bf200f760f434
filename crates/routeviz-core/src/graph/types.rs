use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A placed node. Position is display-only; traversal never reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Node {
            name: name.into(),
            x,
            y,
        }
    }
}

/// A weighted edge between two named nodes.
///
/// The weight is validated positive at creation and carried for display;
/// traversal order ignores it. Directedness is a graph-global flag, not
/// a per-edge property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The same edge seen from the other endpoint, for undirected adjacency.
    pub fn reversed(&self) -> Edge {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

/// Single-slot undo buffer contents: the most recent deletion.
#[derive(Debug, Clone)]
pub enum Deleted {
    /// A node together with every edge that was incident to it
    Node { node: Node, edges: Vec<Edge> },
    /// The edge set removed by one delete-edge operation
    Edges(Vec<Edge>),
}

/// Edit notifications delivered to the observer.
///
/// `Display` renders the message-log line the simulator UI shows for
/// each event.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    NodeAdded {
        name: String,
    },
    EdgeAdded {
        from: String,
        to: String,
        weight: u32,
        directed: bool,
    },
    NodeDeleted {
        name: String,
        edges: usize,
    },
    EdgeDeleted {
        from: String,
        to: String,
        directed: bool,
    },
    NodeRestored {
        name: String,
        edges: usize,
    },
    EdgeRestored {
        from: String,
        to: String,
        directed: bool,
    },
    DirectedChanged {
        directed: bool,
    },
    GraphReset,
}

fn arrow(directed: bool) -> &'static str {
    if directed {
        "->"
    } else {
        "<->"
    }
}

impl fmt::Display for EditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditEvent::NodeAdded { name } => write!(f, "Node {} added.", name),
            EditEvent::EdgeAdded {
                from,
                to,
                weight,
                directed,
            } => write!(f, "Edge added: {} {} {} ({})", from, arrow(*directed), to, weight),
            EditEvent::NodeDeleted { name, .. } => write!(f, "Node {} deleted.", name),
            EditEvent::EdgeDeleted { from, to, directed } => {
                write!(f, "Edge {} {} {} deleted.", from, arrow(*directed), to)
            }
            EditEvent::NodeRestored { name, .. } => {
                write!(f, "Undo: Restored node {} and its edges.", name)
            }
            EditEvent::EdgeRestored { from, to, directed } => {
                write!(f, "Undo: Restored edge {} {} {}.", from, arrow(*directed), to)
            }
            EditEvent::DirectedChanged { directed } => {
                if *directed {
                    write!(f, "Graph is now directed.")
                } else {
                    write!(f, "Graph is now undirected.")
                }
            }
            EditEvent::GraphReset => write!(f, "Graph reset."),
        }
    }
}

/// Cooperative cancellation flag for an in-flight search.
///
/// The default token never fires; a caller that wants Ctrl-C style
/// interruption clones the token and calls `cancel` from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for a single search invocation
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Pause between BFS steps; `None` runs the search without pacing,
    /// which is the deterministic mode tests use
    pub step_delay: Option<Duration>,
    /// Cancellation flag checked once per dequeued node
    pub cancel: CancelToken,
}

impl SearchOptions {
    /// Animated options with a per-step delay in milliseconds
    pub fn animated(delay_ms: u64) -> Self {
        SearchOptions {
            step_delay: Some(Duration::from_millis(delay_ms)),
            ..Default::default()
        }
    }
}

/// How a search invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found,
    NotFound,
    Cancelled,
}

/// Complete search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub source: String,
    pub destination: String,
    pub outcome: SearchOutcome,
    /// Nodes in the order BFS dequeued them
    pub visited: Vec<String>,
    /// Source-to-destination node path; empty unless found
    pub path: Vec<String>,
    /// Stored edges along the path, resolved by insertion order
    pub path_edges: Vec<Edge>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Render the path as the UI shows it: `A -> B -> C`
    pub fn path_display(&self) -> String {
        self.path.join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reversed() {
        let edge = Edge::new("A", "B", 4);
        let rev = edge.reversed();
        assert_eq!(rev.from, "B");
        assert_eq!(rev.to, "A");
        assert_eq!(rev.weight, 4);
    }

    #[test]
    fn test_edit_event_display_undirected() {
        let event = EditEvent::EdgeAdded {
            from: "A".into(),
            to: "B".into(),
            weight: 3,
            directed: false,
        };
        assert_eq!(event.to_string(), "Edge added: A <-> B (3)");
    }

    #[test]
    fn test_edit_event_display_directed_delete() {
        let event = EditEvent::EdgeDeleted {
            from: "A".into(),
            to: "B".into(),
            directed: true,
        };
        assert_eq!(event.to_string(), "Edge A -> B deleted.");
    }

    #[test]
    fn test_cancel_token_default_never_fires() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_search_options_animated() {
        let opts = SearchOptions::animated(250);
        assert_eq!(opts.step_delay, Some(Duration::from_millis(250)));
        assert!(!opts.cancel.is_cancelled());
    }

    #[test]
    fn test_search_result_serializes_outcome() {
        let result = SearchResult {
            source: "A".into(),
            destination: "B".into(),
            outcome: SearchOutcome::NotFound,
            visited: vec!["A".into()],
            path: vec![],
            path_edges: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "not_found");
    }

    #[test]
    fn test_path_display() {
        let result = SearchResult {
            source: "A".into(),
            destination: "C".into(),
            outcome: SearchOutcome::Found,
            visited: vec!["A".into(), "B".into(), "C".into()],
            path: vec!["A".into(), "B".into(), "C".into()],
            path_edges: vec![],
        };
        assert_eq!(result.path_display(), "A -> B -> C");
    }
}
