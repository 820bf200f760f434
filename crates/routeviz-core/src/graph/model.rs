use crate::error::{Result, RoutevizError};
use crate::graph::observer::{NoopObserver, SearchObserver};
use crate::graph::types::{Deleted, EditEvent, Edge, Node};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The routing graph: nodes and weighted edges with a derived adjacency
/// map, a graph-global directedness flag, and a single-slot undo buffer.
///
/// Edits require `&mut self` and a search borrows `&self`, so mutation
/// and an in-progress search cannot interleave on one instance.
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    directed: bool,
    adjacency: HashMap<String, Vec<Edge>>,
    last_deleted: Option<Deleted>,
    name_counter: usize,
    observer: Arc<dyn SearchObserver>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("directed", &self.directed)
            .finish_non_exhaustive()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Successive auto-assigned node names: A..Z, then AA, AB, ...
fn letter_name(index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index;
    loop {
        digits.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    digits.iter().rev().collect()
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed: false,
            adjacency: HashMap::new(),
            last_deleted: None,
            name_counter: 0,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Register the observer that receives edit and search events
    pub fn set_observer(&mut self, observer: Arc<dyn SearchObserver>) {
        self.observer = observer;
    }

    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Outgoing edges of a node under the current directedness
    pub(crate) fn neighbors(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn observer(&self) -> &dyn SearchObserver {
        self.observer.as_ref()
    }

    /// Add a node with an explicit name
    pub fn add_node(&mut self, name: impl Into<String>, x: f64, y: f64) -> Result<Node> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RoutevizError::DuplicateNode { name });
        }
        let node = Node::new(name, x, y);
        self.nodes.push(node.clone());
        tracing::debug!(name = %node.name, "add_node");
        self.notify_edit(EditEvent::NodeAdded {
            name: node.name.clone(),
        });
        Ok(node)
    }

    /// Add a node with the next free auto-assigned letter name
    pub fn add_auto_node(&mut self, x: f64, y: f64) -> Result<Node> {
        let mut name = letter_name(self.name_counter);
        self.name_counter += 1;
        while self.contains(&name) {
            name = letter_name(self.name_counter);
            self.name_counter += 1;
        }
        self.add_node(name, x, y)
    }

    /// Add a weighted edge between two existing nodes.
    ///
    /// Self-loops are rejected before the weight is inspected, so
    /// `add_edge("A", "A", w)` is a self-loop error for any `w`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<Edge> {
        if from == to {
            return Err(RoutevizError::SelfLoop { name: from.into() });
        }
        if weight <= 0 {
            return Err(RoutevizError::NonPositiveWeight { weight });
        }
        let weight = u32::try_from(weight)
            .map_err(|_| RoutevizError::UsageError(format!("edge weight out of range: {}", weight)))?;
        if !self.contains(from) {
            return Err(RoutevizError::node_not_found(from));
        }
        if !self.contains(to) {
            return Err(RoutevizError::node_not_found(to));
        }
        let edge = Edge::new(from, to, weight);
        self.edges.push(edge.clone());
        self.rebuild_adjacency();
        tracing::debug!(from = %edge.from, to = %edge.to, weight = edge.weight, "add_edge");
        self.notify_edit(EditEvent::EdgeAdded {
            from: edge.from.clone(),
            to: edge.to.clone(),
            weight: edge.weight,
            directed: self.directed,
        });
        Ok(edge)
    }

    /// Delete a node and every edge incident to it, recording both for undo
    pub fn delete_node(&mut self, name: &str) -> Result<()> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.name == name)
            .ok_or_else(|| RoutevizError::node_not_found(name))?;
        let node = self.nodes.remove(index);
        let incident: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| e.from == name || e.to == name)
            .cloned()
            .collect();
        self.edges.retain(|e| e.from != name && e.to != name);
        self.rebuild_adjacency();
        let removed = incident.len();
        self.last_deleted = Some(Deleted::Node {
            node,
            edges: incident,
        });
        tracing::debug!(name, edges = removed, "delete_node");
        self.notify_edit(EditEvent::NodeDeleted {
            name: name.into(),
            edges: removed,
        });
        Ok(())
    }

    /// Delete every edge matching the given endpoints.
    ///
    /// Undirected graphs match either orientation. Both endpoint names
    /// must exist; an unknown name is a node error, not an edge error.
    pub fn delete_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.contains(from) {
            return Err(RoutevizError::node_not_found(from));
        }
        if !self.contains(to) {
            return Err(RoutevizError::node_not_found(to));
        }
        let directed = self.directed;
        let matches = |e: &Edge| {
            (e.from == from && e.to == to) || (!directed && e.from == to && e.to == from)
        };
        let removed: Vec<Edge> = self.edges.iter().filter(|e| matches(e)).cloned().collect();
        if removed.is_empty() {
            return Err(RoutevizError::edge_not_found(from, to));
        }
        self.edges.retain(|e| !matches(e));
        self.rebuild_adjacency();
        self.last_deleted = Some(Deleted::Edges(removed));
        tracing::debug!(from, to, "delete_edge");
        self.notify_edit(EditEvent::EdgeDeleted {
            from: from.into(),
            to: to.into(),
            directed: self.directed,
        });
        Ok(())
    }

    /// Restore the most recent deletion.
    ///
    /// The buffer holds a single slot; a second undo without an
    /// intervening deletion reports that there is nothing to restore.
    pub fn undo(&mut self) -> Result<EditEvent> {
        let deleted = self.last_deleted.take().ok_or(RoutevizError::NothingToUndo)?;
        let event = match deleted {
            Deleted::Node { node, edges } => {
                let name = node.name.clone();
                let count = edges.len();
                self.nodes.push(node);
                self.edges.extend(edges);
                EditEvent::NodeRestored { name, edges: count }
            }
            Deleted::Edges(edges) => {
                let (from, to) = edges
                    .first()
                    .map(|e| (e.from.clone(), e.to.clone()))
                    .unwrap_or_default();
                self.edges.extend(edges);
                EditEvent::EdgeRestored {
                    from,
                    to,
                    directed: self.directed,
                }
            }
        };
        self.rebuild_adjacency();
        tracing::debug!(event = %event, "undo");
        self.notify_edit(event.clone());
        Ok(event)
    }

    /// Toggle the global edge interpretation and rebuild adjacency
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        self.rebuild_adjacency();
        tracing::debug!(directed, "set_directed");
        self.notify_edit(EditEvent::DirectedChanged { directed });
    }

    /// Clear nodes, edges, the undo slot, and the auto-name counter
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.last_deleted = None;
        self.name_counter = 0;
        tracing::debug!("reset");
        self.notify_edit(EditEvent::GraphReset);
    }

    fn notify_edit(&self, event: EditEvent) {
        self.observer.on_edit(&event);
    }

    /// Rebuild the adjacency map from the edge list. Undirected graphs
    /// register each edge under both endpoints.
    fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();
        for edge in &self.edges {
            self.adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(edge.clone());
            if !self.directed {
                self.adjacency
                    .entry(edge.to.clone())
                    .or_default()
                    .push(edge.reversed());
            }
        }
    }
}
