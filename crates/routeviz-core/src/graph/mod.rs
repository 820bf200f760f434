//! Graph model and breadth-first traversal
//!
//! Provides the routing graph the simulator edits and searches:
//! - node/edge collections with derived adjacency and single-slot undo
//! - observable BFS between a source and a destination
//! - the observer seam the presentation layer consumes

pub mod bfs;
pub mod model;
pub mod observer;
pub mod types;

pub use model::Graph;
pub use observer::{NoopObserver, SearchObserver};
pub use types::{
    CancelToken, Deleted, EditEvent, Edge, Node, SearchOptions, SearchOutcome, SearchResult,
};
