//! Routeviz Core Library
//!
//! Graph traversal engine for the routeviz BFS routing simulator:
//! an interactively edited weighted graph with observable
//! breadth-first search between a source and a destination.

pub mod error;
pub mod graph;
pub mod logging;
