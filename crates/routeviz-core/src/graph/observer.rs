use crate::graph::types::{EditEvent, SearchResult};

/// Synchronous observation seam between the engine and a presentation
/// layer.
///
/// The engine calls these hooks inline while it works; a caller that
/// wants to animate or log decides its own threading and scheduling.
/// All hooks default to no-ops.
pub trait SearchObserver {
    /// A node was dequeued and is being examined
    fn on_visit(&self, _node: &str) {}

    /// A newly discovered neighbor was enqueued with its parent pointer
    fn on_enqueue(&self, _node: &str, _parent: &str) {}

    /// The search finished
    fn on_result(&self, _result: &SearchResult) {}

    /// A graph edit (add/delete/undo/reset) was applied
    fn on_edit(&self, _event: &EditEvent) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
