//! Helpers shared across commands

use routeviz_core::graph::{EditEvent, SearchObserver, SearchOutcome, SearchResult};

/// Observer that renders engine events as the simulator's message log
/// lines on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl SearchObserver for ConsoleObserver {
    fn on_visit(&self, node: &str) {
        println!("Visiting: {}", node);
    }

    fn on_enqueue(&self, node: &str, parent: &str) {
        println!("Enqueueing: {} (parent: {})", node, parent);
    }

    fn on_result(&self, result: &SearchResult) {
        match result.outcome {
            SearchOutcome::Found => println!("Best path found: {}", result.path_display()),
            SearchOutcome::NotFound => println!(
                "No path found from {} to {}",
                result.source, result.destination
            ),
            SearchOutcome::Cancelled => println!("Search cancelled."),
        }
    }

    fn on_edit(&self, event: &EditEvent) {
        println!("{}", event);
    }
}
