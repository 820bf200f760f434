//! One-shot search over a graph described on the command line

use std::sync::Arc;
use std::time::Instant;

use crate::cli::parse::{canon, EdgeSpec, NodeSpec};
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::ConsoleObserver;
use routeviz_core::error::{Result, RoutevizError};
use routeviz_core::graph::{Graph, SearchOptions};

#[allow(clippy::too_many_arguments)]
pub fn handle_route(
    cli: &Cli,
    source: &str,
    destination: &str,
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    directed: bool,
    delay_ms: Option<u64>,
    start: Instant,
) -> Result<()> {
    let mut graph = Graph::new();
    if directed {
        graph.set_directed(true);
    }
    for spec in nodes {
        graph.add_node(spec.name.clone(), spec.x, spec.y)?;
    }
    for spec in edges {
        ensure_node(&mut graph, &spec.from)?;
        ensure_node(&mut graph, &spec.to)?;
        graph.add_edge(&spec.from, &spec.to, spec.weight)?;
    }

    if cli.verbose {
        eprintln!("build_graph: {:?}", start.elapsed());
    }

    // Progress lines only in interactive human output; edits above stay
    // silent because the observer is registered after the build
    if cli.format == OutputFormat::Human && !cli.quiet {
        graph.set_observer(Arc::new(ConsoleObserver));
    }

    let opts = match delay_ms {
        Some(ms) => SearchOptions::animated(ms),
        None => SearchOptions::default(),
    };
    if delay_ms.is_some() {
        let token = opts.cancel.clone();
        ctrlc::set_handler(move || token.cancel())
            .map_err(|e| RoutevizError::Other(format!("failed to set Ctrl-C handler: {}", e)))?;
    }

    let result = graph.breadth_first_search(&canon(source), &canon(destination), &opts)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            // The observer already narrated; quiet mode gets the bare path
            if cli.quiet {
                if result.found() {
                    println!("{}", result.path_display());
                } else {
                    println!("no path");
                }
            }
        }
    }

    Ok(())
}

/// Auto-place a node first seen in an --edge flag
fn ensure_node(graph: &mut Graph, name: &str) -> Result<()> {
    if !graph.contains(name) {
        let placed = graph.nodes().len() as f64;
        graph.add_node(name, 80.0 + placed * 90.0, 120.0)?;
    }
    Ok(())
}
