//! Scripted or interactive edit/search session
//!
//! Reads one command per line from a script file or stdin:
//!
//! ```text
//! node [NAME [X Y]]      add a node (auto-named when NAME omitted)
//! edge FROM TO WEIGHT    add a weighted edge
//! delete-node NAME
//! delete-edge FROM TO
//! undo
//! directed on|off
//! reset
//! bfs SOURCE DEST
//! quit
//! ```
//!
//! Lines starting with `#` are comments. A failed command reports its
//! error and the session continues, like the simulator's dialogs.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::cli::parse::canon;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::ConsoleObserver;
use routeviz_core::error::{Result, RoutevizError};
use routeviz_core::graph::{Graph, SearchOptions};

enum Control {
    Continue,
    Quit,
}

pub fn handle_sim(cli: &Cli, script: Option<&Path>, delay_ms: Option<u64>) -> Result<()> {
    let mut graph = Graph::new();
    if cli.format == OutputFormat::Human && !cli.quiet {
        graph.set_observer(Arc::new(ConsoleObserver));
    }

    let reader: Box<dyn BufRead> = match script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match run_line(cli, &mut graph, trimmed, delay_ms) {
            Ok(Control::Quit) => break,
            Ok(Control::Continue) => {}
            Err(err) => report_error(cli, &err),
        }
    }

    Ok(())
}

fn report_error(cli: &Cli, err: &RoutevizError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
}

fn run_line(cli: &Cli, graph: &mut Graph, line: &str, delay_ms: Option<u64>) -> Result<Control> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Control::Continue);
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "node" => add_node(graph, &args),
        "edge" => add_edge(graph, &args),
        "delete-node" => delete_node(graph, &args),
        "delete-edge" => delete_edge(graph, &args),
        "undo" => undo(cli, graph),
        "directed" => set_directed(graph, &args),
        "reset" => {
            graph.reset();
            Ok(Control::Continue)
        }
        "bfs" => search(cli, graph, &args, delay_ms),
        "quit" | "exit" => Ok(Control::Quit),
        other => Err(RoutevizError::UsageError(format!(
            "unknown command: {}",
            other
        ))),
    }
}

fn usage(text: &str) -> RoutevizError {
    RoutevizError::UsageError(format!("usage: {}", text))
}

fn parse_coord(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| RoutevizError::UsageError(format!("invalid coordinate '{}'", s)))
}

fn add_node(graph: &mut Graph, args: &[&str]) -> Result<Control> {
    match args {
        [] => {
            // Auto-named, spread left to right like canvas clicks
            let placed = graph.nodes().len() as f64;
            graph.add_auto_node(80.0 + placed * 90.0, 120.0)?;
        }
        [name] => {
            graph.add_node(canon(name), 0.0, 0.0)?;
        }
        [name, x, y] => {
            graph.add_node(canon(name), parse_coord(x)?, parse_coord(y)?)?;
        }
        _ => return Err(usage("node [NAME [X Y]]")),
    }
    Ok(Control::Continue)
}

fn add_edge(graph: &mut Graph, args: &[&str]) -> Result<Control> {
    match args {
        [from, to, weight] => {
            let weight = weight
                .parse::<i64>()
                .map_err(|_| RoutevizError::UsageError(format!("invalid weight '{}'", weight)))?;
            graph.add_edge(&canon(from), &canon(to), weight)?;
            Ok(Control::Continue)
        }
        _ => Err(usage("edge FROM TO WEIGHT")),
    }
}

fn delete_node(graph: &mut Graph, args: &[&str]) -> Result<Control> {
    match args {
        [name] => {
            graph.delete_node(&canon(name))?;
            Ok(Control::Continue)
        }
        _ => Err(usage("delete-node NAME")),
    }
}

fn delete_edge(graph: &mut Graph, args: &[&str]) -> Result<Control> {
    match args {
        [from, to] => {
            graph.delete_edge(&canon(from), &canon(to))?;
            Ok(Control::Continue)
        }
        _ => Err(usage("delete-edge FROM TO")),
    }
}

fn undo(cli: &Cli, graph: &mut Graph) -> Result<Control> {
    match graph.undo() {
        Ok(_) => Ok(Control::Continue),
        // An empty undo slot is informational, not a session error
        Err(RoutevizError::NothingToUndo) => {
            if cli.format == OutputFormat::Human && !cli.quiet {
                println!("No deletion to undo.");
            }
            Ok(Control::Continue)
        }
        Err(err) => Err(err),
    }
}

fn set_directed(graph: &mut Graph, args: &[&str]) -> Result<Control> {
    match args {
        ["on"] => graph.set_directed(true),
        ["off"] => graph.set_directed(false),
        _ => return Err(usage("directed on|off")),
    }
    Ok(Control::Continue)
}

fn search(cli: &Cli, graph: &Graph, args: &[&str], delay_ms: Option<u64>) -> Result<Control> {
    match args {
        [source, destination] => {
            let opts = match delay_ms {
                Some(ms) => SearchOptions::animated(ms),
                None => SearchOptions::default(),
            };
            let result = graph.breadth_first_search(&canon(source), &canon(destination), &opts)?;
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&result)?);
            } else if cli.quiet && result.found() {
                println!("{}", result.path_display());
            }
            Ok(Control::Continue)
        }
        _ => Err(usage("bfs SOURCE DEST")),
    }
}
