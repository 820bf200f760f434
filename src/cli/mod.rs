//! CLI argument parsing for routeviz
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::{parse_edge_spec, parse_node_spec, EdgeSpec, NodeSpec};

/// Routeviz - BFS routing simulator CLI
#[derive(Parser, Debug)]
#[command(name = "routeviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report progress and timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one breadth-first search over a graph described on the command line
    Route {
        /// Source node name
        source: String,

        /// Destination node name
        destination: String,

        /// Edge spec FROM-TO:WEIGHT (can be specified multiple times)
        #[arg(long, short, value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
        edge: Vec<EdgeSpec>,

        /// Node placement NAME:X,Y (nodes named only in --edge are placed automatically)
        #[arg(long, short, value_parser = parse_node_spec, action = clap::ArgAction::Append)]
        node: Vec<NodeSpec>,

        /// Treat edges as directed
        #[arg(long)]
        directed: bool,

        /// Animate: pause this many milliseconds between BFS steps
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Drive an edit/search session from a script file or stdin
    Sim {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Animate: pause this many milliseconds between BFS steps
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}
