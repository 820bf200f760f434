//! Command dispatch logic for routeviz

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use routeviz_core::error::{Result, RoutevizError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(RoutevizError::UsageError(
            "no command specified (see 'routeviz --help')".to_string(),
        )),

        Some(Commands::Route {
            source,
            destination,
            edge,
            node,
            directed,
            delay_ms,
        }) => commands::route::handle_route(
            cli,
            source,
            destination,
            node,
            edge,
            *directed,
            *delay_ms,
            start,
        ),

        Some(Commands::Sim { script, delay_ms }) => {
            commands::sim::handle_sim(cli, script.as_deref(), *delay_ms)
        }
    }
}
