//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Commands, RunArgs},
    handlers::{handle_run, handle_trees, handle_verify},
};
use crate::config::Config;
use crate::exit::ArborExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: Config) -> Result<ArborExit> {
    match command {
        Commands::Run {
            graph,
            format,
            path_compression,
            verify,
        } => handle_run(
            &RunArgs {
                graph,
                format,
                path_compression,
                verify,
            },
            config,
        ),
        Commands::Verify { graph } => handle_verify(&graph, &config),
        Commands::Trees { graph } => handle_trees(&graph, &config),
    }
}
