// src/cli/handlers.rs
use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::ArborError;
use crate::exit::ArborExit;
use crate::graph::Graph;
use crate::mst::{self, MstReport};
use crate::reporting;
use crate::verify;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Outcome of reading a graph file.
enum Loaded {
    Graph(Graph),
    /// The file was unusable; the message is already printed.
    Exit(ArborExit),
}

/// Reads the graph. Parse failures print the message and become
/// `InvalidInput`; other failures propagate.
fn load_graph(path: &Path) -> Result<Loaded> {
    match Graph::from_file(path) {
        Ok(graph) => Ok(Loaded::Graph(graph)),
        Err(e @ ArborError::Parse { .. }) => {
            eprintln!("{} {}: {e}", "error:".red().bold(), path.display());
            Ok(Loaded::Exit(ArborExit::InvalidInput))
        }
        Err(e) => Err(e.into()),
    }
}

/// Handles the run command.
///
/// A result that does not span the graph exits with `VerifyFailed` even
/// when verification is off.
///
/// # Errors
/// Returns error if the graph cannot be read or the forest is corrupt.
pub fn handle_run(args: &RunArgs, mut config: Config) -> Result<ArborExit> {
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.algorithm.path_compression |= args.path_compression;
    config.algorithm.verify |= args.verify;

    let graph = match load_graph(&args.graph)? {
        Loaded::Graph(graph) => graph,
        Loaded::Exit(code) => return Ok(code),
    };

    let list = mst::initialize_with(&graph, &config.algorithm);
    let report = MstReport::new(mst::execute(list)?);

    let verification = config
        .algorithm
        .verify
        .then(|| verify::check(&graph, &report.arcs));
    reporting::print_report(&graph, &report, verification.as_ref(), &config.output)?;

    let failed = !report.spans(graph.vertex_count())
        || verification.is_some_and(|v| !v.is_valid());
    if failed {
        Ok(ArborExit::VerifyFailed)
    } else {
        Ok(ArborExit::Success)
    }
}

/// Handles the verify command.
///
/// # Errors
/// Returns error if the graph cannot be read or the forest is corrupt.
pub fn handle_verify(path: &Path, config: &Config) -> Result<ArborExit> {
    let graph = match load_graph(path)? {
        Loaded::Graph(graph) => graph,
        Loaded::Exit(code) => return Ok(code),
    };

    let list = mst::initialize_with(&graph, &config.algorithm);
    let arcs = mst::execute(list)?;
    let verification = verify::check(&graph, &arcs);
    reporting::print_verification(&verification);

    if verification.is_valid() {
        Ok(ArborExit::Success)
    } else {
        Ok(ArborExit::VerifyFailed)
    }
}

/// Handles the trees command.
///
/// # Errors
/// Returns error if the graph cannot be read.
pub fn handle_trees(path: &Path, config: &Config) -> Result<ArborExit> {
    let graph = match load_graph(path)? {
        Loaded::Graph(graph) => graph,
        Loaded::Exit(code) => return Ok(code),
    };

    let list = mst::initialize_with(&graph, &config.algorithm);
    reporting::print_trees(&graph, &list);
    Ok(ArborExit::Success)
}
